//! Clipboard access through external helper programs.
//!
//! Reads go through a permission check first, mirroring the three states a
//! host can report: granted, not yet granted, and denied.

use std::env;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::settings::ClipboardSettings;

pub const PERMISSION_REQUIRED: &str = "Clipboard access permission is required. Please grant permission in your system settings to enable pasting from clipboard.";
pub const PERMISSION_DENIED: &str =
    "Clipboard access is denied. You need to enable clipboard access to use this feature.";
pub const COPIED: &str = "Code copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardPermission {
    Granted,
    Prompt,
    Denied,
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("no clipboard helper is available")]
    Unavailable,

    #[error("clipboard access is disabled")]
    Disabled,

    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed: {message}")]
    Failed { program: String, message: String },
}

pub trait ClipboardSource {
    fn permission(&self) -> ClipboardPermission;
    fn read_text(&self) -> Result<String, ClipboardError>;
}

pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Result of a paste request, one variant per user-visible outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    Pasted(String),
    PermissionRequired,
    PermissionDenied,
    Failed(String),
}

impl PasteOutcome {
    /// Advisory text for outcomes that did not produce text.
    pub fn message(&self) -> Option<String> {
        match self {
            PasteOutcome::Pasted(_) => None,
            PasteOutcome::PermissionRequired => Some(PERMISSION_REQUIRED.to_string()),
            PasteOutcome::PermissionDenied => Some(PERMISSION_DENIED.to_string()),
            PasteOutcome::Failed(msg) => Some(format!("Failed to access clipboard: {msg}")),
        }
    }
}

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

impl CopyOutcome {
    pub fn message(&self) -> String {
        match self {
            CopyOutcome::Copied => COPIED.to_string(),
            CopyOutcome::Failed(msg) => format!("Failed to copy code: {msg}"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// Check permission, then read.
pub fn paste_from(source: &dyn ClipboardSource) -> PasteOutcome {
    match source.permission() {
        ClipboardPermission::Granted => match source.read_text() {
            Ok(text) => PasteOutcome::Pasted(text),
            Err(err) => PasteOutcome::Failed(err.to_string()),
        },
        ClipboardPermission::Prompt => PasteOutcome::PermissionRequired,
        ClipboardPermission::Denied => PasteOutcome::PermissionDenied,
    }
}

pub fn copy_to(sink: &dyn ClipboardSink, text: &str) -> CopyOutcome {
    match sink.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => CopyOutcome::Failed(err.to_string()),
    }
}

const READ_CANDIDATES: &[&[&str]] = &[
    &["pbpaste"],
    &["wl-paste", "--no-newline"],
    &["xclip", "-o", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--output"],
    &["powershell", "-NoProfile", "-Command", "Get-Clipboard"],
];

const WRITE_CANDIDATES: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip"],
];

/// Clipboard backed by helper programs such as `pbpaste` or `wl-copy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    enabled: bool,
    read: Option<Vec<String>>,
    write: Option<Vec<String>>,
}

impl CommandClipboard {
    pub fn new(enabled: bool, read: Option<Vec<String>>, write: Option<Vec<String>>) -> Self {
        Self {
            enabled,
            read: read.filter(|c| !c.is_empty()),
            write: write.filter(|c| !c.is_empty()),
        }
    }

    /// Configured commands win; otherwise the first helper found on `PATH`.
    pub fn from_settings(settings: &ClipboardSettings) -> Self {
        let read = non_empty(&settings.read_command).or_else(|| detect(READ_CANDIDATES));
        let write = non_empty(&settings.write_command).or_else(|| detect(WRITE_CANDIDATES));

        if settings.enabled && read.is_none() {
            log::debug!("no clipboard reader found on PATH");
        }
        Self::new(settings.enabled, read, write)
    }
}

impl ClipboardSource for CommandClipboard {
    fn permission(&self) -> ClipboardPermission {
        if !self.enabled {
            ClipboardPermission::Denied
        } else if self.read.is_none() {
            ClipboardPermission::Prompt
        } else {
            ClipboardPermission::Granted
        }
    }

    fn read_text(&self) -> Result<String, ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::Disabled);
        }
        let argv = self.read.as_deref().ok_or(ClipboardError::Unavailable)?;
        let program = &argv[0];

        let output = Command::new(program)
            .args(&argv[1..])
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ClipboardError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ClipboardError::Failed {
                program: program.clone(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::Disabled);
        }
        let argv = self.write.as_deref().ok_or(ClipboardError::Unavailable)?;
        let program = &argv[0];

        let mut child = Command::new(program)
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|source| ClipboardError::Spawn {
                    program: program.clone(),
                    source,
                })?;
        }

        let output = child
            .wait_with_output()
            .map_err(|source| ClipboardError::Spawn {
                program: program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed {
                program: program.clone(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// An empty configured command counts as not configured.
fn non_empty(command: &Option<Vec<String>>) -> Option<Vec<String>> {
    command.clone().filter(|argv| !argv.is_empty())
}

fn detect(candidates: &[&[&str]]) -> Option<Vec<String>> {
    candidates
        .iter()
        .find(|argv| on_path(argv[0]))
        .map(|argv| argv.iter().map(|s| s.to_string()).collect())
}

fn on_path(program: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| is_executable(&dir, program))
}

fn is_executable(dir: &Path, program: &str) -> bool {
    dir.join(program).is_file() || dir.join(format!("{program}.exe")).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSource {
        permission: ClipboardPermission,
        text: Result<&'static str, &'static str>,
    }

    impl ClipboardSource for FakeSource {
        fn permission(&self) -> ClipboardPermission {
            self.permission
        }

        fn read_text(&self) -> Result<String, ClipboardError> {
            self.text
                .map(str::to_string)
                .map_err(|m| ClipboardError::Failed {
                    program: "fake".into(),
                    message: m.into(),
                })
        }
    }

    #[test]
    fn granted_permission_reads_text() {
        let src = FakeSource {
            permission: ClipboardPermission::Granted,
            text: Ok("let a = 1"),
        };
        assert_eq!(paste_from(&src), PasteOutcome::Pasted("let a = 1".into()));
        assert_eq!(paste_from(&src).message(), None);
    }

    #[test]
    fn prompt_and_denied_map_to_fixed_messages() {
        let prompt = FakeSource {
            permission: ClipboardPermission::Prompt,
            text: Ok("unused"),
        };
        let denied = FakeSource {
            permission: ClipboardPermission::Denied,
            text: Ok("unused"),
        };
        assert_eq!(
            paste_from(&prompt).message().as_deref(),
            Some(PERMISSION_REQUIRED)
        );
        assert_eq!(
            paste_from(&denied).message().as_deref(),
            Some(PERMISSION_DENIED)
        );
    }

    #[test]
    fn read_failure_is_prefixed() {
        let src = FakeSource {
            permission: ClipboardPermission::Granted,
            text: Err("boom"),
        };
        let msg = paste_from(&src).message().unwrap();
        assert_eq!(msg, "Failed to access clipboard: fake failed: boom");
    }

    #[test]
    fn command_clipboard_permission_states() {
        let disabled = CommandClipboard::new(false, Some(vec!["pbpaste".into()]), None);
        assert_eq!(disabled.permission(), ClipboardPermission::Denied);

        let missing = CommandClipboard::new(true, None, None);
        assert_eq!(missing.permission(), ClipboardPermission::Prompt);

        let empty = CommandClipboard::new(true, Some(Vec::new()), None);
        assert_eq!(empty.permission(), ClipboardPermission::Prompt);

        let ready = CommandClipboard::new(true, Some(vec!["pbpaste".into()]), None);
        assert_eq!(ready.permission(), ClipboardPermission::Granted);
    }

    #[test]
    fn empty_configured_command_falls_back_to_detection() {
        let settings = ClipboardSettings {
            enabled: true,
            read_command: Some(Vec::new()),
            write_command: Some(Vec::new()),
        };
        let clip = CommandClipboard::from_settings(&settings);
        assert_eq!(clip.read, detect(READ_CANDIDATES));
        assert_eq!(clip.write, detect(WRITE_CANDIDATES));

        let configured = ClipboardSettings {
            read_command: Some(vec!["my-paste".into()]),
            ..settings
        };
        let clip = CommandClipboard::from_settings(&configured);
        assert_eq!(clip.read, Some(vec!["my-paste".to_string()]));
        assert_eq!(clip.permission(), ClipboardPermission::Granted);
    }

    #[test]
    fn copy_without_helper_fails_with_message() {
        let clip = CommandClipboard::new(true, None, None);
        let outcome = copy_to(&clip, "x");
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.message(),
            "Failed to copy code: no clipboard helper is available"
        );
        assert_eq!(CopyOutcome::Copied.message(), COPIED);
    }
}
