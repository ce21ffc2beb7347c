//! Delegation to the external pretty-printer.
//!
//! The crate never formats code itself. [`Formatter`] is the seam; the
//! production implementation shells out to `prettier`.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::error::FormatError;
use crate::language::Language;

/// Style options forwarded to the formatter. The defaults are fixed:
/// two-space indentation, semicolons, single quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub tab_width: u8,
    pub semi: bool,
    pub single_quote: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_width: 2,
            semi: true,
            single_quote: true,
        }
    }
}

/// An external pretty-printer.
pub trait Formatter {
    /// Format `code` as `language`. On failure the error carries the
    /// formatter's own diagnostic.
    fn format(
        &self,
        code: &str,
        language: Language,
        options: &FormatOptions,
    ) -> Result<String, FormatError>;
}

/// Runs a `prettier` executable with code on stdin.
#[derive(Debug, Clone)]
pub struct PrettierCommand {
    program: String,
}

impl Default for PrettierCommand {
    fn default() -> Self {
        Self::new("prettier")
    }
}

impl PrettierCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one invocation, excluding the program itself.
    pub fn args(language: Language, options: &FormatOptions) -> Vec<String> {
        let mut args = vec![
            "--parser".to_string(),
            language.parser().to_string(),
            "--tab-width".to_string(),
            options.tab_width.to_string(),
        ];
        if !options.semi {
            args.push("--no-semi".to_string());
        }
        if options.single_quote {
            args.push("--single-quote".to_string());
        }
        args
    }
}

impl Formatter for PrettierCommand {
    fn format(
        &self,
        code: &str,
        language: Language,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let args = Self::args(language, options);
        log::debug!(
            "running {} {} ({} plugin)",
            self.program,
            args.join(" "),
            language.plugin()
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| FormatError::new(format!("could not run {}: {e}", self.program)))?;

        // Feed stdin on its own thread while this one drains stdout and
        // stderr; a formatter that streams output would otherwise block once
        // a pipe buffer fills.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(code.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output
            .map_err(|e| FormatError::new(format!("{} did not finish: {e}", self.program)))?;

        if output.status.success() {
            // A short write means the formatter saw truncated input.
            written.map_err(|e| {
                FormatError::new(format!("failed writing input to {}: {e}", self.program))
            })?;
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("{} exited with {}", self.program, output.status),
            msg => msg.to_string(),
        };
        Err(FormatError::new(message))
    }
}
