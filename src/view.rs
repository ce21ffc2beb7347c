//! The form state and the actions that drive it.
//!
//! `FormView` is the only mutable state in the crate. Each action takes its
//! collaborators as arguments and overwrites the result area wholesale, so a
//! later action simply replaces whatever an earlier one displayed.

use std::path::{Path, PathBuf};

use crate::clipboard::{self, ClipboardSink, ClipboardSource, CopyOutcome, PasteOutcome};
use crate::comments::strip_comments_for;
use crate::error::{BeautifyError, UNSUPPORTED_FILE_TYPE};
use crate::formatter::{FormatOptions, Formatter};
use crate::highlight::Highlighter;
use crate::source::{self, InputSource};

/// What the result area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    pub text: String,
    /// Set only when `text` is highlighted code.
    pub class_name: Option<String>,
}

impl Display {
    fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class_name: None,
        }
    }

    /// True when the display holds formatted code rather than a message.
    pub fn is_code(&self) -> bool {
        self.class_name.is_some()
    }
}

/// Form fields: file picker, text area, language selector, toggle, result.
#[derive(Debug, Clone)]
pub struct FormView {
    pub code_input: String,
    pub selected_file: Option<PathBuf>,
    pub language: String,
    pub remove_comments: bool,
    pub options: FormatOptions,
    result: Display,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            code_input: String::new(),
            selected_file: None,
            language: "javascript".to_string(),
            remove_comments: false,
            options: FormatOptions::default(),
            result: Display::default(),
        }
    }
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &Display {
        &self.result
    }

    /// Select a file: remember it and load its text into the input box.
    ///
    /// Loading ignores the extension. Formatting later rejects unsupported
    /// files.
    pub fn select_file(&mut self, path: &Path) -> Result<(), BeautifyError> {
        self.code_input = source::read_lossy(path)?;
        self.selected_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Paste clipboard text into the input box.
    ///
    /// Returns the outcome; only `Pasted` changes the input.
    pub fn paste(&mut self, clipboard: &dyn ClipboardSource) -> PasteOutcome {
        let outcome = clipboard::paste_from(clipboard);
        if let PasteOutcome::Pasted(text) = &outcome {
            self.code_input = text.clone();
        }
        outcome
    }

    /// The source formatting will read: the selected file if any, else the text area.
    pub fn input_source(&self) -> InputSource {
        match &self.selected_file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Text {
                code: self.code_input.clone(),
                language: self.language.clone(),
            },
        }
    }

    /// Resolve the input, optionally strip comments, format and highlight.
    ///
    /// Every failure lands in the result area; nothing is returned as an error.
    pub fn beautify(
        &mut self,
        formatter: &dyn Formatter,
        highlighter: &dyn Highlighter,
    ) -> &Display {
        let resolved = match self.input_source().resolve() {
            Ok(text) => text,
            Err(
                BeautifyError::UnsupportedFileType { .. }
                | BeautifyError::UnsupportedLanguage { .. },
            ) => {
                log::debug!("rejecting unsupported input");
                self.result = Display::message(UNSUPPORTED_FILE_TYPE);
                return &self.result;
            }
            Err(err) => {
                self.result = Display::message(error_chain(&err));
                return &self.result;
            }
        };

        let language = resolved.language;
        let code = if self.remove_comments {
            strip_comments_for(&resolved.code, language)
        } else {
            resolved.code
        };

        self.result = match formatter.format(&code, language, &self.options) {
            Ok(formatted) => {
                let rendering = highlighter.highlight(&formatted, language);
                Display {
                    text: rendering.body,
                    class_name: Some(rendering.class_name),
                }
            }
            Err(err) => {
                log::debug!("formatter rejected input: {}", err.message);
                Display::message(err.to_string())
            }
        };
        &self.result
    }

    /// Copy whatever the result area shows.
    pub fn copy(&self, clipboard: &dyn ClipboardSink) -> CopyOutcome {
        clipboard::copy_to(clipboard, &self.result.text)
    }

    /// Empty the input box and the result area.
    pub fn clear(&mut self) {
        self.code_input.clear();
        self.result = Display::default();
    }

    /// The clear action is offered only while there is something to clear.
    pub fn clear_button_visible(&self) -> bool {
        !self.code_input.trim().is_empty() || !self.result.text.trim().is_empty()
    }
}

/// `outer: inner: ...`, the same shape `{:#}` gives for anyhow errors.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        cause = inner.source();
    }
    text
}
