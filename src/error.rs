use std::io;
use std::path::PathBuf;

/// Message shown when a file extension or language tag is outside the
/// supported set.
pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type.";

/// Prefix placed in front of the formatter's own diagnostic.
pub const FORMAT_ERROR_LABEL: &str = "Error formatting the code: ";

/// Errors raised by the library layer. The binary wraps these in `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum BeautifyError {
    /// The file's extension is not one of js, jsx, html, css.
    #[error("{} ({})", UNSUPPORTED_FILE_TYPE, .path.display())]
    UnsupportedFileType { path: PathBuf },

    /// The language tag is not one of javascript, jsx, html, css.
    #[error("{} (language '{}')", UNSUPPORTED_FILE_TYPE, .tag)]
    UnsupportedLanguage { tag: String },

    /// Reading the input file failed.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure reported by the external formatter.
///
/// `message` is the formatter's diagnostic, surfaced verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}{}", FORMAT_ERROR_LABEL, .message)]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_display_carries_the_fixed_label() {
        let err = FormatError::new("Unexpected token (1:5)");
        assert_eq!(
            err.to_string(),
            "Error formatting the code: Unexpected token (1:5)"
        );
        assert!(err.to_string().starts_with(FORMAT_ERROR_LABEL));
    }

    #[test]
    fn unsupported_file_type_mentions_the_fixed_message() {
        let err = BeautifyError::UnsupportedFileType {
            path: PathBuf::from("notes.txt"),
        };
        assert!(err.to_string().starts_with(UNSUPPORTED_FILE_TYPE));
    }
}
