use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BeautifyError;
use crate::language::Language;

/// Where the code to format comes from.
///
/// A selected file always wins over the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Text { code: String, language: String },
}

/// Source text resolved together with its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub code: String,
    pub language: Language,
}

impl InputSource {
    /// Resolve to text and language, failing on unsupported extensions or tags.
    pub fn resolve(&self) -> Result<SourceText, BeautifyError> {
        match self {
            InputSource::File(path) => read_file(path),
            InputSource::Text { code, language } => {
                let language = language.parse::<Language>()?;
                Ok(SourceText {
                    code: code.clone(),
                    language,
                })
            }
        }
    }
}

/// Language implied by a path's extension, if it is a supported one.
pub fn language_for_path(path: &Path) -> Option<Language> {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(Language::from_extension)
}

/// Read a supported source file. The extension is checked before any I/O.
pub fn read_file(path: &Path) -> Result<SourceText, BeautifyError> {
    let language = language_for_path(path).ok_or_else(|| BeautifyError::UnsupportedFileType {
        path: path.to_path_buf(),
    })?;

    let code = read_lossy(path)?;
    log::debug!("read {} bytes of {language} from {}", code.len(), path.display());

    Ok(SourceText { code, language })
}

/// Read any file as text, regardless of extension.
///
/// Selecting a file loads it into the input box even when the extension is
/// not one the formatter accepts; the check happens when formatting.
pub fn read_lossy(path: &Path) -> Result<String, BeautifyError> {
    let bytes = fs::read(path).map_err(|source| BeautifyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
