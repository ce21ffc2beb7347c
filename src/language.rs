//! The supported language set and everything keyed on it.
//!
//! One table drives comment stripping, formatter parser selection, file
//! extension acceptance and the display class, so adding a language is a
//! single-row change.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::BeautifyError;

/// C-style `//` line comments and `/* ... */` block comments.
/// Line comments stop before the line terminator so it survives.
const C_STYLE_COMMENTS: &str = r"//[^\r\n]*|(?s:/\*.*?\*/)";
const BLOCK_COMMENTS: &str = r"(?s:/\*.*?\*/)";
const MARKUP_COMMENTS: &str = r"(?s:<!--.*?-->)";

static C_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| compile(C_STYLE_COMMENTS));
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| compile(BLOCK_COMMENTS));
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| compile(MARKUP_COMMENTS));

fn compile(pattern: &str) -> Regex {
    // The patterns are constants; a failure here is a programming error.
    Regex::new(pattern).expect("built-in comment pattern must compile")
}

/// A language tag accepted by the formatter pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Jsx,
    Html,
    Css,
}

/// Which comment pattern a language uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentStyle {
    CStyle,
    Block,
    Markup,
}

/// Row of the language table.
#[derive(Debug)]
struct Row {
    language: Language,
    tag: &'static str,
    extensions: &'static [&'static str],
    comments: CommentStyle,
    parser: &'static str,
    plugin: &'static str,
}

const TABLE: &[Row] = &[
    Row {
        language: Language::JavaScript,
        tag: "javascript",
        extensions: &["js"],
        comments: CommentStyle::CStyle,
        parser: "babel",
        plugin: "babel",
    },
    Row {
        language: Language::Jsx,
        tag: "jsx",
        extensions: &["jsx"],
        comments: CommentStyle::CStyle,
        parser: "babel",
        plugin: "babel",
    },
    Row {
        language: Language::Html,
        tag: "html",
        extensions: &["html"],
        comments: CommentStyle::Markup,
        parser: "html",
        plugin: "html",
    },
    Row {
        language: Language::Css,
        tag: "css",
        extensions: &["css"],
        comments: CommentStyle::Block,
        parser: "css",
        plugin: "postcss",
    },
];

impl Language {
    pub const ALL: [Language; 4] = [
        Language::JavaScript,
        Language::Jsx,
        Language::Html,
        Language::Css,
    ];

    fn row(self) -> &'static Row {
        TABLE
            .iter()
            .find(|row| row.language == self)
            .unwrap_or_else(|| unreachable!("{self:?} has no row in the language table"))
    }

    /// Exact lookup of a canonical tag (`javascript`, `jsx`, `html`, `css`).
    pub fn lookup(tag: &str) -> Option<Language> {
        TABLE.iter().find(|s| s.tag == tag).map(|s| s.language)
    }

    /// Lenient lookup for user input: trims, ignores case and accepts `js`.
    pub fn from_tag(tag: &str) -> Option<Language> {
        let norm = tag.trim().to_ascii_lowercase();
        if norm == "js" {
            return Some(Language::JavaScript);
        }
        Language::lookup(&norm)
    }

    /// Map a file extension (without the dot) to its language.
    ///
    /// Matching is exact: `APP.JS` is not a JavaScript file.
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.trim_start_matches('.');
        Language::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext))
    }

    pub fn tag(self) -> &'static str {
        self.row().tag
    }

    pub fn extensions(self) -> &'static [&'static str] {
        self.row().extensions
    }

    /// Parser name handed to prettier's `--parser`.
    pub fn parser(self) -> &'static str {
        self.row().parser
    }

    /// Prettier plugin providing the parser.
    pub fn plugin(self) -> &'static str {
        self.row().plugin
    }

    /// Class attached to highlighted output, e.g. `language-javascript`.
    pub fn class_name(self) -> String {
        format!("language-{}", self.tag())
    }

    pub(crate) fn comment_regex(self) -> &'static Regex {
        match self.row().comments {
            CommentStyle::CStyle => &*C_STYLE_RE,
            CommentStyle::Block => &*BLOCK_RE,
            CommentStyle::Markup => &*MARKUP_RE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = BeautifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| BeautifyError::UnsupportedLanguage {
            tag: s.to_string(),
        })
    }
}
