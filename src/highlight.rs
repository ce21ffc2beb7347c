use crate::language::Language;

/// Formatted code annotated for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// `language-<tag>`, the hook a syntax colorer keys on.
    pub class_name: String,
    pub body: String,
}

/// Turns formatted code into something displayable. Never fails.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: Language) -> Rendering;
}

/// Passes code through untouched; the class is still recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, language: Language) -> Rendering {
        Rendering {
            class_name: language.class_name(),
            body: code.to_string(),
        }
    }
}

/// Wraps escaped code in `<pre><code class="language-…">` for a
/// client-side highlighter to color.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupHighlighter;

impl Highlighter for MarkupHighlighter {
    fn highlight(&self, code: &str, language: Language) -> Rendering {
        let class_name = language.class_name();
        let body = format!(
            "<pre><code class=\"{class_name}\">{}</code></pre>",
            escape_html(code)
        );
        Rendering { class_name, body }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keeps_body_and_sets_class() {
        let r = PlainHighlighter.highlight("a();\n", Language::JavaScript);
        assert_eq!(r.class_name, "language-javascript");
        assert_eq!(r.body, "a();\n");
    }

    #[test]
    fn markup_escapes_html_sensitive_characters() {
        let r = MarkupHighlighter.highlight("<p class=\"x\">a & 'b'</p>", Language::Html);
        assert_eq!(
            r.body,
            "<pre><code class=\"language-html\">&lt;p class=&quot;x&quot;&gt;a &amp; &#39;b&#39;&lt;/p&gt;</code></pre>"
        );
    }
}
