use crate::language::Language;

/// Strip comments for the language named by `tag`.
///
/// - `javascript` / `jsx`: `//` to end of line (the newline is kept) and
///   `/* ... */` blocks, matched lazily across lines.
/// - `html`: `<!-- ... -->` blocks, matched lazily across lines.
/// - `css`: `/* ... */` blocks, matched lazily across lines.
/// - Any other tag: the input is returned unchanged.
///
/// Matching is purely textual. Comment-like text inside string, template or
/// regex literals is stripped too.
pub fn strip_comments(src: &str, tag: &str) -> String {
    match Language::lookup(tag) {
        Some(lang) => strip_comments_for(src, lang),
        None => src.to_string(),
    }
}

/// Typed variant of [`strip_comments`].
pub fn strip_comments_for(src: &str, lang: Language) -> String {
    lang.comment_regex().replace_all(src, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn js_line_comment_keeps_newline() {
        let out = strip_comments("a(); // hi\nb();", "javascript");
        assert_eq!(out, "a(); \nb();");

        let out = strip_comments("a(); // hi\nb();", "jsx");
        assert_eq!(out, "a(); \nb();");
    }

    #[test]
    fn js_block_comment_spans_lines_and_stops_at_first_close() {
        let src = "x = 1; /* one\ntwo */ y = 2; /* three */";
        assert_eq!(strip_comments(src, "javascript"), "x = 1;  y = 2; ");
    }

    #[test]
    fn js_line_comment_preserves_crlf() {
        let src = "a(); // hi\r\nb();";
        assert_eq!(strip_comments(src, "javascript"), "a(); \r\nb();");
    }

    #[test]
    fn jsx_line_comment_preserves_crlf() {
        let src = "<A />; // hi\r\n<B />; // there\r\n";
        assert_eq!(strip_comments(src, "jsx"), "<A />; \r\n<B />; \r\n");
    }

    #[test]
    fn css_block_comment_spans_newline() {
        assert_eq!(strip_comments("a{} /* x\ny */ b{}", "css"), "a{}  b{}");
    }

    #[test]
    fn css_leaves_double_slash_alone() {
        let src = "a { background: url(http://x/y.png); }";
        assert_eq!(strip_comments(src, "css"), src);
    }

    #[test]
    fn html_comment_removed() {
        assert_eq!(strip_comments("<p>x</p><!-- c -->", "html"), "<p>x</p>");
        assert_eq!(
            strip_comments("<a><!-- one\ntwo --></a><!-- --><b>", "html"),
            "<a></a><b>"
        );
    }

    #[test]
    fn jsx_line_comment_inside_string_is_stripped_too() {
        let src = "const u = 'http://example.com';";
        assert_eq!(strip_comments(src, "jsx"), "const u = 'http:");
    }

    #[test]
    fn unterminated_block_comment_is_left_in_place() {
        let src = "a(); /* never closed";
        assert_eq!(strip_comments(src, "javascript"), src);
    }

    #[test]
    fn unknown_tag_is_identity() {
        let src = "# py // not stripped /* nor this */ <!-- x -->";
        assert_eq!(strip_comments(src, "python"), src);
        assert_eq!(strip_comments(src, ""), src);
        assert_eq!(strip_comments(src, "JavaScript"), src);
    }

    proptest! {
        #[test]
        fn text_without_markers_is_unchanged(src in "[a-zA-Z0-9 ;(){}=.'\"\n\t]*") {
            for tag in ["javascript", "jsx", "html", "css", "python"] {
                prop_assert_eq!(strip_comments(&src, tag), src.clone());
            }
        }

        #[test]
        fn stripping_is_idempotent_for_plain_code(
            parts in proptest::collection::vec(("[a-z ;(){}\n]{0,12}", "[a-z \n]{0,12}"), 0..8)
        ) {
            let mut js = String::new();
            let mut html = String::new();
            for (code, comment) in &parts {
                js.push_str(code);
                js.push_str("/*");
                js.push_str(comment);
                js.push_str("*/");
                js.push_str(code);
                js.push_str("//");
                js.push_str(&comment.replace('\n', " "));
                js.push('\n');

                html.push_str(code);
                html.push_str("<!--");
                html.push_str(comment);
                html.push_str("-->");
            }

            for tag in ["javascript", "jsx", "css"] {
                let once = strip_comments(&js, tag);
                prop_assert_eq!(strip_comments(&once, tag), once.clone());
            }
            let once = strip_comments(&html, "html");
            prop_assert_eq!(strip_comments(&once, "html"), once.clone());
        }
    }
}
