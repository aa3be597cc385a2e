//! Companion Highlight
//!
//! A small, dependency-free highlighter for the TypeScript snippets shown in
//! Architect Companion code blocks.
//!
//! Source is processed line by line. Each line is tokenized in a single pass
//! into comments, strings, keywords, built-in types, numbers and plain text,
//! and only then rendered: every token is HTML-escaped before it is wrapped
//! in a colored `<span>`, so generated markup is never scanned again and
//! source text can never turn into live markup.
//!
//! # Example
//!
//! ```
//! let html = companion_highlight::highlight("const x = 5");
//! assert!(html.starts_with("<span style=\"color: #c586c0\">const</span>"));
//! ```

pub mod render;
pub mod token;

pub use render::{highlight_line, html_escape, render_tokens};
pub use token::{Token, TokenKind, tokenize_line};

/// Highlight a block of source code into an HTML fragment.
///
/// Lines are re-joined with `\n`; wrap the result in `<pre><code>` to
/// display it.
pub fn highlight(code: &str) -> String {
    code.split('\n')
        .map(highlight_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORD: &str = "<span style=\"color: #c586c0\">";
    const COMMENT: &str = "<span style=\"color: #6a9955\">";
    const NUMBER: &str = "<span style=\"color: #b5cea8\">";

    #[test]
    fn test_comment_line_is_escaped() {
        let html = highlight("// hello <script>");
        assert_eq!(html, format!("{COMMENT}// hello &lt;script&gt;</span>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_const_declaration() {
        let html = highlight("const x = 5");
        assert_eq!(html, format!("{KEYWORD}const</span> x = {NUMBER}5</span>"));
    }

    #[test]
    fn test_single_keyword_single_span() {
        let html = highlight("return");
        assert_eq!(html, format!("{KEYWORD}return</span>"));
        assert_eq!(html.matches("<span").count(), 1);
    }

    #[test]
    fn test_lines_are_preserved() {
        let code = "let a = 1;\n\n  // two\nreturn a;";
        let html = highlight(code);
        assert_eq!(html.lines().count(), 4);
        assert_eq!(html.split('\n').nth(1), Some(""));
        assert!(html.split('\n').nth(2).is_some_and(|l| l.starts_with(COMMENT)));
    }

    #[test]
    fn test_regex_literal_keeps_following_code() {
        let html = highlight(r"const re = /\/\//; const n = 1");
        assert_eq!(
            html,
            format!(r"{KEYWORD}const</span> re = /\/\//; {KEYWORD}const</span> n = {NUMBER}1</span>")
        );
        assert!(!html.contains(COMMENT));
    }

    #[test]
    fn test_injection_attempt_in_code() {
        let html = highlight("el.innerHTML = \"<img src=x onerror=alert(1)>\";");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_deterministic() {
        let code = "export class A { private n: number = 3; }";
        assert_eq!(highlight(code), highlight(code));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(highlight(""), "");
    }
}
