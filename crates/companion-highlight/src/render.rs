//! HTML rendering for tokenized lines.

use crate::token::{Token, TokenKind, tokenize_line};

impl TokenKind {
    /// Inline color for the token, `None` for plain text.
    pub fn color(self) -> Option<&'static str> {
        match self {
            TokenKind::Plain => None,
            TokenKind::Comment => Some("#6a9955"),
            TokenKind::String => Some("#ce9178"),
            TokenKind::Keyword => Some("#c586c0"),
            TokenKind::Type => Some("#4ec9b0"),
            TokenKind::Number => Some("#b5cea8"),
        }
    }
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped(&mut out, s);
    out
}

fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
}

/// Render tokens as an HTML fragment.
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.kind.color() {
            Some(color) => {
                out.push_str("<span style=\"color: ");
                out.push_str(color);
                out.push_str("\">");
                push_escaped(&mut out, token.text);
                out.push_str("</span>");
            }
            None => push_escaped(&mut out, token.text),
        }
    }
    out
}

/// Highlight a single line.
pub fn highlight_line(line: &str) -> String {
    render_tokens(&tokenize_line(line))
}
