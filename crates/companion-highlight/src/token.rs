//! Line tokenizer.
//!
//! Each line is scanned once, left to right, into a flat list of classified
//! slices. Earlier rules win: a whole-line comment beats everything, then
//! template literals, quoted strings, words and numbers. A `//` after code
//! is ordinary text.

use std::ops::Range;

/// Reserved words colored as keywords.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "as",
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "constructor",
    "continue",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "from",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "of",
    "private",
    "protected",
    "public",
    "readonly",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "type",
    "typeof",
    "undefined",
    "var",
    "while",
    "yield",
];

/// Built-in type names colored separately from keywords.
pub const TYPES: &[&str] = &[
    "any",
    "Array",
    "boolean",
    "EventEmitter",
    "Map",
    "never",
    "number",
    "object",
    "Observable",
    "Partial",
    "Promise",
    "Readonly",
    "Record",
    "Set",
    "Signal",
    "string",
    "unknown",
    "void",
];

/// Classification of a slice of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plain,
    Comment,
    String,
    Keyword,
    Type,
    Number,
}

/// A classified slice of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }
}

/// Whether the trimmed line opens with a line or block comment marker.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn classify_word(word: &str) -> TokenKind {
    if KEYWORDS.contains(&word) {
        TokenKind::Keyword
    } else if TYPES.contains(&word) {
        TokenKind::Type
    } else {
        TokenKind::Plain
    }
}

/// End (exclusive) of a delimited literal opened at `start`.
///
/// Backslash escapes are skipped. An unterminated literal runs to the end
/// of the line.
fn scan_delimited(bytes: &[u8], start: usize, delimiter: u8) -> usize {
    let mut j = start + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == delimiter => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

fn scan_while(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(bytes.len(), |offset| start + offset)
}

/// Accumulates classified ranges, merging neighbouring plain text.
#[derive(Default)]
struct Spans {
    spans: Vec<(Range<usize>, TokenKind)>,
}

impl Spans {
    fn push(&mut self, range: Range<usize>, kind: TokenKind) {
        if range.is_empty() {
            return;
        }
        if kind == TokenKind::Plain {
            if let Some((last, TokenKind::Plain)) = self.spans.last_mut() {
                if last.end == range.start {
                    last.end = range.end;
                    return;
                }
            }
        }
        self.spans.push((range, kind));
    }
}

/// Split one line (without its terminator) into tokens.
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    if line.is_empty() {
        return Vec::new();
    }

    if is_comment_line(line) {
        return vec![Token::new(line, TokenKind::Comment)];
    }

    let bytes = line.as_bytes();
    let len = bytes.len();
    let mut spans = Spans::default();
    let mut i = 0;

    while i < len {
        let b = bytes[i];
        let (end, kind) = match b {
            b'`' | b'\'' | b'"' => (scan_delimited(bytes, i, b).min(len), TokenKind::String),
            _ if is_ident_start(b) => {
                let end = scan_while(bytes, i, is_ident_byte);
                (end, classify_word(&line[i..end]))
            }
            _ if b.is_ascii_digit() => {
                let end = scan_while(bytes, i, |c| c.is_ascii_digit());
                let after_hash = i > 0 && bytes[i - 1] == b'#';
                let glued = bytes.get(end).is_some_and(|&c| is_ident_byte(c));
                let kind = if after_hash || glued {
                    TokenKind::Plain
                } else {
                    TokenKind::Number
                };
                (end, kind)
            }
            _ => {
                let width = line[i..].chars().next().map_or(1, char::len_utf8);
                (i + width, TokenKind::Plain)
            }
        };

        spans.push(i..end, kind);
        i = end;
    }

    spans
        .spans
        .into_iter()
        .map(|(range, kind)| Token::new(&line[range], kind))
        .collect()
}
