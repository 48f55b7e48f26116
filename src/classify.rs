// Priority-ordered token classification for a single source line.
// Unmatched text (whitespace, punctuation) is simply skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::token::{Category, Token};
use crate::vocab;

// Label definitions are anchored to the start of the line
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*([A-Za-z_][A-Za-z0-9_]*):").unwrap());

// Numeric literals first (decimal, #hex, $binary), then identifier-shaped
// words. Keywords and registers are separated out by table lookup.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[0-9A-Fa-f]+\b|\$[01]+\b|\b[0-9]+\b|[A-Za-z_][A-Za-z0-9_]*").unwrap()
});

// Classify the tokens of one line. The iterator yields matched spans in
// left-to-right order; a trailing comment is emitted as a single span.
pub fn tokenize(line: &str) -> Tokens<'_> {
    let comment = comment_start(line);
    let code_end = comment.unwrap_or(line.len());

    let mut pos = 0;
    let mut pending_label = None;
    if let Some(caps) = LABEL_RE.captures(&line[..code_end]) {
        let name = caps.get(1).unwrap();
        pending_label = Some(Token {
            start: name.start(),
            end: name.end(),
            category: Category::Label,
        });
        pos = caps.get(0).unwrap().end();
    }

    Tokens { line, pos, code_end, pending_label, comment }
}

// Byte range of a line-leading label: start of the name through the colon
pub(crate) fn label_match(line: &str) -> Option<(usize, usize)> {
    let code_end = comment_start(line).unwrap_or(line.len());
    LABEL_RE.captures(&line[..code_end]).map(|caps| {
        let name = caps.get(1).unwrap();
        (name.start(), caps.get(0).unwrap().end())
    })
}

pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
    code_end: usize,
    pending_label: Option<Token>,
    comment: Option<usize>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(label) = self.pending_label.take() {
            return Some(label);
        }

        if self.pos < self.code_end {
            if let Some(m) = WORD_RE.find(&self.line[self.pos..self.code_end]) {
                let token = Token {
                    start: self.pos + m.start(),
                    end: self.pos + m.end(),
                    category: classify_word(m.as_str()),
                };
                self.pos = token.end;
                return Some(token);
            }
            self.pos = self.code_end;
        }

        if let Some(start) = self.comment.take() {
            return Some(Token {
                start,
                end: self.line.len(),
                category: Category::Comment,
            });
        }

        None
    }
}

fn classify_word(word: &str) -> Category {
    let first = word.as_bytes()[0];
    if first == b'#' || first == b'$' || first.is_ascii_digit() {
        return Category::Number;
    }

    // Keyword tables take precedence over the identifier fallback
    if vocab::is_operation(word) {
        return Category::Operation;
    }
    if vocab::is_pseudo_op(word) {
        return Category::PseudoOp;
    }
    if vocab::is_register(word) {
        return Category::Register;
    }

    Category::Identifier
}

// Position of the first unescaped semicolon, if any
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b';' && (i == 0 || bytes[i - 1] != b'\\') {
            return Some(i);
        }
    }
    None
}
