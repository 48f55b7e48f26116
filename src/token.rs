// Categories for classified spans of a source line
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Label,
    Operation,
    PseudoOp,
    Number,
    Register,
    Identifier,
    Comment,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Label => "label",
            Category::Operation => "operation",
            Category::PseudoOp => "pseudo-op",
            Category::Number => "number",
            Category::Register => "register",
            Category::Identifier => "identifier",
            Category::Comment => "comment",
        };
        write!(f, "{name}")
    }
}

// A classified span of a line. Offsets are byte positions into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl Token {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}
