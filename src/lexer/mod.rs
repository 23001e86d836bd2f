// Author: Dustin Pilgrim
// License: MIT

mod comments;
mod scanner;
mod tokenizer;

pub use comments::strip_comments;

/// Character cursor over the input with line/column tracking.
///
/// The cursor is cheap to snapshot with [`Lexer::mark`], which is how the
/// parser backtracks between alternative value forms.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

/// A saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
        self.column = mark.column;
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        scanner::peek_char(self)
    }

    pub fn bump(&mut self) -> Option<char> {
        scanner::bump(self)
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `n` bytes that are known to be ASCII and on one line.
    pub fn advance(&mut self, n: usize) {
        let end = (self.pos + n).min(self.input.len());
        while self.pos < end {
            self.bump();
        }
    }

    /// Spaces and tabs.
    pub fn skip_whitespace(&mut self) {
        scanner::skip_whitespace(self)
    }

    /// Spaces, tabs and a trailing comment, stopping before the end of line.
    pub fn skip_line_space(&mut self) {
        scanner::skip_line_space(self)
    }

    /// Spaces, tabs, end-of-line markers and comments.
    pub fn skip_token_space(&mut self) {
        scanner::skip_token_space(self)
    }

    /// Consume a single `\r` or `\n`.
    pub fn eat_eol(&mut self) -> bool {
        scanner::eat_eol(self)
    }

    pub fn scan_integral(&mut self) -> Option<&'a str> {
        tokenizer::scan_integral(self)
    }

    pub fn scan_string_body(&mut self) -> Result<Option<&'a str>, crate::TomlError> {
        tokenizer::scan_string_body(self)
    }

    pub fn scan_key(&mut self) -> Option<&'a str> {
        tokenizer::scan_key(self)
    }

    pub fn scan_key_group_segment(&mut self) -> Option<&'a str> {
        tokenizer::scan_key_group_segment(self)
    }
}

pub(crate) fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub(crate) fn is_eol(c: char) -> bool {
    c == '\r' || c == '\n'
}
