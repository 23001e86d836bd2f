use crate::lexer::Lexer;
use crate::TomlError;
use crate::ast::{Document, Value};

mod array;
mod document;
mod value;

/// Recursive-descent parser over comment-normalized TOML text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
}

/// Deepest array nesting accepted before parsing stops with an error.
pub const MAX_NESTING: usize = 128;

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            depth: 0,
        }
    }

    pub(crate) fn lexer(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    pub(crate) fn column(&self) -> usize {
        self.lexer.column()
    }

    pub(crate) fn syntax_error(&self, message: impl Into<String>, hint: Option<&str>, code: u32) -> TomlError {
        if self.lexer.is_eof() {
            return TomlError::UnexpectedEof {
                message: message.into(),
                line: self.line(),
                column: self.column(),
                hint: hint.map(Into::into),
                code: Some(201),
            };
        }
        TomlError::SyntaxError {
            message: message.into(),
            line: self.line(),
            column: self.column(),
            hint: hint.map(Into::into),
            code: Some(code),
        }
    }

    /// Step one array level deeper, failing past `MAX_NESTING`.
    pub(crate) fn enter_nesting(&mut self) -> Result<(), TomlError> {
        if self.depth >= MAX_NESTING {
            return Err(self.syntax_error(
                format!("Arrays nested deeper than {} levels", MAX_NESTING),
                Some("Flatten the array structure"),
                222,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn expect(&mut self, expected: char, hint: Option<&str>) -> Result<(), TomlError> {
        if self.lexer.eat(expected) {
            return Ok(());
        }
        let found = self.lexer.peek().map_or("end of input".to_string(), |c| format!("'{}'", c.escape_default()));
        Err(self.syntax_error(format!("Expected '{}', found {}", expected, found), hint, 202))
    }

    pub fn parse_document(&mut self) -> Result<Document, TomlError> {
        document::parse_document(self)
    }

    /// Parse a single value at the cursor using the fixed priority order.
    pub fn parse_value(&mut self) -> Result<Value, TomlError> {
        value::parse_value(self)
    }
}

#[cfg(test)]
mod tests;
