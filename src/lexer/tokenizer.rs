use super::*;
use crate::TomlError;

fn take_while<'a>(lexer: &mut Lexer<'a>, pred: impl Fn(char) -> bool) -> &'a str {
    let start = lexer.pos;
    while let Some(c) = lexer.peek() {
        if pred(c) {
            lexer.bump();
        } else {
            break;
        }
    }
    &lexer.input[start..lexer.pos]
}

/// Optional `-` followed by one or more decimal digits
pub(super) fn scan_integral<'a>(lexer: &mut Lexer<'a>) -> Option<&'a str> {
    let mark = lexer.mark();
    let start = lexer.pos;
    lexer.eat('-');

    let digits = take_while(lexer, |c| c.is_ascii_digit());
    if digits.is_empty() {
        lexer.reset(mark);
        return None;
    }

    Some(&lexer.input[start..lexer.pos])
}

/// Raw body of a double-quoted string, escapes left untouched.
///
/// Returns `Ok(None)` when the cursor is not on a quote.
pub(super) fn scan_string_body<'a>(lexer: &mut Lexer<'a>) -> Result<Option<&'a str>, TomlError> {
    if lexer.peek() != Some('"') {
        return Ok(None);
    }

    let (line, column) = (lexer.line, lexer.column);
    lexer.bump(); // opening quote
    let start = lexer.pos;

    loop {
        match lexer.peek() {
            Some('"') => {
                let body = &lexer.input[start..lexer.pos];
                lexer.bump(); // closing quote
                return Ok(Some(body));
            }
            Some('\\') => {
                lexer.bump();
                match lexer.peek() {
                    Some(c) if !is_eol(c) => {
                        lexer.bump();
                    }
                    _ => return Err(unclosed(line, column, "Trailing backslash in string")),
                }
            }
            Some(c) if !is_eol(c) => {
                lexer.bump();
            }
            _ => return Err(unclosed(line, column, "Strings must close on the line they start")),
        }
    }
}

fn unclosed(line: usize, column: usize, hint: &str) -> TomlError {
    TomlError::UnclosedString {
        line,
        column,
        hint: Some(hint.into()),
        code: Some(103),
    }
}

/// Maximal run of characters other than whitespace, end of line and `=`
pub(super) fn scan_key<'a>(lexer: &mut Lexer<'a>) -> Option<&'a str> {
    let key = take_while(lexer, |c| !is_whitespace(c) && !is_eol(c) && c != '=');
    (!key.is_empty()).then_some(key)
}

/// One segment of `[a.b.c]`
pub(super) fn scan_key_group_segment<'a>(lexer: &mut Lexer<'a>) -> Option<&'a str> {
    let segment = take_while(lexer, |c| {
        !is_whitespace(c) && !is_eol(c) && !matches!(c, '[' | ']' | '.')
    });
    (!segment.is_empty()).then_some(segment)
}
