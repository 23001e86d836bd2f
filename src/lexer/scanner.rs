use super::*;

/// Advance the cursor by one character and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = peek_char(lexer);
    if let Some(c) = curr {
        lexer.pos += c.len_utf8();
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += 1;
        }
    }
    curr
}

/// Peek at the current character without consuming it
pub(super) fn peek_char(lexer: &Lexer) -> Option<char> {
    lexer.input[lexer.pos..].chars().next()
}

pub(super) fn skip_whitespace(lexer: &mut Lexer) {
    while let Some(c) = peek_char(lexer) {
        if is_whitespace(c) {
            bump(lexer);
        } else {
            break;
        }
    }
}

/// Skip a `#` comment up to, but not including, the end of line
fn skip_comment(lexer: &mut Lexer) -> bool {
    if peek_char(lexer) != Some('#') {
        return false;
    }
    while let Some(c) = peek_char(lexer) {
        if is_eol(c) {
            break;
        }
        bump(lexer);
    }
    true
}

pub(super) fn skip_line_space(lexer: &mut Lexer) {
    skip_whitespace(lexer);
    skip_comment(lexer);
}

pub(super) fn skip_token_space(lexer: &mut Lexer) {
    loop {
        skip_whitespace(lexer);
        if skip_comment(lexer) {
            continue;
        }
        if !eat_eol(lexer) {
            break;
        }
    }
}

pub(super) fn eat_eol(lexer: &mut Lexer) -> bool {
    match peek_char(lexer) {
        Some(c) if is_eol(c) => {
            bump(lexer);
            true
        }
        _ => false,
    }
}
