use super::*;
use crate::ast::{KeyValue, Section};

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, TomlError> {
    let mut document = Document::default();
    parser.lexer().skip_token_space();

    while !at_section_or_eof(parser) {
        document.root_values.push(parse_key_value(parser)?);
        end_statement(parser)?;
    }

    while !parser.lexer().is_eof() {
        document.sections.push(parse_section(parser)?);
    }

    Ok(document)
}

fn at_section_or_eof(parser: &mut Parser) -> bool {
    matches!(parser.lexer().peek(), None | Some('['))
}

/// A statement ends at the end of its line; blank and comment-only lines
/// that follow are swallowed as part of the separator.
fn end_statement(parser: &mut Parser) -> Result<(), TomlError> {
    parser.lexer().skip_line_space();
    if parser.lexer().is_eof() {
        return Ok(());
    }

    if !parser.lexer().eat_eol() {
        let rest: String = parser.lexer().rest().chars().take_while(|c| *c != '\n' && *c != '\r').collect();
        return Err(parser.syntax_error(
            format!("Unexpected content after statement: '{}'", rest.trim_end()),
            Some("Put each key/value or key group on its own line and start comments with '#'"),
            204,
        ));
    }

    parser.lexer().skip_token_space();
    Ok(())
}

fn parse_section(parser: &mut Parser) -> Result<Section, TomlError> {
    let line = parser.line();
    let path = parse_key_group(parser)?;
    end_statement(parser)?;

    let mut values = Vec::new();
    while !at_section_or_eof(parser) {
        values.push(parse_key_value(parser)?);
        end_statement(parser)?;
    }

    Ok(Section { path, values, line })
}

/// `[segment(.segment)*]`
pub(super) fn parse_key_group(parser: &mut Parser) -> Result<Vec<String>, TomlError> {
    parser.expect('[', Some("Key groups start with '['"))?;

    let mut path = Vec::new();
    loop {
        match parser.lexer().scan_key_group_segment() {
            Some(segment) => path.push(segment.to_string()),
            None => {
                return Err(parser.syntax_error(
                    "Empty key group segment",
                    Some("Key groups look like [servers.alpha]"),
                    206,
                ));
            }
        }

        if parser.lexer().eat('.') {
            continue;
        }
        parser.expect(']', Some("Key group names cannot contain whitespace"))?;
        break;
    }

    Ok(path)
}

fn parse_key_value(parser: &mut Parser) -> Result<KeyValue, TomlError> {
    let line = parser.line();
    let key = match parser.lexer().scan_key() {
        Some(key) => key.to_string(),
        None => {
            return Err(parser.syntax_error(
                "Expected a key",
                Some("Assignments look like key = value"),
                208,
            ));
        }
    };

    parser.lexer().skip_whitespace();
    parser.expect('=', Some("Keys cannot contain whitespace and must be followed by '='"))?;
    parser.lexer().skip_whitespace();

    let value = parser.parse_value()?;
    Ok(KeyValue { key, value, line })
}
