use super::*;
use crate::ast::ValueKind;

/// `[ value, value, ... ]` with one trailing comma allowed.
///
/// The first element fixes the element kind; newlines and comments may sit
/// between any two tokens inside the brackets.
pub(super) fn parse_array(parser: &mut Parser) -> Result<Option<Value>, TomlError> {
    if !parser.lexer().eat('[') {
        return Ok(None);
    }

    parser.enter_nesting()?;
    let items = parse_elements(parser);
    parser.leave_nesting();
    items.map(|items| Some(Value::Array(items)))
}

fn parse_elements(parser: &mut Parser) -> Result<Vec<Value>, TomlError> {
    let mut items = Vec::new();
    let mut element_kind: Option<ValueKind> = None;

    parser.lexer().skip_token_space();
    if parser.lexer().eat(']') {
        return Ok(items);
    }

    loop {
        let (line, column) = (parser.line(), parser.column());
        let item = value::parse_value(parser)?;

        match element_kind {
            None => element_kind = Some(item.kind()),
            Some(expected) if expected != item.kind() => {
                return Err(TomlError::MixedArray {
                    expected: expected.to_string(),
                    found: item.kind().to_string(),
                    line,
                    column,
                    hint: Some("All elements of an array must have the same type".into()),
                    code: Some(220),
                });
            }
            Some(_) => {}
        }
        items.push(item);

        parser.lexer().skip_token_space();
        if parser.lexer().eat(',') {
            parser.lexer().skip_token_space();
            if parser.lexer().eat(']') {
                break;
            }
            continue;
        }

        parser.expect(']', Some("Separate array elements with ',' and close the array with ']'"))?;
        break;
    }

    Ok(items)
}
