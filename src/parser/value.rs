use chrono::{Datelike, NaiveDateTime, TimeZone, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use crate::ast::{ValueKind, DATETIME_FORMAT};

/// A value form: `Ok(None)` means "not this form, try the next one".
pub(super) type ValueParser = fn(&mut Parser<'_>) -> Result<Option<Value>, TomlError>;

/// Value forms in the order they are tried. Datetimes go first so that
/// `1979-05-27T07:32:00Z` is never read as the integer `1979`, and strings
/// before numbers so quoted digits stay text.
pub(super) static VALUE_PARSERS: [(ValueKind, ValueParser); 6] = [
    (ValueKind::DateTime, parse_datetime),
    (ValueKind::String, parse_string),
    (ValueKind::Float, parse_float),
    (ValueKind::Integer, parse_integer),
    (ValueKind::Boolean, parse_boolean),
    (ValueKind::Array, super::array::parse_array),
];

static DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z")
        .expect("datetime pattern is a valid regex")
});

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, TomlError> {
    for (kind, parse) in VALUE_PARSERS.iter() {
        let mark = parser.lexer().mark();
        if let Some(value) = parse(parser)? {
            debug_assert_eq!(value.kind(), *kind);
            return Ok(value);
        }
        parser.lexer().reset(mark);
    }

    let found = match parser.lexer().peek() {
        Some(c) => format!("'{}'", c.escape_default()),
        None => "end of input".to_string(),
    };
    Err(parser.syntax_error(
        format!("Expected a value, found {}", found),
        Some("Values are integers, floats, booleans, datetimes, quoted strings or arrays"),
        210,
    ))
}

fn parse_datetime(parser: &mut Parser) -> Result<Option<Value>, TomlError> {
    let (line, column) = (parser.line(), parser.column());
    let lexer = parser.lexer();

    let Some(found) = DATETIME.find(lexer.rest()) else {
        return Ok(None);
    };
    let literal = found.as_str();

    let invalid = |reason: String| TomlError::SyntaxError {
        message: format!("Invalid datetime '{}': {}", literal, reason),
        line,
        column,
        hint: Some("Datetimes are written as YYYY-MM-DDTHH:MM:SSZ".into()),
        code: Some(106),
    };

    let naive = NaiveDateTime::parse_from_str(literal, DATETIME_FORMAT).map_err(|e| invalid(e.to_string()))?;
    // chrono reads second 60 as a leap second
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(invalid("seconds must be below 60".into()));
    }
    if naive.year() < 1 {
        return Err(invalid("years start at 0001".into()));
    }

    lexer.advance(literal.len());
    Ok(Some(Value::DateTime(Utc.from_utc_datetime(&naive))))
}

fn parse_string(parser: &mut Parser) -> Result<Option<Value>, TomlError> {
    let (line, column) = (parser.line(), parser.column());
    let Some(raw) = parser.lexer().scan_string_body()? else {
        return Ok(None);
    };
    unescape(raw, line, column).map(|s| Some(Value::String(s)))
}

/// Resolve the escapes of a raw string body that started at `line:column`.
fn unescape(raw: &str, line: usize, column: usize) -> Result<String, TomlError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    // the body starts one column after the opening quote
    let mut offset = 1;

    while let Some(ch) = chars.next() {
        offset += 1;
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let escaped = match chars.next() {
            Some('0') => '\0',
            Some('t') => '\t',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('"') => '"',
            Some('\\') => '\\',
            other => {
                return Err(TomlError::InvalidEscape {
                    sequence: format!("\\{}", other.map(String::from).unwrap_or_default()),
                    line,
                    column: column + offset - 1,
                    hint: Some("Supported escapes are \\0 \\t \\n \\r \\\" and \\\\".into()),
                    code: Some(105),
                });
            }
        };
        offset += 1;
        out.push(escaped);
    }

    Ok(out)
}

fn parse_float(parser: &mut Parser) -> Result<Option<Value>, TomlError> {
    let (line, column) = (parser.line(), parser.column());
    let lexer = parser.lexer();
    let start = lexer.rest();

    if lexer.scan_integral().is_none() || !lexer.eat('.') {
        return Ok(None);
    }
    if !matches!(lexer.peek(), Some(c) if c.is_ascii_digit()) || lexer.scan_integral().is_none() {
        return Ok(None);
    }

    let literal = &start[..start.len() - lexer.rest().len()];
    match literal.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(Value::Float(n))),
        _ => Err(TomlError::OutOfRange {
            literal: literal.to_string(),
            line,
            column,
            hint: Some("Floats must fit in a 64-bit IEEE-754 double".into()),
            code: Some(102),
        }),
    }
}

fn parse_integer(parser: &mut Parser) -> Result<Option<Value>, TomlError> {
    let (line, column) = (parser.line(), parser.column());
    let Some(literal) = parser.lexer().scan_integral() else {
        return Ok(None);
    };

    literal
        .parse::<i64>()
        .map(|n| Some(Value::Integer(n)))
        .map_err(|_| TomlError::OutOfRange {
            literal: literal.to_string(),
            line,
            column,
            hint: Some(format!("Integers must lie between {} and {}", i64::MIN, i64::MAX)),
            code: Some(102),
        })
}

fn parse_boolean(parser: &mut Parser) -> Result<Option<Value>, TomlError> {
    let lexer = parser.lexer();
    for (word, value) in [("true", true), ("false", false)] {
        if lexer.rest().starts_with(word) {
            lexer.advance(word.len());
            return Ok(Some(Value::Boolean(value)));
        }
    }
    Ok(None)
}
