#[cfg(test)]
use super::*;
#[cfg(test)]
use chrono::{TimeZone, Utc};

fn value_of(input: &str) -> Result<Value, TomlError> {
    Parser::new(input).parse_value()
}

#[test]
fn test_parser_basic_document() {
    let input = r#"
title = "TOML Example"

[owner]
name = "Tom Preston-Werner"
dob = 1979-05-27T07:32:00Z

[servers.alpha]
ip = "10.0.0.1"
"#;

    let doc = Parser::new(input).parse_document().expect("Failed to parse document");

    assert_eq!(doc.root_values.len(), 1);
    assert_eq!(doc.root_values[0].key, "title");
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].path, vec!["owner"]);
    assert_eq!(doc.sections[0].values.len(), 2);
    assert_eq!(doc.sections[1].path, vec!["servers", "alpha"]);
    assert_eq!(doc.sections[1].line, 8);
}

#[test]
fn test_empty_document() {
    let doc = Parser::new("").parse_document().unwrap();
    assert!(doc.root_values.is_empty());
    assert!(doc.sections.is_empty());

    let doc = Parser::new("\n  \n# only a comment\n").parse_document().unwrap();
    assert_eq!(doc, Document::default());
}

#[test]
fn test_key_group_without_values() {
    let doc = Parser::new("[foo]\n[bar]").parse_document().unwrap();
    assert_eq!(doc.sections.len(), 2);
    assert!(doc.sections.iter().all(|s| s.values.is_empty()));
}

#[test]
fn test_scalar_values() {
    assert_eq!(value_of("1"), Ok(Value::Integer(1)));
    assert_eq!(value_of("-1"), Ok(Value::Integer(-1)));
    assert_eq!(value_of("1.23"), Ok(Value::Float(1.23)));
    assert_eq!(value_of("-1.23"), Ok(Value::Float(-1.23)));
    assert_eq!(value_of("true"), Ok(Value::Boolean(true)));
    assert_eq!(value_of("false"), Ok(Value::Boolean(false)));
    assert_eq!(value_of(r#""bar""#), Ok(Value::String("bar".into())));
    assert_eq!(
        value_of("2013-02-24T01:13:00Z"),
        Ok(Value::DateTime(Utc.with_ymd_and_hms(2013, 2, 24, 1, 13, 0).unwrap()))
    );
}

#[test]
fn test_quoted_digits_stay_strings() {
    assert_eq!(value_of(r#""8001""#), Ok(Value::String("8001".into())));
}

#[test]
fn test_integer_bounds() {
    assert_eq!(value_of("9223372036854775807"), Ok(Value::Integer(i64::MAX)));
    assert_eq!(value_of("-9223372036854775808"), Ok(Value::Integer(i64::MIN)));

    let err = value_of("9223372036854775808").unwrap_err();
    assert!(matches!(err, TomlError::OutOfRange { ref literal, .. } if literal == "9223372036854775808"));
}

#[test]
fn test_float_forms_rejected() {
    // no leading dot, no exponent
    assert!(value_of(".5").is_err());
    assert_eq!(value_of("1e5"), Ok(Value::Integer(1)));
    // "1." is an integer followed by a stray dot
    assert_eq!(value_of("1."), Ok(Value::Integer(1)));
}

#[test]
fn test_string_escapes() {
    let parsed = value_of(r#""Line1\nLine2\tFoo \"Bar\" \\ \0 \r""#).unwrap();
    assert_eq!(parsed, Value::String("Line1\nLine2\tFoo \"Bar\" \\ \0 \r".into()));
}

#[test]
fn test_invalid_escape() {
    let err = value_of(r#""bad \q escape""#).unwrap_err();
    match err {
        TomlError::InvalidEscape { sequence, line, column, .. } => {
            assert_eq!(sequence, "\\q");
            assert_eq!(line, 1);
            assert_eq!(column, 6);
        }
        other => panic!("Expected InvalidEscape, got {:?}", other),
    }
}

#[test]
fn test_invalid_datetime() {
    let err = value_of("2013-13-24T01:13:00Z").unwrap_err();
    assert!(matches!(err, TomlError::SyntaxError { code: Some(106), .. }));
}

#[test]
fn test_datetime_leap_second_and_year_zero() {
    let err = value_of("2013-02-24T01:13:60Z").unwrap_err();
    assert!(matches!(err, TomlError::SyntaxError { code: Some(106), .. }));

    let err = value_of("0000-01-01T00:00:00Z").unwrap_err();
    assert!(matches!(err, TomlError::SyntaxError { code: Some(106), .. }));

    assert_eq!(
        value_of("0001-01-01T00:00:59Z"),
        Ok(Value::DateTime(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 59).unwrap()))
    );
}

#[test]
fn test_float_out_of_range() {
    let literal = format!("1{}.0", "0".repeat(400));
    let err = value_of(&literal).unwrap_err();
    assert!(matches!(err, TomlError::OutOfRange { code: Some(102), .. }));
}

#[test]
fn test_arrays() {
    assert_eq!(
        value_of("[1, 2, 3, ]"),
        Ok(Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]))
    );
    assert_eq!(value_of("[]"), Ok(Value::Array(vec![])));
    assert_eq!(
        value_of(r#"[ "] ", " # "]"#),
        Ok(Value::Array(vec![Value::String("] ".into()), Value::String(" # ".into())]))
    );
    assert_eq!(
        value_of("[2013-02-24T01:13:00Z, 2013-01-30T22:30:15Z]").map(|v| v.as_array().map(Vec::len)),
        Ok(Some(2))
    );
}

#[test]
fn test_nested_arrays_may_differ_inside() {
    let parsed = value_of(r#"[ [1, 2], ["a", "b"], [] ]"#).unwrap();
    let outer = parsed.as_array().unwrap();
    assert_eq!(outer.len(), 3);
    assert_eq!(outer[1], Value::Array(vec![Value::String("a".into()), Value::String("b".into())]));
}

#[test]
fn test_multiline_array_with_comments() {
    let input = "[\n  \"]\",\n  # ] Oh yes I did\n  ]";
    assert_eq!(value_of(input), Ok(Value::Array(vec![Value::String("]".into())])));
}

#[test]
fn test_mixed_array_fails() {
    let err = value_of("[1, 1.23]").unwrap_err();
    match err {
        TomlError::MixedArray { expected, found, column, .. } => {
            assert_eq!(expected, "integer");
            assert_eq!(found, "float");
            assert_eq!(column, 5);
        }
        other => panic!("Expected MixedArray, got {:?}", other),
    }
}

#[test]
fn test_array_syntax_errors() {
    assert!(value_of("[,]").is_err());
    assert!(value_of("[1 2]").is_err());
    assert!(matches!(value_of("[1, 2"), Err(TomlError::UnexpectedEof { .. })));
}

#[test]
fn test_key_group_parsing() {
    let mut parser = Parser::new("[the.hard.bit#]");
    let path = document::parse_key_group(&mut parser).unwrap();
    assert_eq!(path, vec!["the", "hard", "bit#"]);

    assert!(document::parse_key_group(&mut Parser::new("[]")).is_err());
    assert!(document::parse_key_group(&mut Parser::new("[a..b]")).is_err());
    assert!(document::parse_key_group(&mut Parser::new("[a b]")).is_err());
}

#[test]
fn test_unusual_keys() {
    let doc = Parser::new("what? = \"really\"\nbit# = 1").parse_document().unwrap();
    assert_eq!(doc.root_values[0].key, "what?");
    assert_eq!(doc.root_values[1].key, "bit#");
}

#[test]
fn test_trailing_content_is_rejected() {
    let input = r#"[error]   if you didn't catch this, your parser is broken"#;
    let err = Parser::new(input).parse_document().unwrap_err();
    assert!(matches!(err, TomlError::SyntaxError { line: 1, code: Some(204), .. }));

    let err = Parser::new("number = 3.14  pi <--again forgot the #").parse_document().unwrap_err();
    assert!(matches!(err, TomlError::SyntaxError { code: Some(204), .. }));

    assert!(Parser::new("a = 1 b = 2").parse_document().is_err());
}

#[test]
fn test_missing_value() {
    let err = Parser::new("foo =\nbar = 1").parse_document().unwrap_err();
    assert!(matches!(err, TomlError::SyntaxError { code: Some(210), line: 1, .. }));

    let err = Parser::new("foo").parse_document().unwrap_err();
    assert!(matches!(err, TomlError::UnexpectedEof { .. }));
}

#[test]
fn test_original_error_fixture() {
    let input = r#"[error]   if you didn't catch this, your parser is broken
string = "Anything other than tabs, spaces and newline after a keygroup or key value pair has ended should produce an error unless it is a comment"   like this
array = [
            "This might most likely happen in multiline arrays",
            Like here,
            "or here,
            and here"
            ]     End of array comment, forgot the #
number = 3.14  pi <--again forgot the #"#;

    assert!(Parser::new(input).parse_document().is_err());
}

#[test]
fn test_array_nesting_limit() {
    let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    assert!(value_of(&nested(MAX_NESTING)).is_ok());

    let err = value_of(&nested(MAX_NESTING + 1)).unwrap_err();
    assert!(matches!(err, TomlError::SyntaxError { line: 1, code: Some(222), .. }));

    let err = Parser::new(&format!("a = {}", nested(10_000))).parse_document().unwrap_err();
    assert_eq!(err.code(), Some(222));
}

#[test]
fn test_value_display_reads_back() {
    assert_eq!(Value::Float(1.0).to_string(), "1.0");
    assert_eq!(Value::Float(-3.25).to_string(), "-3.25");
    assert_eq!(Value::String("a\"b\n".into()).to_string(), r#""a\"b\n""#);
    assert_eq!(
        Value::Array(vec![Value::Integer(1), Value::Integer(2)]).to_string(),
        "[1, 2]"
    );

    let input = r#"
int = -42
float = 1.0
small = 0.0000001
yes = true
when = 1979-05-27T07:32:00Z
text = "tab\there \"quoted\" back\\slash \0 # not a comment"
nested = [ [1, 2], ["a", "b"] ]
"#;
    let doc = Parser::new(input).parse_document().expect("Failed to parse document");
    assert_eq!(doc.root_values.len(), 7);

    for kv in &doc.root_values {
        let rendered = kv.value.to_string();
        assert_eq!(value_of(&rendered).as_ref(), Ok(&kv.value), "{} rendered as {}", kv.key, rendered);
    }
}
