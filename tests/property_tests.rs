//! Property-based tests for the value grammar and the comment stripper.

use proptest::prelude::*;
use toml_cfg::lexer::strip_comments;
use toml_cfg::{parse, ConfigNode, TomlError, Value};

fn parsed_value(source: &str) -> Option<Value> {
    match parse(source) {
        Ok(table) => table.get_value("foo").cloned(),
        Err(e) => {
            eprintln!("Parse failed: {}", e);
            eprintln!("Source was: {}", source);
            None
        }
    }
}

proptest! {
    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert_eq!(parsed_value(&format!("foo={}", n)), Some(Value::Integer(n)));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert_eq!(parsed_value(&format!("foo = {}", b)), Some(Value::Boolean(b)));
    }

    #[test]
    fn prop_decimal_float(whole in -100_000i64..100_000, frac in 0u32..100_000) {
        let literal = format!("{}.{}", whole, frac);
        let expected: f64 = literal.parse().unwrap();
        prop_assert_eq!(parsed_value(&format!("foo = {}", literal)), Some(Value::Float(expected)));
    }

    #[test]
    fn prop_plain_string(s in "[a-zA-Z0-9 #\\[\\]=.,']{0,40}") {
        let source = format!("foo = \"{}\" # trailing", s);
        prop_assert_eq!(parsed_value(&source), Some(Value::String(s)));
    }

    #[test]
    fn prop_integer_array(v in prop::collection::vec(any::<i64>(), 0..20)) {
        let items: Vec<String> = v.iter().map(i64::to_string).collect();
        let expected = Value::Array(v.into_iter().map(Value::Integer).collect());
        prop_assert_eq!(parsed_value(&format!("foo = [{}]", items.join(", "))), Some(expected));
    }

    #[test]
    fn prop_multi_line_bool_array(v in prop::collection::vec(any::<bool>(), 1..10)) {
        let items: Vec<String> = v.iter().map(|b| format!("  {}, # item", b)).collect();
        let source = format!("foo = [\n{}\n]", items.join("\n"));
        let expected = Value::Array(v.into_iter().map(Value::Boolean).collect());
        prop_assert_eq!(parsed_value(&source), Some(expected));
    }

    #[test]
    fn prop_mixed_array_rejected(n in any::<i32>(), whole in 0i64..1000) {
        let source = format!("foo = [{}, {}.5]", n, whole);
        let mixed = matches!(parse(&source), Err(TomlError::MixedArray { .. }));
        prop_assert!(mixed);
    }

    #[test]
    fn prop_group_paths(segments in prop::collection::vec("[a-z_]{1,8}", 1..5)) {
        let source = format!("[{}]\nleaf = 1", segments.join("."));
        let table = parse(&source).unwrap();
        let mut path: Vec<&str> = segments.iter().map(String::as_str).collect();
        path.push("leaf");
        prop_assert_eq!(table.lookup(path.as_slice()), Some(&ConfigNode::Value(Value::Integer(1))));
    }

    #[test]
    fn prop_strip_comments_idempotent(s in "[a-z#\\[\\]=\" \\\\\n]{0,64}") {
        let once = strip_comments(&s);
        prop_assert_eq!(strip_comments(&once), once.clone());
        prop_assert_eq!(once.matches('\n').count(), s.matches('\n').count());
    }
}
