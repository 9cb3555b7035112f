//! Tests for template-shaped decoding.

use kata_json::{DecodeError, Overlay, Record, Value, decode, decode_value};
use quickcheck_macros::quickcheck;
use serde_json::{Map, json};

fn record_with_defaults() -> Record {
    let mut record = Record::new();
    let _ = record.insert("colour", "red");
    let _ = record.insert("size", 10);
    record
}

#[test]
fn test_malformed_text_reports_position() {
    let err = decode(&Record::new(), "{\n  \"a\": }").unwrap_err();
    let DecodeError::Malformed { line, column, .. } = &err;
    assert_eq!(*line, 2);
    assert!(*column > 0);
    assert!(err.to_string().starts_with("malformed JSON at line 2"));
}

#[test]
fn test_decode_value_rejects_trailing_garbage() {
    assert!(decode_value("[1, 2] x").is_err());
    assert!(decode_value("").is_err());
}

#[test]
fn test_template_values_are_not_carried_over() {
    let decoded = decode(&record_with_defaults(), r#"{"size": 3}"#).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded.get("size"), Some(&json!(3)));
    assert_eq!(decoded.get("colour"), None);
}

#[test]
fn test_fields_keep_document_order() {
    let decoded = decode(&Record::new(), r#"{"b": 1, "a": {"deep": [true]}, "c": null}"#).unwrap();
    assert_eq!(decoded.names().collect::<Vec<_>>(), ["b", "a", "c"]);
    assert_eq!(decoded.get("a"), Some(&json!({"deep": [true]})));
    let (last_name, last_value) = decoded.iter().last().unwrap();
    assert_eq!((last_name.as_str(), last_value), ("c", &Value::Null));
}

#[test]
fn test_array_payload_supplies_index_fields() {
    let decoded = decode(&Record::new(), r#"["x", "y"]"#).unwrap();
    assert_eq!(decoded.get("0"), Some(&json!("x")));
    assert_eq!(decoded.get("1"), Some(&json!("y")));
}

#[test]
fn test_scalar_payload_yields_blank_value() {
    let decoded = decode(&record_with_defaults(), "17").unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_value_template_keeps_variant() {
    let from_object = decode(&json!({"stale": 1}), r#"{"fresh": 2}"#).unwrap();
    assert_eq!(from_object, json!({"fresh": 2}));

    let from_array = decode(&json!([9, 9, 9]), r#"{"0": "a", "1": "b", "name": "x"}"#).unwrap();
    assert_eq!(from_array, json!(["a", "b"]));
}

// ========== array template indices ==========

#[test]
fn test_array_template_from_array_payload() {
    let decoded = decode(&json!([true]), r#"["x", {"y": 1}]"#).unwrap();
    assert_eq!(decoded, json!(["x", {"y": 1}]));
}

#[test]
fn test_array_template_refuses_far_index() {
    let decoded = decode(&json!([]), r#"{"4000000000000": 1}"#).unwrap();
    assert_eq!(decoded, json!([]));
    assert!(kata_common::warning::has_warned(
        "JSON",
        "field '4000000000000' dropped: template kind holds no such field"
    ));
}

#[test]
fn test_array_template_refuses_max_index() {
    let decoded = decode(&json!([]), r#"{"18446744073709551615": 1, "0": 2}"#).unwrap();
    assert_eq!(decoded, json!([2]));
}

#[test]
fn test_array_template_refuses_gap() {
    let decoded = decode(&json!([]), r#"{"0": "a", "2": "c"}"#).unwrap();
    assert_eq!(decoded, json!(["a"]));
}

#[test]
fn test_array_template_refuses_non_canonical_index() {
    let payload = r#"{"-1": "neg", "01": "lead", "+0": "sign", " 0": "space"}"#;
    let decoded = decode(&json!([]), payload).unwrap();
    assert_eq!(decoded, json!([]));

    let decoded = decode(&json!([]), r#"{"0": "a", "01": "lead"}"#).unwrap();
    assert_eq!(decoded, json!(["a"]));
}

#[test]
fn test_scalar_template_drops_fields() {
    let decoded = decode(&json!("template"), r#"{"a": 1}"#).unwrap();
    assert_eq!(decoded, json!(""));
    assert!(kata_common::warning::has_warned(
        "JSON",
        "field 'a' dropped: template kind holds no such field"
    ));
}

#[test]
fn test_custom_kind_via_overlay() {
    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        hits: u64,
        label: String,
    }

    impl Overlay for Counter {
        fn blank(&self) -> Self {
            Self::default()
        }

        fn apply_field(&mut self, name: &str, value: Value) -> bool {
            match (name, value) {
                ("hits", Value::Number(n)) => self.hits = n.as_u64().unwrap_or_default(),
                ("label", Value::String(s)) => self.label = s,
                _ => return false,
            }
            true
        }
    }

    let template = Counter {
        hits: 99,
        label: "old".to_string(),
    };
    let decoded = decode(&template, r#"{"hits": 4}"#).unwrap();
    assert_eq!(
        decoded,
        Counter {
            hits: 4,
            label: String::new()
        }
    );
}

#[quickcheck]
fn prop_decoded_fields_equal_parsed_fields(fields: Vec<(String, i64)>) -> bool {
    let map: Map<String, Value> = fields
        .into_iter()
        .map(|(name, n)| (name, Value::from(n)))
        .collect();
    let text = Value::Object(map.clone()).to_string();
    decode(&record_with_defaults(), &text).unwrap() == Record::from(map)
}
