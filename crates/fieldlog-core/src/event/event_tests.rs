#![allow(non_snake_case)]

use super::*;

// Field tests

#[test]
fn Field___new___stores_key_and_value() {
    let field = Field::new("user", "alice");

    assert_eq!(field.key(), "user");
    assert_eq!(field.value(), "alice");
}

#[test]
fn Field___from_bytes___replaces_invalid_utf8() {
    let field = Field::from_bytes(b"k\xffey", b"va\xfe");

    assert_eq!(field.key(), "k\u{FFFD}ey");
    assert_eq!(field.value(), "va\u{FFFD}");
}

#[test]
fn Field___from_tuple___builds_field() {
    let field: Field = ("a", String::from("1")).into();

    assert_eq!(field, Field::new("a", "1"));
}

// Event tests

#[test]
fn Event___new___has_no_fields() {
    let event = Event::new(LogLevel::Error, "y");

    assert_eq!(event.level(), LogLevel::Error);
    assert_eq!(event.message(), "y");
    assert!(event.fields().is_empty());
}

#[test]
fn Event___with_fields___preserves_order() {
    let event = Event::with_fields(
        LogLevel::Info,
        "m",
        [Field::new("b", "2"), Field::new("a", "1"), Field::new("c", "3")],
    );

    let keys: Vec<&str> = event.fields().iter().map(Field::key).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn Event___with_fields___retains_duplicate_keys() {
    let event = Event::with_fields(
        LogLevel::Info,
        "m",
        [Field::new("a", "1"), Field::new("a", "2")],
    );

    assert_eq!(event.fields().len(), 2);
    assert_eq!(event.values_of("a").collect::<Vec<_>>(), vec!["1", "2"]);
}

#[test]
fn Event___values_of___missing_key_is_empty() {
    let event = Event::new(LogLevel::Info, "m");

    assert_eq!(event.values_of("nope").count(), 0);
}

#[test]
fn Event___display___renders_level_message_and_fields() {
    let event = Event::with_fields(
        LogLevel::Warn,
        "disk low",
        [Field::new("free", "3%"), Field::new("mount", "/")],
    );

    assert_eq!(event.to_string(), "WARN  disk low free=3% mount=/");
}

#[test]
fn Event___serialize___fields_are_ordered_array() {
    let event = Event::with_fields(LogLevel::Info, "m", [Field::new("a", "1")]);

    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "level": "info",
            "message": "m",
            "fields": [{"key": "a", "value": "1"}]
        })
    );
}
