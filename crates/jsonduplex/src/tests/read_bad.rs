use alloc::string::ToString;

use rstest::rstest;

use crate::{JsonError, JsonReader};

fn first_error(input: &str) -> JsonError {
    let mut reader = JsonReader::from_text(input);
    loop {
        if let Err(err) = reader.next() {
            return err;
        }
    }
}

#[rstest]
#[case("}", "Expecting { [")]
#[case("]", "Expecting { [")]
#[case(":", "Expecting { [")]
#[case(",", "Expecting { [")]
#[case("{]", "Expecting } STRING")]
#[case("{1}", "Expecting } STRING")]
#[case("{true}", "Expecting } STRING")]
#[case(r#"{"a" 1}"#, "Expecting :")]
#[case(r#"{"a"}"#, "Expecting :")]
#[case(r#"{"a":}"#, "Expecting { [ STRING NUMBER true false null")]
#[case(r#"{"a":1 "b":2}"#, "Expecting , }")]
#[case(r#"{"a":1,}"#, "Expecting STRING")]
#[case(r#"{"a":1,:"#, "Expecting STRING")]
#[case("[}", "Expecting ] { [ STRING NUMBER true false null")]
#[case("[:", "Expecting ] { [ STRING NUMBER true false null")]
#[case("[1 2]", "Expecting , ]")]
#[case("[1,]", "Expecting { [ STRING NUMBER true false null")]
#[case("[1,,", "Expecting { [ STRING NUMBER true false null")]
fn rejects_with_the_expected_token_set(#[case] input: &str, #[case] message: &str) {
    assert_eq!(first_error(input).to_string(), message, "{input}");
}

#[rstest]
#[case("", "Unexpected EOF while reading JSON stream")]
#[case("[", "Unexpected EOF while reading JSON stream")]
#[case("{", "Unexpected EOF while reading JSON stream")]
#[case(r#"{"a":"#, "Unexpected EOF while reading JSON stream")]
#[case("[[1],", "Unexpected EOF while reading JSON stream")]
#[case("[\"0", "Unexpected EOF while reading JSON string")]
#[case("[0", "Unexpected EOF while reading JSON number")]
#[case("[-", "Unexpected EOF while reading JSON number")]
#[case("[1.", "Unexpected EOF while reading JSON number")]
#[case("[1e", "Unexpected EOF while reading JSON number")]
#[case("[t", "Unexpected EOF while reading JSON true token")]
#[case("[fal", "Unexpected EOF while reading JSON false token")]
#[case("[nu", "Unexpected EOF while reading JSON null token")]
fn end_of_input_diagnostics_name_the_position(#[case] input: &str, #[case] message: &str) {
    assert_eq!(first_error(input).to_string(), message, "{input}");
}

#[test]
fn duplicate_key_is_rejected_with_the_key_name() {
    let err = first_error(r#"{"a": 1, "a": 2}"#);
    assert_eq!(
        err.to_string(),
        "JSON keys have to be unique. The key 'a' already exists"
    );
}

#[test]
fn duplicate_key_is_rejected_at_any_depth() {
    let err = first_error(r#"{"out": {"in": 1, "in": 2}}"#);
    assert_eq!(
        err.to_string(),
        "JSON keys have to be unique. The key 'in' already exists"
    );
}

#[test]
fn duplicate_check_ignores_string_values() {
    // The value "a" must not count against the key set.
    let mut reader = JsonReader::from_text(r#"{"a": "a"}"#);
    while reader.has_next() {
        reader.next().unwrap();
    }
}

#[test]
fn state_stays_defined_after_a_grammar_error() {
    let mut reader = JsonReader::from_text("[1 2]");
    reader.next().unwrap();
    reader.next().unwrap();
    let err = reader.next().unwrap_err();
    assert_eq!(err.to_string(), "Expecting , ]");
    // The engine still answers; the offending token was consumed, so the
    // following comma steps the array forward again.
    assert!(reader.has_next());
}

#[test]
#[should_panic(expected = "Current event isn't number")]
fn numeric_getter_on_string_event_panics() {
    let mut reader = JsonReader::from_text(r#"["x"]"#);
    reader.next().unwrap();
    reader.next().unwrap();
    let _ = reader.get_int();
}

#[test]
#[should_panic(expected = "Current event isn't string")]
fn string_getter_before_first_next_panics() {
    let reader = JsonReader::from_text("[]");
    let _ = reader.get_string();
}

#[test]
#[should_panic(expected = "Current event isn't boolean")]
fn boolean_getter_on_number_event_panics() {
    let mut reader = JsonReader::from_text("[1]");
    reader.next().unwrap();
    reader.next().unwrap();
    let _ = reader.get_boolean();
}

#[test]
#[should_panic(expected = "JSON reader have been closed")]
fn getter_after_close_panics() {
    let mut reader = JsonReader::from_text(r#"["x"]"#);
    reader.next().unwrap();
    reader.next().unwrap();
    reader.close();
    let _ = reader.get_string();
}
