use alloc::{
    string::{String, ToString},
    vec,
};

use quickcheck_macros::quickcheck;

use crate::{JsonReader, JsonWriter, Value};

#[quickcheck]
fn trees_survive_serialize_then_parse(value: Value) -> bool {
    // Root the tree in an array so bare-number delimiter rules never apply.
    let root = Value::Array(vec![value]);
    let text = root.to_json().unwrap();
    text.parse::<Value>().unwrap() == root
}

#[test]
fn a_fixed_tree_round_trips_byte_for_byte() {
    let text = r#"{"a":[1e3,-0.500,"x\/y"],"b":{"c":null,"d":false}}"#;
    let value: Value = text.parse().unwrap();
    assert_eq!(value.to_json().unwrap(), text);
}

#[test]
fn the_full_escape_alphabet_round_trips() {
    let mut special = String::from("\"\\/\u{8}\u{c}\n\r\t");
    for code in 0x00..=0x1Fu32 {
        special.push(char::from_u32(code).unwrap());
    }
    for code in 0x7F..=0x9Fu32 {
        special.push(char::from_u32(code).unwrap());
    }
    let root = Value::Array(vec![Value::String(special)]);
    let text = root.to_json().unwrap();
    assert_eq!(text.parse::<Value>().unwrap(), root);
}

#[test]
fn surrogate_pair_escapes_decode_to_the_written_character() {
    let value: Value = r#"["\ud834\udd1e \ud83d\ude00"]"#.parse().unwrap();
    assert_eq!(
        value,
        Value::Array(vec![Value::String("\u{1D11E} \u{1F600}".to_string())])
    );
}

#[test]
fn integer_boundaries_round_trip_through_writer_and_reader() {
    let mut w = JsonWriter::new(String::new());
    w.write_array_start()
        .unwrap()
        .write_byte(i8::MIN)
        .unwrap()
        .write_comma()
        .unwrap()
        .write_byte(i8::MAX)
        .unwrap()
        .write_comma()
        .unwrap()
        .write_short(i16::MIN)
        .unwrap()
        .write_comma()
        .unwrap()
        .write_short(i16::MAX)
        .unwrap()
        .write_comma()
        .unwrap()
        .write_int(i32::MIN)
        .unwrap()
        .write_comma()
        .unwrap()
        .write_int(i32::MAX)
        .unwrap()
        .write_comma()
        .unwrap()
        .write_long(i64::MIN)
        .unwrap()
        .write_comma()
        .unwrap()
        .write_long(i64::MAX)
        .unwrap()
        .write_array_end()
        .unwrap();
    let text = w.into_inner();

    let mut reader = JsonReader::from_text(&text);
    reader.next().unwrap();
    reader.next().unwrap();
    assert_eq!(reader.get_byte(), Ok(i8::MIN));
    reader.next().unwrap();
    assert_eq!(reader.get_byte(), Ok(i8::MAX));
    reader.next().unwrap();
    assert_eq!(reader.get_short(), Ok(i16::MIN));
    reader.next().unwrap();
    assert_eq!(reader.get_short(), Ok(i16::MAX));
    reader.next().unwrap();
    assert_eq!(reader.get_int(), Ok(i32::MIN));
    reader.next().unwrap();
    assert_eq!(reader.get_int(), Ok(i32::MAX));
    reader.next().unwrap();
    assert_eq!(reader.get_long(), Ok(i64::MIN));
    reader.next().unwrap();
    assert_eq!(reader.get_long(), Ok(i64::MAX));
}

#[test]
fn forty_digit_integers_round_trip_without_loss() {
    let big: num_bigint::BigInt = "9876543210987654321098765432109876543210"
        .parse()
        .unwrap();
    let mut w = JsonWriter::new(String::new());
    w.write_array_start()
        .unwrap()
        .write_big_integer(&big)
        .unwrap()
        .write_array_end()
        .unwrap();
    let text = w.into_inner();

    let mut reader = JsonReader::from_text(&text);
    reader.next().unwrap();
    reader.next().unwrap();
    assert_eq!(reader.get_big_integer().unwrap(), big);
}

#[cfg(feature = "std")]
#[test]
fn documents_round_trip_through_byte_streams() {
    let original: Value = r#"{"käse": [1, 2.5, {"deep": [[]]}], "leer": {}}"#
        .parse()
        .unwrap();

    let mut w = JsonWriter::new(crate::Utf8Sink::new(alloc::vec::Vec::new()));
    original.write_to(&mut w).unwrap();
    w.flush().unwrap();
    let bytes = w.into_inner().into_inner();

    let mut reader = JsonReader::from_reader(&bytes[..]);
    let parsed = Value::read_from(&mut reader).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn display_matches_to_json() {
    let value: Value = r#"{"z":1,"a":[true,null]}"#.parse().unwrap();
    assert_eq!(value.to_string(), r#"{"a":[true,null],"z":1}"#);
}
