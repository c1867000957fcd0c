use halo_atomic::{AtomicString, Cell};

#[test]
fn no_initial_value() {
    let atom = AtomicString::default();
    assert_eq!(atom.load(), "");
}

#[test]
fn scenario() {
    let atom = AtomicString::new("");
    assert_eq!(atom.load(), "");

    atom.store("abc");
    assert_eq!(atom.load(), "abc");
    assert_eq!(atom.marshal_json().unwrap(), b"\"abc\"");

    atom.unmarshal_json(b"\"xyz\"").unwrap();
    assert_eq!(atom.load(), "xyz");

    let err = atom.unmarshal_json(b"42").unwrap_err();
    assert!(err.expected().ends_with("String"));
    assert!(err.as_json().is_some_and(serde_json::Error::is_data));
    assert_eq!(atom.load(), "xyz");
}

#[test]
fn text_and_debug() {
    let atom = AtomicString::new("bcd");
    assert_eq!(atom.to_string(), "bcd");
    assert_eq!(format!("{atom:?}"), "AtomicString(\"bcd\")");

    let parsed: AtomicString = "with \"quotes\"".parse().unwrap();
    assert_eq!(parsed.marshal_json().unwrap(), br#""with \"quotes\"""#);
}

#[test]
fn empty_round_trip() {
    let atom = AtomicString::new("x");
    atom.unmarshal_json(b"\"\"").unwrap();
    assert_eq!(atom.load(), "");
    assert_eq!(atom.marshal_json().unwrap(), b"\"\"");
}
