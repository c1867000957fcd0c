use halo_atomic::{AtomicBool, Cell};

#[test]
fn toggle_sequence_and_encoding() {
    let atom = AtomicBool::new(false);
    assert!(!atom.toggle(), "toggle returns the previous value");
    assert!(atom.load());
    assert!(atom.toggle(), "toggle returns the previous value");
    assert!(!atom.load());
    assert_eq!(atom.to_string(), "false");
}

#[test]
fn compare_and_swap() {
    let atom = AtomicBool::new(true);
    assert!(atom.compare_and_swap(true, true));
    assert!(atom.load());
    assert!(atom.compare_and_swap(true, false));
    assert!(!atom.load());
    assert!(!atom.compare_and_swap(true, false), "stale expectation must fail");
    assert!(!atom.load(), "failed CAS must not modify the value");
}

#[test]
fn store_and_swap() {
    let atom = AtomicBool::default();
    atom.store(false);
    assert!(!atom.load());
    assert!(!atom.swap(false));
    assert!(!atom.swap(true));
    assert!(atom.load());
}

#[test]
fn json() {
    let atom = AtomicBool::new(true);
    assert_eq!(atom.marshal_json().unwrap(), b"true");

    atom.unmarshal_json(b"false").unwrap();
    assert!(!atom.load());

    let err = atom.unmarshal_json(b"42").unwrap_err();
    assert_eq!(err.expected(), "bool");
    assert!(err.as_json().is_some_and(serde_json::Error::is_data));
    assert!(!atom.load(), "failed decode must keep the previous value");
}

#[test]
fn text() {
    assert_eq!(AtomicBool::new(true).to_string(), "true");
    assert_eq!(AtomicBool::default().to_string(), "false");
    assert!("true".parse::<AtomicBool>().unwrap().load());
    assert!("yes".parse::<AtomicBool>().is_err());
}

#[test]
fn defaults_behave_alike() {
    let uninit = AtomicBool::default();
    let explicit = AtomicBool::new(false);
    let swapped = AtomicBool::new(true);
    swapped.swap(false);
    let cased = AtomicBool::new(true);
    assert!(cased.compare_and_swap(true, false));

    for b in [&uninit, &explicit, &swapped, &cased] {
        assert_eq!(b.marshal_json().unwrap(), b"false");
        assert_eq!(b.to_string(), "false");
        assert!(b.compare_and_swap(false, true));
        assert!(b.load());
    }
}

#[test]
fn serde_field() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Flags {
        enabled: AtomicBool,
    }

    let flags: Flags = serde_json::from_str(r#"{"enabled":true}"#).unwrap();
    assert!(flags.enabled.load());
    flags.enabled.toggle();
    assert_eq!(serde_json::to_string(&flags).unwrap(), r#"{"enabled":false}"#);
}
