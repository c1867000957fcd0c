// @generated by `cargo xtask gen-cell`. DO NOT EDIT.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use halo_atomic::{codec, AtomicValue, Cell, DecodeError, NoCmp};

/// Presence wrapper: keeps a stored `None` apart from the empty slot.
struct StoredAtomicLabel(Option<String>);

/// An atomic, type-safe wrapper for `Option<String>` values.
///
/// Loads before the first store return `None`.
pub struct AtomicLabel {
    _nocmp: NoCmp,
    v: AtomicValue<StoredAtomicLabel>,
}

impl AtomicLabel {
    /// Creates a new cell holding `value`.
    pub fn new(value: Option<String>) -> Self {
        let cell = Self {
            _nocmp: NoCmp::new(),
            v: AtomicValue::empty(),
        };
        if value != None {
            cell.store(value);
        }
        cell
    }

    /// Atomically loads the wrapped value.
    pub fn load(&self) -> Option<String> {
        match self.v.load_full() {
            Some(stored) => Self::unpack(&stored),
            None => None,
        }
    }

    /// Atomically stores `value`.
    ///
    /// This allocates.
    pub fn store(&self, value: Option<String>) {
        self.v.store(Self::pack(value));
    }

    fn pack(value: Option<String>) -> StoredAtomicLabel {
        StoredAtomicLabel(value)
    }

    fn unpack(stored: &StoredAtomicLabel) -> Option<String> {
        stored.0.clone()
    }
}

impl Default for AtomicLabel {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Cell for AtomicLabel {
    type Value = Option<String>;

    fn load(&self) -> Option<String> {
        Self::load(self)
    }

    fn store(&self, value: Option<String>) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicLabel").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.load();
        match codec::to_text(&value) {
            Ok(text) => f.write_str(&text),
            // Some accepted values have no JSON spelling; show them anyway.
            Err(_) => write!(f, "{value:?}"),
        }
    }
}

impl FromStr for AtomicLabel {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::from_text::<Option<String>>(s).map(Self::new)
    }
}

impl Serialize for AtomicLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Option<String> as Deserialize>::deserialize(deserializer).map(Self::new)
    }
}
