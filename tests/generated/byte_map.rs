// @generated by `cargo xtask gen-cell`. DO NOT EDIT.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use halo_atomic::{codec, AtomicValue, Cell, DecodeError, NoCmp};

/// An atomic, type-safe wrapper for `std::collections::BTreeMap<Vec<u8>, u8>` values.
///
/// Loads before the first store return `std::collections::BTreeMap::new()`.
pub struct AtomicByteMap {
    _nocmp: NoCmp,
    v: AtomicValue<std::collections::BTreeMap<Vec<u8>, u8>>,
}

impl AtomicByteMap {
    /// Creates a new cell holding `value`.
    pub fn new(value: std::collections::BTreeMap<Vec<u8>, u8>) -> Self {
        let cell = Self {
            _nocmp: NoCmp::new(),
            v: AtomicValue::empty(),
        };
        if value != std::collections::BTreeMap::new() {
            cell.store(value);
        }
        cell
    }

    /// Atomically loads the wrapped value.
    pub fn load(&self) -> std::collections::BTreeMap<Vec<u8>, u8> {
        match self.v.load_full() {
            Some(stored) => Self::unpack(&stored),
            None => std::collections::BTreeMap::new(),
        }
    }

    /// Atomically stores `value`.
    ///
    /// This allocates.
    pub fn store(&self, value: std::collections::BTreeMap<Vec<u8>, u8>) {
        self.v.store(Self::pack(value));
    }

    fn pack(value: std::collections::BTreeMap<Vec<u8>, u8>) -> std::collections::BTreeMap<Vec<u8>, u8> {
        value
    }

    fn unpack(stored: &std::collections::BTreeMap<Vec<u8>, u8>) -> std::collections::BTreeMap<Vec<u8>, u8> {
        stored.clone()
    }
}

impl Default for AtomicByteMap {
    fn default() -> Self {
        Self::new(std::collections::BTreeMap::new())
    }
}

impl Cell for AtomicByteMap {
    type Value = std::collections::BTreeMap<Vec<u8>, u8>;

    fn load(&self) -> std::collections::BTreeMap<Vec<u8>, u8> {
        Self::load(self)
    }

    fn store(&self, value: std::collections::BTreeMap<Vec<u8>, u8>) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicByteMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicByteMap").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicByteMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.load();
        match codec::to_text(&value) {
            Ok(text) => f.write_str(&text),
            // Some accepted values have no JSON spelling; show them anyway.
            Err(_) => write!(f, "{value:?}"),
        }
    }
}

impl FromStr for AtomicByteMap {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::from_text::<std::collections::BTreeMap<Vec<u8>, u8>>(s).map(Self::new)
    }
}

impl Serialize for AtomicByteMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicByteMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <std::collections::BTreeMap<Vec<u8>, u8> as Deserialize>::deserialize(deserializer).map(Self::new)
    }
}
