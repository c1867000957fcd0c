use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AtomicValue, Cell};

/// An atomic, type-safe wrapper around a `String`.
///
/// The empty string doubles as the never-written state, so a fresh cell and
/// a cell created with `""` are indistinguishable.
#[derive(Default)]
pub struct AtomicString {
    v: AtomicValue<String>,
}

impl AtomicString {
    /// Creates a new cell holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cell = Self::default();
        if !value.is_empty() {
            cell.store(value);
        }
        cell
    }

    /// Atomically loads the wrapped string.
    pub fn load(&self) -> String {
        self.v.load()
    }

    /// Atomically stores the passed string.
    ///
    /// Boxing the string for the shared slot allocates.
    pub fn store(&self, value: impl Into<String>) {
        self.v.store(value.into());
    }
}

impl From<&str> for AtomicString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AtomicString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicString {
    type Value = String;

    fn load(&self) -> String {
        Self::load(self)
    }

    fn store(&self, value: String) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicString").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.load())
    }
}

impl FromStr for AtomicString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for AtomicString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.load())
    }
}

impl<'de> Deserialize<'de> for AtomicString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
