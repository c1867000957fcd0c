// @generated by `cargo xtask gen-cell`. DO NOT EDIT.

use core::fmt;
use core::str::FromStr;
use core::sync::atomic::{self, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{retry, Cell, DecodeError, NoCmp};

/// An atomic `bool`.
pub struct AtomicBool {
    _nocmp: NoCmp,
    v: atomic::AtomicBool,
}

impl AtomicBool {
    /// Creates a new cell holding `value`.
    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: atomic::AtomicBool::new(value),
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn load(&self) -> bool {
        self.v.load(Ordering::SeqCst)
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store(&self, value: bool) {
        self.v.store(value, Ordering::SeqCst);
    }

    /// Swaps the current value, returning the previous value.
    #[inline(always)]
    pub fn swap(&self, value: bool) -> bool {
        self.v.swap(value, Ordering::SeqCst)
    }

    /// Stores `new` if the current value equals `old`.
    ///
    /// Returns whether the swap happened.
    #[inline(always)]
    pub fn compare_and_swap(&self, old: bool, new: bool) -> bool {
        self.v
            .compare_exchange(old, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Atomically negates the value and returns the previous value.
    ///
    /// Implemented as a compare-and-swap retry loop, see [`retry::cas_loop`].
    #[inline]
    pub fn toggle(&self) -> bool {
        let (old, _) = retry::cas_loop(
            || self.load(),
            |old, new| self.compare_and_swap(old, new),
            |old| !old,
        );
        old
    }
}

impl Default for AtomicBool {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicBool {
    type Value = bool;

    fn load(&self) -> bool {
        Self::load(self)
    }

    fn store(&self, value: bool) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicBool").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.load(), f)
    }
}

impl FromStr for AtomicBool {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<bool>()
            .map(Self::new)
            .map_err(DecodeError::new::<bool>)
    }
}

impl Serialize for AtomicBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::new)
    }
}
