// @generated by `cargo xtask gen-cell`. DO NOT EDIT.

use core::fmt;
use core::str::FromStr;
use core::sync::atomic::Ordering;
use core::sync::atomic::AtomicU64;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cell, DecodeError, NoCmp};

/// An atomic wrapper around `u64`.
pub struct AtomicUint64 {
    _nocmp: NoCmp,
    v: AtomicU64,
}

impl AtomicUint64 {
    /// Creates a new cell holding `value`.
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicU64::new(value),
        }
    }

    /// Atomically loads the wrapped value.
    #[inline(always)]
    pub fn load(&self) -> u64 {
        self.v.load(Ordering::SeqCst)
    }

    /// Atomically stores `value`.
    #[inline(always)]
    pub fn store(&self, value: u64) {
        self.v.store(value, Ordering::SeqCst);
    }

    /// Atomically swaps in `value` and returns the previous value.
    #[inline(always)]
    pub fn swap(&self, value: u64) -> u64 {
        self.v.swap(value, Ordering::SeqCst)
    }

    /// Stores `new` iff the current value equals `old`.
    ///
    /// Returns whether the swap happened.
    #[inline(always)]
    pub fn compare_and_swap(&self, old: u64, new: u64) -> bool {
        self.v
            .compare_exchange(old, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Atomically adds `delta` and returns the new value.
    ///
    /// Wraps around on overflow.
    #[inline(always)]
    pub fn add(&self, delta: u64) -> u64 {
        self.v.fetch_add(delta, Ordering::SeqCst).wrapping_add(delta)
    }

    /// Atomically subtracts `delta` and returns the new value.
    ///
    /// Wraps around below zero.
    #[inline(always)]
    pub fn sub(&self, delta: u64) -> u64 {
        self.v.fetch_sub(delta, Ordering::SeqCst).wrapping_sub(delta)
    }

    /// Atomically increments the value and returns the new value.
    #[inline(always)]
    pub fn inc(&self) -> u64 {
        self.add(1)
    }

    /// Atomically decrements the value and returns the new value.
    #[inline(always)]
    pub fn dec(&self) -> u64 {
        self.sub(1)
    }
}

impl Default for AtomicUint64 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<u64> for AtomicUint64 {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicUint64 {
    type Value = u64;

    fn load(&self) -> u64 {
        Self::load(self)
    }

    fn store(&self, value: u64) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicUint64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicUint64").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicUint64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.load(), f)
    }
}

impl FromStr for AtomicUint64 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self::new)
            .map_err(DecodeError::new::<u64>)
    }
}

impl Serialize for AtomicUint64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicUint64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}
