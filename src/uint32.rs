// @generated by `cargo xtask gen-cell`. DO NOT EDIT.

use core::fmt;
use core::str::FromStr;
use core::sync::atomic::Ordering;
use core::sync::atomic::AtomicU32;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cell, DecodeError, NoCmp};

/// An atomic wrapper around `u32`.
pub struct AtomicUint32 {
    _nocmp: NoCmp,
    v: AtomicU32,
}

impl AtomicUint32 {
    /// Creates a new cell holding `value`.
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicU32::new(value),
        }
    }

    /// Atomically loads the wrapped value.
    #[inline(always)]
    pub fn load(&self) -> u32 {
        self.v.load(Ordering::SeqCst)
    }

    /// Atomically stores `value`.
    #[inline(always)]
    pub fn store(&self, value: u32) {
        self.v.store(value, Ordering::SeqCst);
    }

    /// Atomically swaps in `value` and returns the previous value.
    #[inline(always)]
    pub fn swap(&self, value: u32) -> u32 {
        self.v.swap(value, Ordering::SeqCst)
    }

    /// Stores `new` iff the current value equals `old`.
    ///
    /// Returns whether the swap happened.
    #[inline(always)]
    pub fn compare_and_swap(&self, old: u32, new: u32) -> bool {
        self.v
            .compare_exchange(old, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Atomically adds `delta` and returns the new value.
    ///
    /// Wraps around on overflow.
    #[inline(always)]
    pub fn add(&self, delta: u32) -> u32 {
        self.v.fetch_add(delta, Ordering::SeqCst).wrapping_add(delta)
    }

    /// Atomically subtracts `delta` and returns the new value.
    ///
    /// Wraps around below zero.
    #[inline(always)]
    pub fn sub(&self, delta: u32) -> u32 {
        self.v.fetch_sub(delta, Ordering::SeqCst).wrapping_sub(delta)
    }

    /// Atomically increments the value and returns the new value.
    #[inline(always)]
    pub fn inc(&self) -> u32 {
        self.add(1)
    }

    /// Atomically decrements the value and returns the new value.
    #[inline(always)]
    pub fn dec(&self) -> u32 {
        self.sub(1)
    }
}

impl Default for AtomicUint32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<u32> for AtomicUint32 {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicUint32 {
    type Value = u32;

    fn load(&self) -> u32 {
        Self::load(self)
    }

    fn store(&self, value: u32) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicUint32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicUint32").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicUint32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.load(), f)
    }
}

impl FromStr for AtomicUint32 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(Self::new)
            .map_err(DecodeError::new::<u32>)
    }
}

impl Serialize for AtomicUint32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicUint32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::new)
    }
}
