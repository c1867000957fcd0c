// @generated by `cargo xtask gen-cell`. DO NOT EDIT.

use core::fmt;
use core::str::FromStr;
use core::sync::atomic::Ordering;
use core::sync::atomic::AtomicUsize;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cell, DecodeError, NoCmp};

/// An atomic wrapper around `usize`.
pub struct AtomicUintptr {
    _nocmp: NoCmp,
    v: AtomicUsize,
}

impl AtomicUintptr {
    /// Creates a new cell holding `value`.
    #[inline(always)]
    pub const fn new(value: usize) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicUsize::new(value),
        }
    }

    /// Atomically loads the wrapped value.
    #[inline(always)]
    pub fn load(&self) -> usize {
        self.v.load(Ordering::SeqCst)
    }

    /// Atomically stores `value`.
    #[inline(always)]
    pub fn store(&self, value: usize) {
        self.v.store(value, Ordering::SeqCst);
    }

    /// Atomically swaps in `value` and returns the previous value.
    #[inline(always)]
    pub fn swap(&self, value: usize) -> usize {
        self.v.swap(value, Ordering::SeqCst)
    }

    /// Stores `new` iff the current value equals `old`.
    ///
    /// Returns whether the swap happened.
    #[inline(always)]
    pub fn compare_and_swap(&self, old: usize, new: usize) -> bool {
        self.v
            .compare_exchange(old, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Atomically adds `delta` and returns the new value.
    ///
    /// Wraps around on overflow.
    #[inline(always)]
    pub fn add(&self, delta: usize) -> usize {
        self.v.fetch_add(delta, Ordering::SeqCst).wrapping_add(delta)
    }

    /// Atomically subtracts `delta` and returns the new value.
    ///
    /// Wraps around below zero.
    #[inline(always)]
    pub fn sub(&self, delta: usize) -> usize {
        self.v.fetch_sub(delta, Ordering::SeqCst).wrapping_sub(delta)
    }

    /// Atomically increments the value and returns the new value.
    #[inline(always)]
    pub fn inc(&self) -> usize {
        self.add(1)
    }

    /// Atomically decrements the value and returns the new value.
    #[inline(always)]
    pub fn dec(&self) -> usize {
        self.sub(1)
    }
}

impl Default for AtomicUintptr {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<usize> for AtomicUintptr {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicUintptr {
    type Value = usize;

    fn load(&self) -> usize {
        Self::load(self)
    }

    fn store(&self, value: usize) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicUintptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicUintptr").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicUintptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.load(), f)
    }
}

impl FromStr for AtomicUintptr {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(Self::new)
            .map_err(DecodeError::new::<usize>)
    }
}

impl Serialize for AtomicUintptr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicUintptr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        usize::deserialize(deserializer).map(Self::new)
    }
}
