// @generated by `cargo xtask gen-cell`. DO NOT EDIT.

use core::fmt;
use core::str::FromStr;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{codec, retry, Cell, DecodeError, NoCmp, AtomicUint32};

/// An atomic wrapper around `f32`, stored as its bit pattern.
///
/// `compare_and_swap` compares bit patterns, so `0.0` and `-0.0` differ and
/// NaNs only match the exact same payload. `add` and `sub` use ordinary
/// floating-point arithmetic inside a compare-and-swap retry loop.
pub struct AtomicFloat32 {
    _nocmp: NoCmp,
    v: AtomicUint32,
}

impl AtomicFloat32 {
    /// Creates a new cell holding `value`.
    #[inline]
    pub fn new(value: f32) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicUint32::new(value.to_bits()),
        }
    }

    /// Atomically loads the wrapped value.
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.v.load())
    }

    /// Atomically stores `value`.
    #[inline]
    pub fn store(&self, value: f32) {
        self.v.store(value.to_bits());
    }

    /// Atomically swaps in `value` and returns the previous value.
    #[inline]
    pub fn swap(&self, value: f32) -> f32 {
        f32::from_bits(self.v.swap(value.to_bits()))
    }

    /// Stores `new` iff the current bit pattern equals that of `old`.
    ///
    /// Returns whether the swap happened.
    #[inline]
    pub fn compare_and_swap(&self, old: f32, new: f32) -> bool {
        self.v.compare_and_swap(old.to_bits(), new.to_bits())
    }

    /// Atomically adds `delta` and returns the new value.
    pub fn add(&self, delta: f32) -> f32 {
        let (_, new) = retry::cas_loop(
            || self.v.load(),
            |old, new| self.v.compare_and_swap(old, new),
            |bits| (f32::from_bits(bits) + delta).to_bits(),
        );
        f32::from_bits(new)
    }

    /// Atomically subtracts `delta` and returns the new value.
    pub fn sub(&self, delta: f32) -> f32 {
        self.add(-delta)
    }
}

impl Default for AtomicFloat32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f32> for AtomicFloat32 {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicFloat32 {
    type Value = f32;

    fn load(&self) -> f32 {
        Self::load(self)
    }

    fn store(&self, value: f32) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicFloat32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicFloat32").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicFloat32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_float(self.load()))
    }
}

impl FromStr for AtomicFloat32 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f32>()
            .map(Self::new)
            .map_err(DecodeError::new::<f32>)
    }
}

impl Serialize for AtomicFloat32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.load();
        if !value.is_finite() {
            return Err(S::Error::custom(format_args!("unsupported value: {value}")));
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicFloat32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f32::deserialize(deserializer).map(Self::new)
    }
}
