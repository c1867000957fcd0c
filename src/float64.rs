use core::fmt;
use core::str::FromStr;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{codec, retry, AtomicUint64, Cell, DecodeError, NoCmp};

/// An atomic `f64`.
///
/// The value lives in an [`AtomicUint64`] as its IEEE-754 bit pattern, so
/// every bit pattern an `f64` can take (NaN payloads, subnormals, `-0.0`)
/// is kept verbatim.
///
/// Comparison and arithmetic deliberately disagree:
/// - [`compare_and_swap`](Self::compare_and_swap) is bit-exact: `0.0` does
///   not match `-0.0`, and a NaN only matches a NaN with the same payload.
/// - [`add`](Self::add) and [`sub`](Self::sub) use ordinary float arithmetic,
///   with its rounding, in a compare-and-swap retry loop.
///
/// ```
/// use halo_atomic::AtomicFloat64;
///
/// let f = AtomicFloat64::new(1.5);
/// assert_eq!(f.add(2.5), 4.0);
/// assert!(f.compare_and_swap(4.0, 10.0));
/// assert_eq!(f.load(), 10.0);
/// ```
pub struct AtomicFloat64 {
    _nocmp: NoCmp,
    v: AtomicUint64,
}

impl AtomicFloat64 {
    /// Creates a new cell holding `value`.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicUint64::new(value.to_bits()),
        }
    }

    /// Atomically loads the wrapped value.
    #[inline]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.v.load())
    }

    /// Atomically stores `value`.
    #[inline]
    pub fn store(&self, value: f64) {
        self.v.store(value.to_bits());
    }

    /// Atomically swaps in `value` and returns the previous value.
    #[inline]
    pub fn swap(&self, value: f64) -> f64 {
        f64::from_bits(self.v.swap(value.to_bits()))
    }

    /// Stores `new` iff the current bit pattern equals that of `old`.
    #[inline]
    pub fn compare_and_swap(&self, old: f64, new: f64) -> bool {
        self.v.compare_and_swap(old.to_bits(), new.to_bits())
    }

    /// Atomically adds `delta` and returns the new value.
    pub fn add(&self, delta: f64) -> f64 {
        // Retry on the raw bits: round-tripping a NaN through `f64` could
        // change the pattern and make the CAS fail forever.
        let (_, new) = retry::cas_loop(
            || self.v.load(),
            |old, new| self.v.compare_and_swap(old, new),
            |bits| (f64::from_bits(bits) + delta).to_bits(),
        );
        f64::from_bits(new)
    }

    /// Atomically subtracts `delta` and returns the new value.
    pub fn sub(&self, delta: f64) -> f64 {
        self.add(-delta)
    }
}

impl Default for AtomicFloat64 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for AtomicFloat64 {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicFloat64 {
    type Value = f64;

    fn load(&self) -> f64 {
        Self::load(self)
    }

    fn store(&self, value: f64) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicFloat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicFloat64").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicFloat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_float(self.load()))
    }
}

impl FromStr for AtomicFloat64 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f64>().map(Self::new).map_err(DecodeError::new::<f64>)
    }
}

impl Serialize for AtomicFloat64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.load();
        // JSON has no spelling for these; refuse rather than emit `null`.
        if !value.is_finite() {
            return Err(S::Error::custom(format_args!("unsupported value: {value}")));
        }
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for AtomicFloat64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}
