//! Type-erased reference-value cell.
//!
//! `AtomicValue<T>` holds at most one heap-allocated `T` behind an
//! [`ArcSwapOption`]. The slot starts out empty ("never written"); the first
//! store fills it and no operation ever empties it again. Loads that find the
//! slot empty return the type's zero value instead of failing.
//!
//! Only whole-payload load and store are offered. There is no swap,
//! compare-and-swap or arithmetic at this layer: equality over an arbitrary
//! payload is not something the slot can decide atomically.

use core::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cell, NoCmp};

/// Atomic slot for one value of any type.
pub struct AtomicValue<T> {
    _nocmp: NoCmp,
    slot: ArcSwapOption<T>,
}

impl<T> AtomicValue<T> {
    /// Creates a cell that has never been written.
    pub fn empty() -> Self {
        Self {
            _nocmp: NoCmp::new(),
            slot: ArcSwapOption::empty(),
        }
    }

    /// Creates a cell already holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            slot: ArcSwapOption::new(Some(Arc::new(value))),
        }
    }

    /// Atomically observes the slot.
    ///
    /// Returns `None` iff nothing has ever been stored.
    #[inline]
    pub fn load_full(&self) -> Option<Arc<T>> {
        self.slot.load_full()
    }

    /// Atomically replaces the payload.
    ///
    /// This allocates; keep it off hot paths.
    #[inline]
    pub fn store(&self, value: T) {
        self.slot.store(Some(Arc::new(value)));
    }

    /// Whether any value has been stored.
    pub fn is_written(&self) -> bool {
        self.slot.load().is_some()
    }
}

impl<T: Clone + Default> AtomicValue<T> {
    /// Atomically loads the current value, or `T::default()` if the slot was
    /// never written.
    pub fn load(&self) -> T {
        self.slot
            .load()
            .as_deref()
            .cloned()
            .unwrap_or_default()
    }
}

impl<T> Default for AtomicValue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + Default> Cell for AtomicValue<T> {
    type Value = T;

    fn load(&self) -> T {
        Self::load(self)
    }

    fn store(&self, value: T) {
        Self::store(self, value);
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicValue").field(&self.load_full()).finish()
    }
}

impl<T: Serialize + Clone + Default> Serialize for AtomicValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for AtomicValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
