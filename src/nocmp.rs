//! Comparison guard embedded in every cell.
//!
//! A cell's value lives behind atomic instructions; comparing or copying the
//! cell *itself* would read the slot non-atomically and silently diverge from
//! the live value. `NoCmp` implements none of `PartialEq`, `Eq`, `Hash`,
//! `Clone` or `Copy`, so a cell that embeds it cannot derive them either:
//!
//! ```compile_fail
//! use halo_atomic::NoCmp;
//!
//! #[derive(PartialEq)]
//! struct Counter {
//!     _nocmp: NoCmp,
//!     hits: core::sync::atomic::AtomicU64,
//! }
//! ```
//!
//! ```compile_fail
//! use halo_atomic::AtomicInt64;
//!
//! let a = AtomicInt64::new(1);
//! let b = AtomicInt64::new(1);
//! assert!(a == b);
//! ```
//!
//! ```compile_fail
//! use halo_atomic::AtomicString;
//!
//! let a = AtomicString::new("abc");
//! let _b = a.clone();
//! ```
//!
//! Compare the loaded values instead:
//!
//! ```
//! use halo_atomic::AtomicInt64;
//!
//! let a = AtomicInt64::new(1);
//! let b = AtomicInt64::new(1);
//! assert_eq!(a.load(), b.load());
//! ```

use core::fmt;

/// Zero-sized marker that forbids value comparison and copying of its owner.
///
/// Embedding it costs nothing: it has size 0 and alignment 1, so it never
/// changes the layout of the cell it sits in.
#[repr(transparent)]
pub struct NoCmp(());

impl NoCmp {
    /// Creates the marker.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(())
    }
}

impl Default for NoCmp {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NoCmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoCmp")
    }
}
