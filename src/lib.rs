//! # `halo-atomic` - Type-safe atomic value cells
//!
//! Concurrent readers and writers share a scalar or small value through a
//! cell instead of a lock. Each cell prevents two bug classes that raw
//! atomics invite:
//!
//! - **Non-atomic comparison or copy.** Every cell embeds [`NoCmp`], so
//!   `==`, `Clone` and `Copy` are unavailable at compile time.
//! - **Torn updates.** Values without a native atomic instruction (floats,
//!   durations, strings, arbitrary values) are reduced to one that has one,
//!   either by bit reinterpretation or by swapping a whole heap payload.
//!
//! ## The family
//!
//! | Cell | Backing | Read-modify-write |
//! |---|---|---|
//! | [`AtomicBool`] | native `AtomicBool` | `toggle` via CAS retry loop |
//! | [`AtomicInt32`], [`AtomicInt64`], [`AtomicUint32`], [`AtomicUint64`], [`AtomicUintptr`] | native integer atomics | native fetch-add |
//! | [`AtomicFloat32`], [`AtomicFloat64`] | bits in an integer cell | `add`/`sub` via CAS retry loop |
//! | [`AtomicDuration`] | nanoseconds in [`AtomicInt64`] | native fetch-add |
//! | [`AtomicValue`] | `ArcSwapOption` slot | load/store only |
//! | [`AtomicString`], [`AtomicTime`] | [`AtomicValue`] | load/store only |
//!
//! `load`, `store`, `swap` and native `compare_and_swap`/`add` are
//! wait-free. The retry loops in [`retry`] are lock-free. Nothing blocks.
//!
//! Boolean, integer and `f32` cells are rendered by the [`gen`] module from
//! canonical patterns, which keeps guard, retry and serialization
//! behaviour identical across the family.
//!
//! ## Serialization
//!
//! Every cell implements [`Cell`], `Display`, `FromStr`, `serde::Serialize`
//! and `serde::Deserialize`. Decoding into a live cell goes through
//! [`Cell::unmarshal_json`], which leaves the cell untouched on error.
//!
//! ## Example
//!
//! ```rust
//! use halo_atomic::{AtomicBool, AtomicString, Cell};
//!
//! let flag = AtomicBool::new(false);
//! assert!(!flag.toggle());
//! assert!(flag.toggle());
//! assert_eq!(flag.to_string(), "false");
//!
//! let name = AtomicString::new("");
//! name.store("abc");
//! assert_eq!(name.marshal_json().unwrap(), b"\"abc\"");
//! name.unmarshal_json(b"\"xyz\"").unwrap();
//! assert!(name.unmarshal_json(b"42").is_err());
//! assert_eq!(name.load(), "xyz");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod bool;
mod cell;
pub mod codec;
mod duration;
mod error;
mod float32;
mod float64;
pub mod gen;
mod int32;
mod int64;
mod nocmp;
pub mod retry;
mod string;
mod systemtime;
mod systemtime_ext;
mod uint32;
mod uint64;
mod uintptr;
mod value;

pub use bool::AtomicBool;
pub use cell::Cell;
pub use duration::{format_nanos, parse_nanos, AtomicDuration};
pub use error::{ConfigError, DecodeError, ParseDurationError};
pub use float32::AtomicFloat32;
pub use float64::AtomicFloat64;
pub use int32::AtomicInt32;
pub use int64::AtomicInt64;
pub use nocmp::NoCmp;
pub use string::AtomicString;
pub use systemtime::AtomicTime;
pub use uint32::AtomicUint32;
pub use uint64::AtomicUint64;
pub use uintptr::AtomicUintptr;
pub use value::AtomicValue;

// The guard must stay free: cells are exactly as large as their storage.
const _: () = {
    use core::mem::{align_of, size_of};
    use core::sync::atomic;

    assert!(size_of::<NoCmp>() == 0);
    assert!(align_of::<NoCmp>() == 1);
    assert!(size_of::<AtomicBool>() == size_of::<atomic::AtomicBool>());
    assert!(size_of::<AtomicInt32>() == size_of::<atomic::AtomicI32>());
    assert!(size_of::<AtomicInt64>() == size_of::<atomic::AtomicI64>());
    assert!(size_of::<AtomicUint32>() == size_of::<atomic::AtomicU32>());
    assert!(size_of::<AtomicUint64>() == size_of::<atomic::AtomicU64>());
    assert!(size_of::<AtomicUintptr>() == size_of::<atomic::AtomicUsize>());
    assert!(size_of::<AtomicFloat32>() == size_of::<atomic::AtomicU32>());
    assert!(size_of::<AtomicFloat64>() == size_of::<atomic::AtomicU64>());
    assert!(size_of::<AtomicDuration>() == size_of::<atomic::AtomicI64>());
};
