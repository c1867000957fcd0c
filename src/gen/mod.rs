//! Source generator for new cells.
//!
//! The cell family is kept uniform by rendering every specialised cell from
//! one of four canonical patterns instead of copying code by hand:
//!
//! - [`Category::NativeBool`]: a boolean over the native `AtomicBool`.
//! - [`Category::NativeInt`]: a fixed-width integer over a native atomic.
//! - [`Category::NativeFloat`]: a float reinterpreted as bits in an integer cell.
//! - [`Category::Value`]: a reference-value cell over [`AtomicValue`](crate::AtomicValue),
//!   with a presence wrapper when the zero value is "nillable".
//!
//! Rendering is a pure function from [`Descriptor`] to source text. Writing
//! the text out (and formatting it) is left to the caller, normally
//! `cargo xtask gen-cell`.
//!
//! ```
//! use halo_atomic::gen::{render, Descriptor};
//!
//! let src = render(&Descriptor::new("AtomicInt16", "i16")).unwrap();
//! assert!(src.contains("pub struct AtomicInt16"));
//! assert!(src.contains("core::sync::atomic::AtomicI16"));
//! ```

mod descriptor;
mod manifest;
mod template;

pub use descriptor::{Category, Descriptor};
pub use manifest::{Entry, Manifest};
pub use template::{render, HEADER};
