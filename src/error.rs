//! Error types shared by the cell family and the generator.

use core::any::type_name;
use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Malformed or type-mismatched input handed to a cell's decoder.
///
/// The cell that produced this error still holds the value it had before the
/// call.
#[derive(Debug, Error)]
#[error("cannot decode {expected}: {source}")]
pub struct DecodeError {
    expected: &'static str,
    #[source]
    source: BoxError,
}

impl DecodeError {
    /// Wraps `source` as a failure to decode a `T`.
    pub fn new<T: ?Sized>(source: impl Into<BoxError>) -> Self {
        Self {
            expected: type_name::<T>(),
            source: source.into(),
        }
    }

    /// Name of the underlying type the input was expected to encode.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// The JSON error behind this failure, if the input was JSON.
    pub fn as_json(&self) -> Option<&serde_json::Error> {
        self.source.downcast_ref()
    }
}

/// An incomplete or invalid generator descriptor.
///
/// Reported before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required descriptor field is blank.
    #[error("descriptor field `{field}` is required")]
    Missing {
        /// Name of the blank field.
        field: &'static str,
    },
    /// The cell name is not a Rust identifier.
    #[error("{name:?} is not a valid type name")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// Text that does not follow the duration grammar (`1h2m3.5s`, `-1.5µs`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDurationError {
    /// The text is not a duration at all.
    #[error("invalid duration {0:?}")]
    Invalid(String),
    /// A component is missing its unit.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    /// A component uses an unknown unit.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unit as written.
        unit: String,
        /// The full input.
        input: String,
    },
    /// The duration does not fit in 64-bit nanoseconds.
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}
