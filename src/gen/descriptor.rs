use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Zero literal that marks a descriptor as nillable unless told otherwise.
const NIL_LITERAL: &str = "None";

/// Input to the generator: which cell to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Name of the generated type, e.g. `AtomicInt32`.
    pub name: String,
    /// Wrapped value type, e.g. `i32` or `Option<String>`.
    pub wrapped: String,
    /// Zero-value literal of the wrapped type. Required for reference-value cells.
    #[serde(default)]
    pub zero: String,
    /// Whether the wrapped integer type is unsigned.
    #[serde(default)]
    pub unsigned: bool,
    /// Whether the zero value needs a presence wrapper.
    ///
    /// Defaults to `zero == "None"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nillable: Option<bool>,
    /// Path the generated code uses to reach this library.
    #[serde(default = "default_krate")]
    pub krate: String,
}

fn default_krate() -> String {
    "crate".to_owned()
}

/// The canonical pattern a descriptor is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Boolean over the native `AtomicBool`.
    NativeBool,
    /// Fixed-width integer over a native atomic.
    NativeInt,
    /// Float stored as its bits in a fixed-width integer cell.
    NativeFloat,
    /// Reference-value cell over [`AtomicValue`](crate::AtomicValue).
    Value,
}

impl Descriptor {
    /// Describes a cell named `name` wrapping `wrapped`.
    pub fn new(name: impl Into<String>, wrapped: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wrapped: wrapped.into(),
            zero: String::new(),
            unsigned: false,
            nillable: None,
            krate: default_krate(),
        }
    }

    /// Sets the zero-value literal.
    #[must_use]
    pub fn zero(mut self, zero: impl Into<String>) -> Self {
        self.zero = zero.into();
        self
    }

    /// Marks the wrapped integer as unsigned.
    #[must_use]
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// Overrides nillable detection.
    #[must_use]
    pub fn nillable(mut self, nillable: bool) -> Self {
        self.nillable = Some(nillable);
        self
    }

    /// Sets the path used to reach this library from generated code.
    #[must_use]
    pub fn krate(mut self, krate: impl Into<String>) -> Self {
        self.krate = krate.into();
        self
    }

    /// Whether the zero value is wrapped in a presence marker before storing.
    pub fn is_nillable(&self) -> bool {
        self.nillable.unwrap_or(self.zero.trim() == NIL_LITERAL)
    }

    /// Picks the template for this descriptor.
    pub fn category(&self) -> Category {
        if self.is_nillable() {
            return Category::Value;
        }
        match self.wrapped.trim() {
            "bool" => Category::NativeBool,
            "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
                Category::NativeInt
            }
            "f32" | "f64" => Category::NativeFloat,
            _ => Category::Value,
        }
    }

    /// Rejects incomplete descriptors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Missing { field: "name" });
        }
        if self.wrapped.trim().is_empty() {
            return Err(ConfigError::Missing { field: "wrapped" });
        }
        if self.krate.trim().is_empty() {
            return Err(ConfigError::Missing { field: "krate" });
        }
        if !is_ident(&self.name) {
            return Err(ConfigError::InvalidName {
                name: self.name.clone(),
            });
        }
        if self.category() == Category::Value && self.zero.trim().is_empty() {
            return Err(ConfigError::Missing { field: "zero" });
        }
        Ok(())
    }
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(Descriptor::new("A", "bool").category(), Category::NativeBool);
        assert_eq!(Descriptor::new("A", "i32").category(), Category::NativeInt);
        assert_eq!(Descriptor::new("A", "usize").category(), Category::NativeInt);
        assert_eq!(Descriptor::new("A", "f32").category(), Category::NativeFloat);
        assert_eq!(Descriptor::new("A", "String").category(), Category::Value);
        assert_eq!(
            Descriptor::new("A", "u64").nillable(true).category(),
            Category::Value
        );
    }

    #[test]
    fn nillable_follows_zero_literal() {
        assert!(Descriptor::new("A", "Option<u8>").zero("None").is_nillable());
        assert!(!Descriptor::new("A", "String").zero("String::new()").is_nillable());
        assert!(!Descriptor::new("A", "Option<u8>")
            .zero("None")
            .nillable(false)
            .is_nillable());
    }

    #[test]
    fn rejects_incomplete_descriptors() {
        assert_eq!(
            Descriptor::new("", "i32").validate(),
            Err(ConfigError::Missing { field: "name" })
        );
        assert_eq!(
            Descriptor::new("A", " ").validate(),
            Err(ConfigError::Missing { field: "wrapped" })
        );
        assert_eq!(
            Descriptor::new("A", "String").validate(),
            Err(ConfigError::Missing { field: "zero" })
        );
        assert_eq!(
            Descriptor::new("1A", "i32").validate(),
            Err(ConfigError::InvalidName { name: "1A".into() })
        );
        assert!(Descriptor::new("A", "i32").validate().is_ok());
    }
}
