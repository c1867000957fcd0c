//! Placeholder substitution over the canonical cell patterns.

use super::{Category, Descriptor};
use crate::ConfigError;

/// First line of every generated file.
pub const HEADER: &str = "// @generated by `cargo xtask gen-cell`. DO NOT EDIT.\n\n";

const NATIVE_BOOL: &str = include_str!("templates/native_bool.rs.tmpl");
const NATIVE_INT: &str = include_str!("templates/native_int.rs.tmpl");
const NATIVE_FLOAT: &str = include_str!("templates/native_float.rs.tmpl");
const VALUE: &str = include_str!("templates/value.rs.tmpl");
const STORED: &str = include_str!("templates/stored.rs.tmpl");

/// Renders the source of the cell described by `descriptor`.
///
/// Pure and deterministic: equal descriptors render to equal text, and two
/// descriptors of the same category differ only in the substituted names.
/// Nothing is rendered for an invalid descriptor.
pub fn render(descriptor: &Descriptor) -> Result<String, ConfigError> {
    descriptor.validate()?;

    let name = descriptor.name.trim();
    let wrapped = descriptor.wrapped.trim();
    let zero = descriptor.zero.trim();
    let krate = descriptor.krate.trim();
    let category = descriptor.category();

    let body = match category {
        Category::NativeBool => substitute(
            NATIVE_BOOL,
            &[("name", name), ("wrapped", wrapped), ("krate", krate)],
        ),
        Category::NativeInt => {
            let atomic = atomic_type(wrapped);
            let sub_wrap = if descriptor.unsigned {
                "Wraps around below zero."
            } else {
                "Wraps around on overflow."
            };
            substitute(
                NATIVE_INT,
                &[
                    ("name", name),
                    ("wrapped", wrapped),
                    ("krate", krate),
                    ("atomic", &atomic),
                    ("sub_wrap", sub_wrap),
                ],
            )
        }
        Category::NativeFloat => {
            let backing = if wrapped == "f32" {
                "AtomicUint32"
            } else {
                "AtomicUint64"
            };
            substitute(
                NATIVE_FLOAT,
                &[
                    ("name", name),
                    ("wrapped", wrapped),
                    ("krate", krate),
                    ("backing", backing),
                ],
            )
        }
        Category::Value => {
            let (stored, pack, unpack, stored_decl) = if descriptor.is_nillable() {
                let stored = format!("Stored{name}");
                let decl = substitute(
                    STORED,
                    &[("stored", &stored), ("wrapped", wrapped), ("zero", zero)],
                );
                let pack = format!("{stored}(value)");
                (stored, pack, "stored.0.clone()", decl)
            } else {
                (wrapped.to_owned(), "value".to_owned(), "stored.clone()", String::new())
            };
            substitute(
                VALUE,
                &[
                    ("name", name),
                    ("wrapped", wrapped),
                    ("zero", zero),
                    ("krate", krate),
                    ("stored", &stored),
                    ("pack", &pack),
                    ("unpack", unpack),
                    ("stored_decl", &stored_decl),
                ],
            )
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(name, ?category, bytes = body.len(), "rendered cell");

    let mut out = String::with_capacity(HEADER.len() + body.len());
    out.push_str(HEADER);
    out.push_str(&body);
    Ok(out)
}

/// `i32` → `AtomicI32`, `usize` → `AtomicUsize`.
fn atomic_type(wrapped: &str) -> String {
    let mut chars = wrapped.chars();
    match chars.next() {
        Some(first) => format!("Atomic{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "Atomic".to_owned(),
    }
}

/// Replaces every `{{key}}` with its value in a single left-to-right pass.
///
/// Unknown keys are left untouched, and substituted text is never rescanned.
fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let value = after.find("}}").and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
