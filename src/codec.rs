//! Text helpers shared by hand-written and generated cells.

use core::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::DecodeError;

/// Encodes `value` as compact JSON text.
pub fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Decodes JSON text into a `T`.
pub fn from_text<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    serde_json::from_str(text).map_err(DecodeError::new::<T>)
}

/// Formats a float in its shortest round-tripping form, switching to
/// exponent notation (`1e+300`, `5e-324`) when the decimal exponent is below
/// -4 or at least 6, like C's `%g`.
///
/// Non-finite values print as `inf`, `-inf` and `NaN`, which `str::parse`
/// accepts back.
pub fn format_float<T: fmt::Display + fmt::LowerExp>(value: T) -> String {
    let sci = format!("{value:e}");
    let exp = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match exp {
        Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        _ => value.to_string(),
    }
}
