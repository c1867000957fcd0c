//! Atomic signed durations.
//!
//! A duration is modelled as a signed count of nanoseconds and stored in an
//! [`AtomicInt64`]. Every operation maps straight onto the integer cell's
//! native instructions, so nothing here needs a retry loop.
//!
//! The canonical text form uses unit suffixes (`1h2m3.5s`, `1.5µs`, `0s`);
//! JSON carries the plain nanosecond count.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Duration;

use crate::{AtomicInt64, Cell, DecodeError, NoCmp, ParseDurationError};

const NANOSECOND: u128 = 1;
const MICROSECOND: u128 = 1_000 * NANOSECOND;
const MILLISECOND: u128 = 1_000 * MICROSECOND;
const SECOND: u128 = 1_000 * MILLISECOND;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;

/// An atomic [`time::Duration`] with nanosecond resolution.
///
/// Durations beyond ±292 years saturate to the 64-bit nanosecond range on
/// store.
pub struct AtomicDuration {
    _nocmp: NoCmp,
    v: AtomicInt64,
}

impl AtomicDuration {
    /// Creates a new cell holding `value`.
    pub fn new(value: Duration) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicInt64::new(to_nanos(value)),
        }
    }

    /// Atomically loads the wrapped duration.
    pub fn load(&self) -> Duration {
        Duration::nanoseconds(self.v.load())
    }

    /// Atomically stores `value`.
    pub fn store(&self, value: Duration) {
        self.v.store(to_nanos(value));
    }

    /// Atomically adds `delta` and returns the new value.
    pub fn add(&self, delta: Duration) -> Duration {
        Duration::nanoseconds(self.v.add(to_nanos(delta)))
    }

    /// Atomically subtracts `delta` and returns the new value.
    pub fn sub(&self, delta: Duration) -> Duration {
        Duration::nanoseconds(self.v.sub(to_nanos(delta)))
    }

    /// Atomically swaps in `value` and returns the previous value.
    pub fn swap(&self, value: Duration) -> Duration {
        Duration::nanoseconds(self.v.swap(to_nanos(value)))
    }

    /// Stores `new` iff the current value equals `old`.
    pub fn compare_and_swap(&self, old: Duration, new: Duration) -> bool {
        self.v.compare_and_swap(to_nanos(old), to_nanos(new))
    }
}

fn to_nanos(d: Duration) -> i64 {
    let nanos = d.whole_nanoseconds();
    i64::try_from(nanos).unwrap_or(if nanos < 0 { i64::MIN } else { i64::MAX })
}

impl Default for AtomicDuration {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl From<Duration> for AtomicDuration {
    fn from(value: Duration) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicDuration {
    type Value = Duration;

    fn load(&self) -> Duration {
        Self::load(self)
    }

    fn store(&self, value: Duration) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicDuration")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl fmt::Display for AtomicDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_nanos(self.v.load()))
    }
}

impl FromStr for AtomicDuration {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_nanos(s)
            .map(|n| Self::new(Duration::nanoseconds(n)))
            .map_err(DecodeError::new::<Duration>)
    }
}

impl Serialize for AtomicDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.v.load())
    }
}

impl<'de> Deserialize<'de> for AtomicDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(|n| Self::new(Duration::nanoseconds(n)))
    }
}

/// Formats a nanosecond count as `72h3m0.5s`, `1.5µs`, `-2ms` or `0s`.
///
/// Leading zero units are omitted; sub-second durations use the largest unit
/// that keeps the integer part non-zero.
pub fn format_nanos(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_owned();
    }
    let sign = if nanos < 0 { "-" } else { "" };
    let u = nanos.unsigned_abs();

    let body = if u128::from(u) < SECOND {
        let (prec, unit) = if u128::from(u) < MICROSECOND {
            (0, "ns")
        } else if u128::from(u) < MILLISECOND {
            (3, "µs")
        } else {
            (6, "ms")
        };
        let (whole, frac) = split_frac(u, prec);
        format!("{whole}{frac}{unit}")
    } else {
        let (secs_total, frac) = split_frac(u, 9);
        let secs = secs_total % 60;
        let mins_total = secs_total / 60;
        let mut s = format!("{secs}{frac}s");
        if mins_total > 0 {
            s = format!("{}m{s}", mins_total % 60);
            let hours = mins_total / 60;
            if hours > 0 {
                s = format!("{hours}h{s}");
            }
        }
        s
    };
    format!("{sign}{body}")
}

/// Splits `v` into `v / 10^prec` and the fractional digits as `.ddd`, with
/// trailing zeros removed (empty when the fraction is zero).
fn split_frac(v: u64, prec: u32) -> (u64, String) {
    let scale = 10u64.pow(prec);
    let frac = v % scale;
    if frac == 0 {
        return (v / scale, String::new());
    }
    let digits = format!("{frac:0width$}", width = prec as usize);
    (v / scale, format!(".{}", digits.trim_end_matches('0')))
}

/// Parses the text produced by [`format_nanos`] back into nanoseconds.
///
/// Accepts an optional sign followed by one or more `<number><unit>`
/// components, where the number may carry a fraction and the unit is one of
/// `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`. A bare `0` is also accepted.
pub fn parse_nanos(input: &str) -> Result<i64, ParseDurationError> {
    let invalid = || ParseDurationError::Invalid(input.to_owned());
    let overflow = || ParseDurationError::Overflow(input.to_owned());

    let (neg, mut s) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    if s == "0" {
        return Ok(0);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let limit: u128 = if neg { 1 << 63 } else { (1 << 63) - 1 };
    let mut total: u128 = 0;
    while !s.is_empty() {
        let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, rest) = s.split_at(int_len);
        s = rest;

        let mut frac: u128 = 0;
        let mut scale: u128 = 1;
        let mut frac_len = 0;
        if let Some(rest) = s.strip_prefix('.') {
            frac_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            for b in rest[..frac_len].bytes() {
                // Fraction digits past the 18th cannot change a nanosecond count.
                if scale >= 10u128.pow(18) {
                    break;
                }
                frac = frac * 10 + u128::from(b - b'0');
                scale *= 10;
            }
            s = &rest[frac_len..];
        }
        if int_len == 0 && frac_len == 0 {
            return Err(invalid());
        }

        let unit_len = s
            .char_indices()
            .find(|&(_, c)| c == '.' || c.is_ascii_digit())
            .map_or(s.len(), |(i, _)| i);
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let scale_of_unit = match unit {
            "" => return Err(ParseDurationError::MissingUnit(input.to_owned())),
            "ns" => NANOSECOND,
            "us" | "µs" | "μs" => MICROSECOND,
            "ms" => MILLISECOND,
            "s" => SECOND,
            "m" => MINUTE,
            "h" => HOUR,
            _ => {
                return Err(ParseDurationError::UnknownUnit {
                    unit: unit.to_owned(),
                    input: input.to_owned(),
                })
            }
        };

        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| overflow())?
        };
        let component = whole
            .checked_mul(scale_of_unit)
            .and_then(|v| v.checked_add(frac * scale_of_unit / scale))
            .ok_or_else(overflow)?;
        total = total.checked_add(component).ok_or_else(overflow)?;
        if total > limit {
            return Err(overflow());
        }
    }

    // `limit` bounds `total` by 2^63, so both conversions are exact.
    let magnitude = total as i128;
    let signed = if neg { -magnitude } else { magnitude };
    Ok(signed as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_unit_suffixed_text() {
        assert_eq!(format_nanos(0), "0s");
        assert_eq!(format_nanos(1), "1ns");
        assert_eq!(format_nanos(1_500), "1.5µs");
        assert_eq!(format_nanos(-2_000_000), "-2ms");
        assert_eq!(format_nanos(1_500_000_000), "1.5s");
        assert_eq!(format_nanos(3_600_000_000_000), "1h0m0s");
        assert_eq!(format_nanos(3_723_500_000_000), "1h2m3.5s");
        assert_eq!(format_nanos(i64::MIN), "-2562047h47m16.854775808s");
        assert_eq!(format_nanos(i64::MAX), "2562047h47m16.854775807s");
    }

    #[test]
    fn parses_components() {
        assert_eq!(parse_nanos("0"), Ok(0));
        assert_eq!(parse_nanos("1h2m3.5s"), Ok(3_723_500_000_000));
        assert_eq!(parse_nanos("1.5us"), Ok(1_500));
        assert_eq!(parse_nanos("1.5µs"), Ok(1_500));
        assert_eq!(parse_nanos("-.5ms"), Ok(-500_000));
        assert_eq!(parse_nanos("+3s"), Ok(3_000_000_000));
        assert_eq!(parse_nanos("-2562047h47m16.854775808s"), Ok(i64::MIN));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(parse_nanos(""), Err(ParseDurationError::Invalid(_))));
        assert!(matches!(parse_nanos("-"), Err(ParseDurationError::Invalid(_))));
        assert!(matches!(parse_nanos("."), Err(ParseDurationError::Invalid(_))));
        assert!(matches!(parse_nanos("3"), Err(ParseDurationError::MissingUnit(_))));
        assert!(matches!(
            parse_nanos("3d"),
            Err(ParseDurationError::UnknownUnit { .. })
        ));
        assert!(matches!(
            parse_nanos("2562047h47m16.854775808s"),
            Err(ParseDurationError::Overflow(_))
        ));
    }
}
