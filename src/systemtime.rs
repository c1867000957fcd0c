//! Atomic wall-clock time.
//!
//! The canonical text and JSON form is RFC 3339 in UTC
//! (`1969-12-31T23:59:59Z`, `1970-01-01T00:00:01.5Z`), so times on either
//! side of the epoch round-trip. Times outside years `0000..=9999` have no
//! RFC 3339 spelling: JSON refuses them and `Display` falls back to the
//! `Debug` form.

use core::fmt;
use core::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::{AtomicValue, Cell, DecodeError, NoCmp};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// An atomic [`SystemTime`].
///
/// Loads before the first store return [`UNIX_EPOCH`].
pub struct AtomicTime {
    _nocmp: NoCmp,
    v: AtomicValue<SystemTime>,
}

impl AtomicTime {
    /// Creates a new cell holding `value`.
    pub fn new(value: SystemTime) -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicValue::new(value),
        }
    }

    /// Atomically loads the wrapped time.
    pub fn load(&self) -> SystemTime {
        self.v.load_full().map_or(UNIX_EPOCH, |t| *t)
    }

    /// Atomically stores `value`.
    ///
    /// This allocates.
    pub fn store(&self, value: SystemTime) {
        self.v.store(value);
    }
}

/// Signed nanoseconds between the epoch and `t`.
pub(crate) fn unix_nanos(t: SystemTime) -> i128 {
    let nanos = |d: Duration| {
        i128::from(d.as_secs()) * 1_000_000_000 + i128::from(d.subsec_nanos())
    };
    match t.duration_since(UNIX_EPOCH) {
        Ok(after) => nanos(after),
        Err(before) => -nanos(before.duration()),
    }
}

/// Inverse of [`unix_nanos`], `None` when the platform clock cannot hold it.
pub(crate) fn from_unix_nanos(nanos: i128) -> Option<SystemTime> {
    let magnitude = nanos.unsigned_abs();
    let secs = u64::try_from(magnitude / NANOS_PER_SEC).ok()?;
    let subsec = u32::try_from(magnitude % NANOS_PER_SEC).ok()?;
    let offset = Duration::new(secs, subsec);
    if nanos < 0 {
        UNIX_EPOCH.checked_sub(offset)
    } else {
        UNIX_EPOCH.checked_add(offset)
    }
}

fn format_rfc3339(t: SystemTime) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let utc = OffsetDateTime::from_unix_timestamp_nanos(unix_nanos(t))?;
    Ok(utc.format(&Rfc3339)?)
}

fn parse_rfc3339(s: &str) -> Result<SystemTime, DecodeError> {
    let parsed = OffsetDateTime::parse(s, &Rfc3339).map_err(DecodeError::new::<SystemTime>)?;
    from_unix_nanos(parsed.unix_timestamp_nanos())
        .ok_or_else(|| DecodeError::new::<SystemTime>(format!("{s} is out of range")))
}

impl Default for AtomicTime {
    fn default() -> Self {
        Self {
            _nocmp: NoCmp::new(),
            v: AtomicValue::empty(),
        }
    }
}

impl From<SystemTime> for AtomicTime {
    fn from(value: SystemTime) -> Self {
        Self::new(value)
    }
}

impl Cell for AtomicTime {
    type Value = SystemTime;

    fn load(&self) -> SystemTime {
        Self::load(self)
    }

    fn store(&self, value: SystemTime) {
        Self::store(self, value);
    }
}

impl fmt::Debug for AtomicTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicTime").field(&self.load()).finish()
    }
}

impl fmt::Display for AtomicTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.load();
        match format_rfc3339(t) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{t:?}"),
        }
    }
}

impl FromStr for AtomicTime {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rfc3339(s).map(Self::new)
    }
}

impl Serialize for AtomicTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = format_rfc3339(self.load()).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for AtomicTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_rfc3339(&text).map(Self::new).map_err(D::Error::custom)
    }
}
