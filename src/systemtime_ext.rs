//! Convenience arithmetic on [`AtomicTime`].
//!
//! These compute from a single atomic load and never store.

use std::time::{Duration, SystemTime, SystemTimeError};

use crate::systemtime::{from_unix_nanos, unix_nanos};
use crate::AtomicTime;

impl AtomicTime {
    /// The loaded time shifted forward by `d`, or `None` on overflow.
    pub fn add(&self, d: Duration) -> Option<SystemTime> {
        self.load().checked_add(d)
    }

    /// How far the loaded time lies after `earlier`.
    ///
    /// Fails if `earlier` is later than the loaded time.
    pub fn sub(&self, earlier: SystemTime) -> Result<Duration, SystemTimeError> {
        self.load().duration_since(earlier)
    }

    /// The loaded time rounded to the nearest multiple of `d` since the epoch.
    ///
    /// Halfway values round up. A zero `d` returns the time unchanged, and
    /// `None` means the rounded time does not fit the platform clock.
    pub fn round(&self, d: Duration) -> Option<SystemTime> {
        let t = self.load();
        if d.is_zero() {
            return Some(t);
        }
        let step = i128::try_from(d.as_nanos()).ok()?;
        let nanos = unix_nanos(t);
        let below = nanos.rem_euclid(step);
        let down = nanos - below;
        let rounded = if below < step - below { down } else { down + step };
        from_unix_nanos(rounded)
    }
}
