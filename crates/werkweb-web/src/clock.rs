#![forbid(unsafe_code)]

//! Wall-clock source for reservation timestamps.

use chrono::{DateTime, SecondsFormat};
use web_time::{SystemTime, UNIX_EPOCH};

/// Source of the current time in Unix epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Host wall clock (`Date.now()` on wasm via `web-time`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// ISO-8601 UTC string with millisecond precision, e.g.
/// `2025-03-01T09:30:00.000Z`.
///
/// Out-of-range instants clamp to the Unix epoch.
#[must_use]
pub fn iso_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
