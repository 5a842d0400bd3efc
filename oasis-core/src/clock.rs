//! Source of the current local moment.
//!
//! Crowd estimation depends on the wall clock, so the engine reads time
//! through [`Clock`] and tests substitute a [`FixedClock`].

use chrono::{DateTime, FixedOffset, Local};

/// Provide the current local time.
pub trait Clock: Send + Sync {
    /// Current instant with the local UTC offset attached.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the operating system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use oasis_core::{Clock, FixedClock};
///
/// let moment = DateTime::parse_from_rfc3339("2025-07-16T13:00:00+02:00").expect("valid");
/// assert_eq!(FixedClock::new(moment).now(), moment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    /// Pin the clock to `moment`.
    #[must_use]
    pub const fn new(moment: DateTime<FixedOffset>) -> Self {
        Self(moment)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
