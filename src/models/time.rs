//! Simulated timestamps.

use serde::{Deserialize, Serialize};

/// Seconds in one simulated day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A point in simulated time, in seconds since an arbitrary epoch.
///
/// The simulation advances in whole days, but timestamps keep second
/// resolution so a host clock may start mid-day. Elapsed time is always
/// reported in whole days, floored.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Timestamp;
///
/// let t0 = Timestamp::from_days(10);
/// let t1 = t0.plus_days(3).plus_seconds(3_600);
/// assert_eq!(t1.whole_days_since(t0), 3);
/// assert_eq!(t0.whole_days_since(t1), -4);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from raw seconds.
    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Creates a timestamp at the start of day `days`.
    pub fn from_days(days: i64) -> Self {
        Self(days * SECONDS_PER_DAY)
    }

    /// Raw seconds since the epoch.
    pub fn seconds(&self) -> i64 {
        self.0
    }

    /// This timestamp moved forward by whole days.
    ///
    /// Saturates at the latest representable time.
    pub fn plus_days(self, days: u64) -> Self {
        let seconds = i64::try_from(days)
            .unwrap_or(i64::MAX)
            .saturating_mul(SECONDS_PER_DAY);
        Self(self.0.saturating_add(seconds))
    }

    /// This timestamp moved by a signed number of seconds.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        Self(self.0 + seconds)
    }

    /// Whole days elapsed from `earlier` to `self`, floored.
    ///
    /// Negative when `earlier` lies in the future.
    pub fn whole_days_since(&self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).div_euclid(SECONDS_PER_DAY)
    }
}
