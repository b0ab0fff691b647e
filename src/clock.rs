//! Simulated time source.

use tracing::debug;

use crate::models::Timestamp;

/// Simulated time that moves forward in whole days.
///
/// [`ShipmentTracker`](crate::tracking::ShipmentTracker) is generic over
/// this trait, so a host simulation can drive it with its own clock.
pub trait SimClock {
    /// The current simulated time.
    fn now(&self) -> Timestamp;

    /// Resets the clock. Used to fix the epoch before a simulation starts.
    fn set_initial_time(&mut self, now: Timestamp);

    /// Moves the clock forward and returns the new time.
    fn advance_days(&mut self, days: u32) -> Timestamp;
}

/// A clock that only moves when told to, in whole days.
///
/// # Examples
///
/// ```
/// use u_dispatch::clock::{SimClock, SimulatedClock};
/// use u_dispatch::models::Timestamp;
///
/// let mut clock = SimulatedClock::starting_at(Timestamp::from_days(100));
/// clock.advance_days(3);
/// assert_eq!(clock.now(), Timestamp::from_days(103));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulatedClock {
    now: Timestamp,
}

impl SimulatedClock {
    /// Creates a clock at the given time.
    pub fn starting_at(now: Timestamp) -> Self {
        Self { now }
    }
}

impl SimClock for SimulatedClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn set_initial_time(&mut self, now: Timestamp) {
        self.now = now;
    }

    fn advance_days(&mut self, days: u32) -> Timestamp {
        self.now = self.now.plus_days(u64::from(days));
        debug!(days, now = self.now.seconds(), "Clock advanced");
        self.now
    }
}
