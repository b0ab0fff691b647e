//! Route type: an undirected, weighted connection between two cities.

use serde::{Deserialize, Serialize};

use super::CityId;
use crate::error::DispatchError;

/// An undirected connection between two cities, weighted in transit days.
///
/// A route is symmetric: shipping a → b takes as long as b → a. The weight
/// is at least one day; co-located goods need no route at all.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{CityId, Route};
///
/// let r = Route::new(CityId(2), CityId(1), 3).unwrap();
/// assert_eq!(r.days(), 3);
/// assert!(r.connects(CityId(1), CityId(2)));
/// assert_eq!(r.other_end(CityId(2)), Some(CityId(1)));
/// assert!(Route::new(CityId(1), CityId(1), 3).is_err());
/// assert!(Route::new(CityId(1), CityId(2), 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    a: CityId,
    b: CityId,
    days: u32,
}

impl Route {
    /// Creates a route.
    ///
    /// Returns [`DispatchError::InvalidRoute`] for self-loops and zero-day
    /// weights.
    pub fn new(a: CityId, b: CityId, days: u32) -> Result<Self, DispatchError> {
        if a == b || days == 0 {
            return Err(DispatchError::InvalidRoute { a, b, days });
        }
        Ok(Self { a, b, days })
    }

    /// Both endpoints, lower id first.
    pub fn endpoints(&self) -> (CityId, CityId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// Transit time in days.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Returns `true` if this route joins `x` and `y`, in either direction.
    pub fn connects(&self, x: CityId, y: CityId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoint opposite `city`, or `None` if `city` is not an endpoint.
    pub fn other_end(&self, city: CityId) -> Option<CityId> {
        if city == self.a {
            Some(self.b)
        } else if city == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}
