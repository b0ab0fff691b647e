//! Dispatch plan and schedule types.

use serde::{Deserialize, Serialize};

use super::{CityId, OrderId, Timestamp};
use crate::error::DispatchError;

/// The immutable outcome of planning one order's dispatch.
///
/// Created once when the order is dispatched and kept by the
/// order-management side for later "where is my order" queries. The path
/// runs from the nearest supplying city to the buyer's city, both
/// inclusive; `leg_days[i]` is the transit time between `path[i]` and
/// `path[i + 1]`.
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatch::plan_dispatch;
/// use u_dispatch::models::{CityId, Timestamp};
/// use u_dispatch::network::RetailNetwork;
///
/// let mut net = RetailNetwork::new();
/// let a = net.add_city("A").unwrap();
/// let b = net.add_city("B").unwrap();
/// net.connect_cities(a, b, 4).unwrap();
/// let shop = net.add_shop(b).unwrap();
/// let order = net.add_order(a).unwrap();
/// net.add_item(order, shop).unwrap();
///
/// let plan = plan_dispatch(&net, a, order).unwrap();
/// assert_eq!(plan.path(), &[b, a]);
/// let schedule = plan.schedule(Timestamp::from_days(0));
/// assert_eq!(schedule.arrives_at, Timestamp::from_days(4));
/// ```
///
/// Deserialization checks that the path, legs, and totals agree, so a
/// stored plan locates exactly like the one the planner produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlanRecord")]
pub struct DispatchPlan {
    order: OrderId,
    buyer_city: CityId,
    nearest_city: CityId,
    assembly_days: u64,
    transit_days: u64,
    path: Vec<CityId>,
    leg_days: Vec<u32>,
}

/// Wire form of [`DispatchPlan`], checked before it becomes a plan.
#[derive(Deserialize)]
struct PlanRecord {
    order: OrderId,
    buyer_city: CityId,
    nearest_city: CityId,
    assembly_days: u64,
    transit_days: u64,
    path: Vec<CityId>,
    leg_days: Vec<u32>,
}

impl TryFrom<PlanRecord> for DispatchPlan {
    type Error = DispatchError;

    fn try_from(r: PlanRecord) -> Result<Self, Self::Error> {
        let reason = if r.path.len() != r.leg_days.len() + 1 {
            Some("path needs exactly one more city than legs")
        } else if r.leg_days.contains(&0) {
            Some("zero-day leg")
        } else if r.path.first() != Some(&r.nearest_city) {
            Some("path does not start at the nearest city")
        } else if r.path.last() != Some(&r.buyer_city) {
            Some("path does not end at the buyer city")
        } else if r.transit_days != sum_days(&r.leg_days) {
            Some("transit days differ from the leg total")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(DispatchError::InconsistentPlan {
                order: r.order,
                reason,
            });
        }

        Ok(Self {
            order: r.order,
            buyer_city: r.buyer_city,
            nearest_city: r.nearest_city,
            assembly_days: r.assembly_days,
            transit_days: r.transit_days,
            path: r.path,
            leg_days: r.leg_days,
        })
    }
}

fn sum_days(legs: &[u32]) -> u64 {
    legs.iter().map(|&d| u64::from(d)).sum()
}

impl DispatchPlan {
    /// Assembles a plan from planner output. Transit days are the sum of
    /// the leg weights.
    pub(crate) fn new(
        order: OrderId,
        nearest_city: CityId,
        assembly_days: u64,
        path: Vec<CityId>,
        leg_days: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(path.len(), leg_days.len() + 1);
        let buyer_city = path.last().copied().unwrap_or(nearest_city);
        Self {
            order,
            buyer_city,
            nearest_city,
            assembly_days,
            transit_days: sum_days(&leg_days),
            path,
            leg_days,
        }
    }

    /// The planned order.
    pub fn order(&self) -> OrderId {
        self.order
    }

    /// Destination city.
    pub fn buyer_city(&self) -> CityId {
        self.buyer_city
    }

    /// Supplying city closest to the buyer, where the order is assembled.
    pub fn nearest_city(&self) -> CityId {
        self.nearest_city
    }

    /// Days until every shop shipment has reached the nearest city.
    pub fn assembly_days(&self) -> u64 {
        self.assembly_days
    }

    /// Days from the nearest city to the buyer's city.
    pub fn transit_days(&self) -> u64 {
        self.transit_days
    }

    /// Cities from the nearest city to the buyer's city, inclusive.
    pub fn path(&self) -> &[CityId] {
        &self.path
    }

    /// Transit days of each consecutive pair in [`path`](Self::path).
    pub fn leg_days(&self) -> &[u32] {
        &self.leg_days
    }

    /// Assembly plus transit days.
    pub fn total_days(&self) -> u64 {
        self.assembly_days.saturating_add(self.transit_days)
    }

    /// Key dates of this plan when dispatched at `sent_at`.
    pub fn schedule(&self, sent_at: Timestamp) -> DispatchSchedule {
        let assembled_at = sent_at.plus_days(self.assembly_days);
        DispatchSchedule {
            sent_at,
            assembled_at,
            arrives_at: assembled_at.plus_days(self.transit_days),
        }
    }
}

/// Dates recorded when an order leaves for its buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSchedule {
    /// When the order was completed and dispatched.
    pub sent_at: Timestamp,
    /// When the last shop shipment reaches the nearest city.
    pub assembled_at: Timestamp,
    /// When the order reaches the buyer's city.
    pub arrives_at: Timestamp,
}
