//! Transit locator: where an order is at a given simulated time.
//!
//! The order sits in the nearest city until assembly completes, then moves
//! along its planned path one route at a time. Positions are reported as
//! discrete waypoints: while a route is being traversed the order is still
//! "at" the city it left. Locating is a pure function of the plan and the
//! timestamps, so repeated queries with the same inputs agree.

use crate::models::{CityId, DispatchPlan, Timestamp};

/// Index into [`DispatchPlan::path`] of the order's current waypoint.
///
/// `dispatched_at` is when the plan was created; `arrived` is the
/// order-management side's delivery flag. Timestamps before assembly
/// completes (including ones before dispatch) clamp to index 0.
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatch::{locate_waypoint, plan_dispatch};
/// use u_dispatch::models::Timestamp;
/// use u_dispatch::network::RetailNetwork;
///
/// let mut net = RetailNetwork::new();
/// let a = net.add_city("A").unwrap();
/// let b = net.add_city("B").unwrap();
/// let c = net.add_city("C").unwrap();
/// net.connect_cities(a, b, 2).unwrap();
/// net.connect_cities(b, c, 3).unwrap();
/// let shop = net.add_shop(c).unwrap();
/// let order = net.add_order(a).unwrap();
/// net.add_item(order, shop).unwrap();
/// let plan = plan_dispatch(&net, a, order).unwrap();
///
/// let sent = Timestamp::from_days(0);
/// assert_eq!(locate_waypoint(&plan, sent, Timestamp::from_days(2), false), 0);
/// assert_eq!(locate_waypoint(&plan, sent, Timestamp::from_days(4), false), 1);
/// assert_eq!(locate_waypoint(&plan, sent, Timestamp::from_days(5), true), 2);
/// ```
pub fn locate_waypoint(
    plan: &DispatchPlan,
    dispatched_at: Timestamp,
    now: Timestamp,
    arrived: bool,
) -> usize {
    let last = plan.path().len().saturating_sub(1);
    let assembled_at = dispatched_at.plus_days(plan.assembly_days());
    let elapsed = now.whole_days_since(assembled_at);

    if arrived && u64::try_from(elapsed).is_ok_and(|e| e >= plan.transit_days()) {
        return last;
    }
    if elapsed <= 0 {
        return 0;
    }

    let mut remaining = elapsed.unsigned_abs();
    let mut index = 0;
    for &days in plan.leg_days() {
        let days = u64::from(days);
        if days > remaining {
            break;
        }
        remaining -= days;
        index += 1;
    }
    index.min(last)
}

/// City the order is in at `now`.
///
/// Assembling orders are in the nearest city, delivered ones in the
/// buyer's city, and orders in transit at the last waypoint they reached.
/// Never fails for a plan produced by the planner.
pub fn locate_order(
    plan: &DispatchPlan,
    dispatched_at: Timestamp,
    now: Timestamp,
    arrived: bool,
) -> CityId {
    let index = locate_waypoint(plan, dispatched_at, now, arrived);
    plan.path()
        .get(index)
        .copied()
        .unwrap_or_else(|| plan.buyer_city())
}
