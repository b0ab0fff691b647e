//! Shipment tracker: dispatches orders and follows them over simulated time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::{SimClock, SimulatedClock};
use crate::dispatch::{locate_order, plan_order};
use crate::error::DispatchError;
use crate::models::{CityId, DispatchPlan, DispatchSchedule, OrderId, OrderStatus, Timestamp};
use crate::network::GraphSource;

/// A dispatched order: its plan, key dates, and delivery state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    plan: DispatchPlan,
    schedule: DispatchSchedule,
    status: OrderStatus,
}

impl Shipment {
    /// The dispatch plan, fixed at dispatch time.
    pub fn plan(&self) -> &DispatchPlan {
        &self.plan
    }

    /// Sent, assembled, and arrival dates.
    pub fn schedule(&self) -> &DispatchSchedule {
        &self.schedule
    }

    /// `Sent` until the clock passes the arrival date, then `Arrived`.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// City the order is in at `now`.
    pub fn location_at(&self, now: Timestamp) -> CityId {
        locate_order(
            &self.plan,
            self.schedule.sent_at,
            now,
            self.status == OrderStatus::Arrived,
        )
    }
}

/// Order-side bookkeeping for dispatched orders under one simulated clock.
///
/// Orders the tracker has never dispatched are reported as
/// [`OrderStatus::Created`]. Each order is planned exactly once; its plan
/// never changes afterwards.
///
/// # Examples
///
/// ```
/// use u_dispatch::clock::SimulatedClock;
/// use u_dispatch::models::{OrderStatus, Timestamp};
/// use u_dispatch::network::RetailNetwork;
/// use u_dispatch::tracking::ShipmentTracker;
///
/// let mut net = RetailNetwork::new();
/// let a = net.add_city("A").unwrap();
/// let b = net.add_city("B").unwrap();
/// net.connect_cities(a, b, 3).unwrap();
/// let shop = net.add_shop(b).unwrap();
/// let order = net.add_order(a).unwrap();
/// net.add_item(order, shop).unwrap();
///
/// let mut tracker = ShipmentTracker::new(SimulatedClock::starting_at(Timestamp::from_days(0)));
/// assert_eq!(tracker.location(order), None);
///
/// tracker.dispatch(&net, order).unwrap();
/// assert_eq!(tracker.location(order), Some(b));
///
/// tracker.advance_days(3);
/// assert_eq!(tracker.status(order), OrderStatus::Arrived);
/// assert_eq!(tracker.location(order), Some(a));
/// assert_eq!(tracker.received_time(order), Some(Timestamp::from_days(3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShipmentTracker<C = SimulatedClock> {
    clock: C,
    shipments: BTreeMap<OrderId, Shipment>,
}

impl<C: SimClock> ShipmentTracker<C> {
    /// Creates a tracker driven by `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            shipments: BTreeMap::new(),
        }
    }

    /// The clock driving this tracker.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current simulated time.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Resets the simulation epoch.
    pub fn set_initial_time(&mut self, now: Timestamp) {
        self.clock.set_initial_time(now);
    }

    /// Plans `order` against `source` and records it as sent now.
    ///
    /// # Errors
    ///
    /// [`DispatchError::AlreadyDispatched`] on a second dispatch of the same
    /// order, or any planning error.
    pub fn dispatch<S>(&mut self, source: &S, order: OrderId) -> Result<&Shipment, DispatchError>
    where
        S: GraphSource + ?Sized,
    {
        if self.status(order).is_dispatched() {
            return Err(DispatchError::AlreadyDispatched(order));
        }

        let plan = plan_order(source, order)?;
        let schedule = plan.schedule(self.clock.now());
        info!(
            %order,
            sent_at = schedule.sent_at.seconds(),
            arrives_at = schedule.arrives_at.seconds(),
            "Order sent"
        );

        let shipment = self.shipments.entry(order).or_insert(Shipment {
            plan,
            schedule,
            status: OrderStatus::Sent,
        });
        Ok(shipment)
    }

    /// Advances the clock and marks every shipment due by then as arrived.
    ///
    /// Returns the new time.
    pub fn advance_days(&mut self, days: u32) -> Timestamp {
        let now = self.clock.advance_days(days);
        for (order, shipment) in &mut self.shipments {
            if shipment.status == OrderStatus::Sent && shipment.schedule.arrives_at <= now {
                shipment.status = OrderStatus::Arrived;
                info!(%order, city = %shipment.plan.buyer_city(), "Order arrived");
            }
        }
        now
    }

    /// Lifecycle state of `order`.
    pub fn status(&self, order: OrderId) -> OrderStatus {
        self.shipments
            .get(&order)
            .map_or(OrderStatus::Created, Shipment::status)
    }

    /// The shipment recorded for `order`, if dispatched.
    pub fn shipment(&self, order: OrderId) -> Option<&Shipment> {
        self.shipments.get(&order)
    }

    /// All dispatched orders, ascending by id.
    pub fn shipments(&self) -> impl Iterator<Item = (OrderId, &Shipment)> {
        self.shipments.iter().map(|(&o, s)| (o, s))
    }

    /// City the order is in right now; `None` before dispatch.
    pub fn location(&self, order: OrderId) -> Option<CityId> {
        let now = self.clock.now();
        self.shipments.get(&order).map(|s| s.location_at(now))
    }

    /// When the order was dispatched.
    pub fn sent_time(&self, order: OrderId) -> Option<Timestamp> {
        self.shipments.get(&order).map(|s| s.schedule.sent_at)
    }

    /// When the order reached the buyer; `None` until it has arrived.
    pub fn received_time(&self, order: OrderId) -> Option<Timestamp> {
        self.shipments
            .get(&order)
            .filter(|s| s.status == OrderStatus::Arrived)
            .map(|s| s.schedule.arrives_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SECONDS_PER_DAY;
    use crate::network::RetailNetwork;

    /// A–B (2), B–C (3); shops in C and D, D hangs off C at 4 days.
    fn network() -> (RetailNetwork, [CityId; 4], OrderId) {
        let mut net = RetailNetwork::new();
        let a = net.add_city("A").expect("city");
        let b = net.add_city("B").expect("city");
        let c = net.add_city("C").expect("city");
        let d = net.add_city("D").expect("city");
        net.connect_cities(a, b, 2).expect("route");
        net.connect_cities(b, c, 3).expect("route");
        net.connect_cities(c, d, 4).expect("route");
        let s_c = net.add_shop(c).expect("shop");
        let s_d = net.add_shop(d).expect("shop");
        let order = net.add_order(a).expect("order");
        net.add_item(order, s_c).expect("item");
        net.add_item(order, s_d).expect("item");
        (net, [a, b, c, d], order)
    }

    /// Starts at noon and remembers every advance.
    #[derive(Debug)]
    struct RecordingClock {
        now: Timestamp,
        advances: Vec<u32>,
    }

    impl SimClock for RecordingClock {
        fn now(&self) -> Timestamp {
            self.now
        }

        fn set_initial_time(&mut self, now: Timestamp) {
            self.now = now;
        }

        fn advance_days(&mut self, days: u32) -> Timestamp {
            self.advances.push(days);
            self.now = self.now.plus_days(u64::from(days));
            self.now
        }
    }

    fn tracker() -> ShipmentTracker {
        ShipmentTracker::new(SimulatedClock::starting_at(Timestamp::from_days(0)))
    }

    #[test]
    fn test_created_before_dispatch() {
        let (_, _, order) = network();
        let t = tracker();
        assert_eq!(t.status(order), OrderStatus::Created);
        assert_eq!(t.location(order), None);
        assert_eq!(t.sent_time(order), None);
        assert_eq!(t.received_time(order), None);
    }

    #[test]
    fn test_dispatch_records_schedule() {
        let (net, [_, _, c, _], order) = network();
        let mut t = tracker();
        t.advance_days(1);
        let shipment = t.dispatch(&net, order).expect("planned");
        assert_eq!(shipment.plan().nearest_city(), c);
        assert_eq!(shipment.plan().assembly_days(), 4);
        assert_eq!(shipment.schedule().sent_at, Timestamp::from_days(1));
        assert_eq!(shipment.schedule().assembled_at, Timestamp::from_days(5));
        assert_eq!(shipment.schedule().arrives_at, Timestamp::from_days(10));
        assert_eq!(t.status(order), OrderStatus::Sent);
        assert_eq!(t.sent_time(order), Some(Timestamp::from_days(1)));
    }

    #[test]
    fn test_dispatch_twice_rejected() {
        let (net, _, order) = network();
        let mut t = tracker();
        t.dispatch(&net, order).expect("planned");
        assert_eq!(
            t.dispatch(&net, order).map(|_| ()),
            Err(DispatchError::AlreadyDispatched(order))
        );
    }

    #[test]
    fn test_location_over_time() {
        let (net, [a, b, c, _], order) = network();
        let mut t = tracker();
        t.dispatch(&net, order).expect("planned");

        // Assembling in C for four days, then C → B (3) → A (2).
        let mut seen = Vec::new();
        for _ in 0..10 {
            seen.push(t.location(order).expect("dispatched"));
            t.advance_days(1);
        }
        seen.push(t.location(order).expect("dispatched"));
        assert_eq!(seen, vec![c, c, c, c, c, c, c, b, b, a, a]);
        assert_eq!(t.status(order), OrderStatus::Arrived);
        assert_eq!(t.received_time(order), Some(Timestamp::from_days(9)));
    }

    #[test]
    fn test_arrival_flips_only_when_due() {
        let (net, _, order) = network();
        let mut t = tracker();
        t.dispatch(&net, order).expect("planned");
        t.advance_days(8);
        assert_eq!(t.status(order), OrderStatus::Sent);
        assert_eq!(t.received_time(order), None);
        t.advance_days(1);
        assert_eq!(t.status(order), OrderStatus::Arrived);
    }

    #[test]
    fn test_runs_on_any_clock() {
        let (net, [a, _, c, _], order) = network();
        let noon = Timestamp::from_days(0).plus_seconds(SECONDS_PER_DAY / 2);
        let mut t = ShipmentTracker::new(RecordingClock {
            now: noon,
            advances: Vec::new(),
        });
        t.dispatch(&net, order).expect("planned");
        assert_eq!(t.location(order), Some(c));

        t.advance_days(8);
        assert_eq!(t.status(order), OrderStatus::Sent);
        t.advance_days(1);
        assert_eq!(t.status(order), OrderStatus::Arrived);
        assert_eq!(t.location(order), Some(a));
        assert_eq!(t.received_time(order), Some(noon.plus_days(9)));
        assert_eq!(t.clock().advances, vec![8, 1]);
    }

    #[test]
    fn test_dispatch_twice_rejected_after_arrival() {
        let (net, _, order) = network();
        let mut t = tracker();
        t.dispatch(&net, order).expect("planned");
        t.advance_days(20);
        assert_eq!(t.status(order), OrderStatus::Arrived);
        assert_eq!(
            t.dispatch(&net, order).map(|_| ()),
            Err(DispatchError::AlreadyDispatched(order))
        );
    }

    #[test]
    fn test_failed_dispatch_not_recorded() {
        let (mut net, [a, _, _, _], _) = network();
        let empty = net.add_order(a).expect("order");
        let mut t = tracker();
        assert!(t.dispatch(&net, empty).is_err());
        assert_eq!(t.status(empty), OrderStatus::Created);
        assert_eq!(t.shipments().count(), 0);
    }
}
