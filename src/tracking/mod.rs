//! Order-side tracking of dispatched shipments.
//!
//! [`ShipmentTracker`] plays the order-management role around the planner:
//! it plans each order once, stamps its schedule with the simulated clock,
//! flips orders to arrived as time advances, and answers location queries.

mod tracker;

pub use tracker::{Shipment, ShipmentTracker};
