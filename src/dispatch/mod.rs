//! Dispatch planning and in-transit location.
//!
//! [`plan_dispatch`] runs once per order and yields an immutable
//! [`DispatchPlan`](crate::models::DispatchPlan). [`locate_order`] answers
//! later "where is my order" queries from that plan alone, without
//! searching the graph again.

mod locator;
mod planner;

pub use locator::{locate_order, locate_waypoint};
pub use planner::{plan_dispatch, plan_order};
