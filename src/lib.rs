//! # u-dispatch
//!
//! Logistics core of a multi-shop retail network: buyers order articles
//! that travel from shop cities to the buyer's city over a weighted city
//! graph, with route weights measured in days.
//!
//! For each dispatched order the planner finds the supplying city nearest
//! to the buyer, the time needed to gather every shop's stock there, and
//! the path on to the buyer. The resulting plan later answers "where is
//! this order now" at any simulated time.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (ids, routes, timestamps, dispatch plans)
//! - [`network`] — City graph, the graph source trait, in-memory and random networks
//! - [`search`] — Label-correcting shortest paths, nearest city, assembly time, path building
//! - [`dispatch`] — Dispatch planning and the transit locator
//! - [`clock`] — Simulated clock advancing in whole days
//! - [`tracking`] — Order lifecycle bookkeeping on top of the planner
//! - [`error`] — Error type shared by all modules

pub mod clock;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod network;
pub mod search;
pub mod tracking;
