//! The city network consumed by the planner.
//!
//! - [`Adjacency`] — Symmetric weighted city graph
//! - [`GraphSource`] — Read interface over cities, routes, shops, and orders
//! - [`RetailNetwork`] — In-memory [`GraphSource`]
//! - [`generate_network`] — Random connected networks for simulation and testing

mod adjacency;
mod generator;
mod retail;
mod source;

pub use adjacency::Adjacency;
pub use generator::{generate_network, GeneratorConfig};
pub use retail::RetailNetwork;
pub use source::GraphSource;
