//! Shortest-path searches behind dispatch planning.
//!
//! - [`relax_from`] / [`relax_with`] — FIFO label-correcting relaxation
//! - [`resolve_nearest`] — Supplying city closest to the buyer
//! - [`assembly_days`] — Time to gather an order at the nearest city
//! - [`build_path`] — Waypoints from the nearest city to the buyer

mod assembly;
mod nearest;
mod path;
mod relaxation;

pub use assembly::{assembly_days, Assembly};
pub use nearest::{resolve_nearest, NearestSupply};
pub use path::{build_path, TransitPath};
pub use relaxation::{relax_from, relax_with, ShortestPathTree};
