//! Domain model types for retail order dispatch.
//!
//! Cities are plain identifiers joined by undirected routes weighted in
//! transit days. A dispatch plan records, once per order, where the order
//! is assembled, how long assembly takes, and the path it then travels to
//! the buyer.

mod ids;
mod order;
mod plan;
mod route;
mod time;

pub use ids::{CityId, OrderId, ShopId};
pub use order::OrderStatus;
pub use plan::{DispatchPlan, DispatchSchedule};
pub use route::Route;
pub use time::{Timestamp, SECONDS_PER_DAY};
