//! Order lifecycle state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an order stands in its lifecycle.
///
/// Orders start as `Created`, become `Sent` once dispatched, and turn
/// `Arrived` when the simulated clock passes their arrival date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Still being filled; no dispatch plan exists.
    Created,
    /// Dispatched and on its way (assembling or in transit).
    Sent,
    /// Delivered to the buyer's city.
    Arrived,
}

impl OrderStatus {
    /// Returns `true` once the order has a dispatch plan.
    pub fn is_dispatched(&self) -> bool {
        !matches!(self, OrderStatus::Created)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Created => "created",
            OrderStatus::Sent => "sent",
            OrderStatus::Arrived => "arrived",
        };
        f.write_str(s)
    }
}
