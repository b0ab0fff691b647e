//! Error types for network construction, dispatch planning, and tracking.

use thiserror::Error;

use crate::models::{CityId, OrderId, ShopId};

/// Errors raised while building a network or planning a dispatch.
///
/// Planning errors are caller-detectable preconditions. Planning is a pure
/// function of the graph and the order, so none of them is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No city in the network hosts a shop.
    #[error("no city in the network hosts a shop")]
    NoSupplyingCity,

    /// Shops exist, but none is reachable from the buyer's city.
    #[error("no supplying city is reachable from buyer city {buyer_city}")]
    UnreachableCity {
        /// The buyer's city.
        buyer_city: CityId,
    },

    /// A city the order draws from cannot ship to the nearest supplying city.
    #[error("shop city {shop_city} cannot reach assembly city {nearest_city}")]
    UnreachableShopCity {
        /// City of one of the order's shops.
        shop_city: CityId,
        /// City where the order is assembled.
        nearest_city: CityId,
    },

    /// The order has no items, so no shop city contributes to it.
    #[error("{order} has no items to ship")]
    EmptyOrderItemSet {
        /// The empty order.
        order: OrderId,
    },

    /// The city is not part of the network.
    #[error("unknown city {0}")]
    UnknownCity(CityId),

    /// The order is not known to the source.
    #[error("unknown order {0}")]
    UnknownOrder(OrderId),

    /// The shop is not known to the source.
    #[error("unknown shop {0}")]
    UnknownShop(ShopId),

    /// A city with this name already exists.
    #[error("city name already taken: {0}")]
    DuplicateCityName(String),

    /// The two cities are already connected.
    #[error("route between {a} and {b} already exists")]
    DuplicateRoute {
        /// First endpoint.
        a: CityId,
        /// Second endpoint.
        b: CityId,
    },

    /// Self-loop or zero-day route.
    #[error("invalid route {a} <-> {b} ({days} days)")]
    InvalidRoute {
        /// First endpoint.
        a: CityId,
        /// Second endpoint.
        b: CityId,
        /// Transit time in days.
        days: u32,
    },

    /// A stored dispatch plan whose path, legs, and totals disagree.
    #[error("inconsistent plan for {order}: {reason}")]
    InconsistentPlan {
        /// The planned order.
        order: OrderId,
        /// What does not line up.
        reason: &'static str,
    },

    /// The order already has a dispatch plan.
    #[error("{0} was already dispatched")]
    AlreadyDispatched(OrderId),
}
