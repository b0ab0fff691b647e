//! Graph source trait.

use std::collections::BTreeSet;

use super::Adjacency;
use crate::error::DispatchError;
use crate::models::{CityId, OrderId};

/// Read access to the city network and the orders placed on it.
///
/// This is the only interface the planner consumes. Storage-backed
/// implementations answer from their tables; [`RetailNetwork`] answers from
/// memory. [`routes`](Self::routes) returns an owned snapshot so one
/// planning call never observes another writer's changes.
///
/// [`RetailNetwork`]: super::RetailNetwork
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_dispatch::error::DispatchError;
/// use u_dispatch::models::{CityId, OrderId, Route};
/// use u_dispatch::network::{Adjacency, GraphSource};
///
/// struct TwoCities;
///
/// impl GraphSource for TwoCities {
///     fn cities(&self) -> BTreeSet<CityId> { [CityId(1), CityId(2)].into() }
///     fn routes(&self) -> Adjacency {
///         Adjacency::from_routes(self.cities(), [Route::new(CityId(1), CityId(2), 3).unwrap()])
///             .unwrap()
///     }
///     fn has_shop(&self, city: CityId) -> bool { city == CityId(2) }
///     fn shop_cities_for_order(&self, _: OrderId) -> Result<BTreeSet<CityId>, DispatchError> {
///         Ok([CityId(2)].into())
///     }
///     fn buyer_city_of(&self, _: OrderId) -> Result<CityId, DispatchError> { Ok(CityId(1)) }
/// }
///
/// assert_eq!(TwoCities.supplying_cities(), vec![CityId(2)]);
/// ```
pub trait GraphSource {
    /// The city roster.
    fn cities(&self) -> BTreeSet<CityId>;

    /// Symmetric weighted adjacency of all routes.
    fn routes(&self) -> Adjacency;

    /// Returns `true` if at least one shop resides in `city`.
    fn has_shop(&self, city: CityId) -> bool;

    /// Distinct cities of the shops the order's items are drawn from.
    fn shop_cities_for_order(&self, order: OrderId) -> Result<BTreeSet<CityId>, DispatchError>;

    /// City of the buyer who placed the order.
    fn buyer_city_of(&self, order: OrderId) -> Result<CityId, DispatchError>;

    /// All cities hosting at least one shop, ascending by id.
    fn supplying_cities(&self) -> Vec<CityId> {
        self.cities()
            .into_iter()
            .filter(|&c| self.has_shop(c))
            .collect()
    }
}
