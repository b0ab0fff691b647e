//! In-memory retail network: cities, routes, shops, and orders.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::{Adjacency, GraphSource};
use crate::error::DispatchError;
use crate::models::{CityId, OrderId, Route, ShopId};

#[derive(Debug, Clone)]
struct OrderSheet {
    buyer_city: CityId,
    shops: BTreeSet<ShopId>,
}

/// A complete in-memory [`GraphSource`].
///
/// Ids are assigned sequentially from 1, per entity kind. City names are
/// unique and at most one route joins any pair of cities.
///
/// # Examples
///
/// ```
/// use u_dispatch::network::{GraphSource, RetailNetwork};
///
/// let mut net = RetailNetwork::new();
/// let a = net.add_city("Novi Sad").unwrap();
/// let b = net.add_city("Beograd").unwrap();
/// net.connect_cities(a, b, 1).unwrap();
/// net.add_shop(b).unwrap();
///
/// assert!(net.add_city("Beograd").is_err());
/// assert!(net.has_shop(b));
/// assert_eq!(net.connected_cities(a), vec![b]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetailNetwork {
    names: BTreeMap<CityId, String>,
    routes: Adjacency,
    shops: BTreeMap<ShopId, CityId>,
    orders: BTreeMap<OrderId, OrderSheet>,
}

impl RetailNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city with a unique name and returns its id.
    pub fn add_city(&mut self, name: impl Into<String>) -> Result<CityId, DispatchError> {
        let name = name.into();
        if self.names.values().any(|n| *n == name) {
            return Err(DispatchError::DuplicateCityName(name));
        }
        let id = CityId(next_id(self.names.keys().map(|c| c.0)));
        self.routes.add_city(id);
        debug!(city = %id, %name, "City added");
        self.names.insert(id, name);
        Ok(id)
    }

    /// Name of a city.
    pub fn city_name(&self, city: CityId) -> Option<&str> {
        self.names.get(&city).map(String::as_str)
    }

    /// Joins two existing cities with a route of `days` transit time.
    pub fn connect_cities(
        &mut self,
        a: CityId,
        b: CityId,
        days: u32,
    ) -> Result<Route, DispatchError> {
        self.require_city(a)?;
        self.require_city(b)?;
        let route = Route::new(a, b, days)?;
        self.routes.insert(route)?;
        debug!(%a, %b, days, "Cities connected");
        Ok(route)
    }

    /// Cities directly connected to `city`, ascending by id.
    pub fn connected_cities(&self, city: CityId) -> Vec<CityId> {
        self.routes.neighbors(city).map(|(c, _)| c).collect()
    }

    /// Opens a shop in an existing city.
    pub fn add_shop(&mut self, city: CityId) -> Result<ShopId, DispatchError> {
        self.require_city(city)?;
        let id = ShopId(next_id(self.shops.keys().map(|s| s.0)));
        self.shops.insert(id, city);
        debug!(shop = %id, %city, "Shop added");
        Ok(id)
    }

    /// Shops located in `city`, ascending by id.
    pub fn shops_in(&self, city: CityId) -> Vec<ShopId> {
        self.shops
            .iter()
            .filter(|&(_, &c)| c == city)
            .map(|(&s, _)| s)
            .collect()
    }

    /// City of a shop.
    pub fn shop_city(&self, shop: ShopId) -> Result<CityId, DispatchError> {
        self.shops
            .get(&shop)
            .copied()
            .ok_or(DispatchError::UnknownShop(shop))
    }

    /// Opens an empty order for a buyer living in `buyer_city`.
    pub fn add_order(&mut self, buyer_city: CityId) -> Result<OrderId, DispatchError> {
        self.require_city(buyer_city)?;
        let id = OrderId(next_id(self.orders.keys().map(|o| o.0)));
        self.orders.insert(
            id,
            OrderSheet {
                buyer_city,
                shops: BTreeSet::new(),
            },
        );
        Ok(id)
    }

    /// Adds an item sourced from `shop` to the order.
    ///
    /// Several items from one shop count once.
    pub fn add_item(&mut self, order: OrderId, shop: ShopId) -> Result<(), DispatchError> {
        self.shop_city(shop)?;
        let sheet = self
            .orders
            .get_mut(&order)
            .ok_or(DispatchError::UnknownOrder(order))?;
        sheet.shops.insert(shop);
        Ok(())
    }

    fn require_city(&self, city: CityId) -> Result<(), DispatchError> {
        if self.names.contains_key(&city) {
            Ok(())
        } else {
            Err(DispatchError::UnknownCity(city))
        }
    }
}

impl GraphSource for RetailNetwork {
    fn cities(&self) -> BTreeSet<CityId> {
        self.names.keys().copied().collect()
    }

    fn routes(&self) -> Adjacency {
        self.routes.clone()
    }

    fn has_shop(&self, city: CityId) -> bool {
        self.shops.values().any(|&c| c == city)
    }

    fn shop_cities_for_order(&self, order: OrderId) -> Result<BTreeSet<CityId>, DispatchError> {
        let sheet = self
            .orders
            .get(&order)
            .ok_or(DispatchError::UnknownOrder(order))?;
        sheet.shops.iter().map(|&s| self.shop_city(s)).collect()
    }

    fn buyer_city_of(&self, order: OrderId) -> Result<CityId, DispatchError> {
        self.orders
            .get(&order)
            .map(|s| s.buyer_city)
            .ok_or(DispatchError::UnknownOrder(order))
    }
}

fn next_id(existing: impl Iterator<Item = u32>) -> u32 {
    existing.max().map_or(1, |m| m + 1)
}
