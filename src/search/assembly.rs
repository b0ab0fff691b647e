//! Assembly time at the nearest supplying city.
//!
//! An order can only leave the nearest city once stock from every shop it
//! draws on has arrived there. Shipments travel in parallel, so assembly
//! takes as long as the slowest one: the maximum, not the sum, of the
//! shortest distances from the nearest city to each shop city. Stock
//! already in the nearest city contributes nothing.

use std::collections::BTreeSet;

use super::relaxation::relax_from;
use crate::error::DispatchError;
use crate::models::CityId;
use crate::network::Adjacency;

/// Assembly estimate for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assembly {
    /// Days until the last shipment reaches the nearest city.
    pub days: u64,
    /// Shop city whose shipment arrives last; `None` when all stock is
    /// already in the nearest city.
    pub slowest_city: Option<CityId>,
}

/// Computes how long it takes to gather an order at `nearest_city`.
///
/// # Errors
///
/// [`DispatchError::UnreachableShopCity`] if some shop city has no route to
/// the nearest city.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_dispatch::models::{CityId, Route};
/// use u_dispatch::network::Adjacency;
/// use u_dispatch::search::assembly_days;
///
/// let adj = Adjacency::from_routes(
///     [],
///     [
///         Route::new(CityId(1), CityId(2), 2).unwrap(),
///         Route::new(CityId(1), CityId(3), 5).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// let shop_cities = BTreeSet::from([CityId(1), CityId(2), CityId(3)]);
/// let a = assembly_days(&adj, CityId(1), &shop_cities).unwrap();
/// assert_eq!(a.days, 5);
/// assert_eq!(a.slowest_city, Some(CityId(3)));
/// ```
pub fn assembly_days(
    routes: &Adjacency,
    nearest_city: CityId,
    shop_cities: &BTreeSet<CityId>,
) -> Result<Assembly, DispatchError> {
    let mut assembly = Assembly {
        days: 0,
        slowest_city: None,
    };
    if shop_cities.iter().all(|&c| c == nearest_city) {
        return Ok(assembly);
    }

    let tree = relax_from(routes, nearest_city);
    for &shop_city in shop_cities {
        if shop_city == nearest_city {
            continue;
        }
        let days = tree
            .distance(shop_city)
            .ok_or(DispatchError::UnreachableShopCity {
                shop_city,
                nearest_city,
            })?;
        if days > assembly.days {
            assembly = Assembly {
                days,
                slowest_city: Some(shop_city),
            };
        }
    }

    Ok(assembly)
}
