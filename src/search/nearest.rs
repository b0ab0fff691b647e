//! Nearest supplying city resolution.
//!
//! Runs the label-correcting relaxation from the buyer's city and watches
//! labels as they improve. A supplying city becomes the candidate whenever
//! its freshly improved distance is strictly below the best seen so far,
//! so among equally distant supplying cities the one whose label improved
//! first wins. When the buyer's own city hosts a shop no traversal runs.

use tracing::debug;

use super::relaxation::{relax_with, ShortestPathTree};
use crate::error::DispatchError;
use crate::models::CityId;
use crate::network::Adjacency;

/// Result of the nearest supplying city search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestSupply {
    /// The supplying city closest to the buyer.
    pub city: CityId,
    /// Days from the buyer's city to [`city`](Self::city).
    pub distance: u64,
    /// Search tree rooted at the buyer's city.
    pub tree: ShortestPathTree,
}

/// Finds the supplying city closest to `buyer_city`.
///
/// `supplies(city)` tells whether a city hosts at least one shop.
///
/// # Errors
///
/// - [`DispatchError::UnknownCity`] if the buyer's city is not in the graph
/// - [`DispatchError::NoSupplyingCity`] if no city supplies anything
/// - [`DispatchError::UnreachableCity`] if no supplying city is reachable
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{CityId, Route};
/// use u_dispatch::network::Adjacency;
/// use u_dispatch::search::resolve_nearest;
///
/// let adj = Adjacency::from_routes(
///     [],
///     [
///         Route::new(CityId(1), CityId(2), 2).unwrap(),
///         Route::new(CityId(2), CityId(3), 3).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// let nearest = resolve_nearest(&adj, CityId(1), |c| c == CityId(3)).unwrap();
/// assert_eq!(nearest.city, CityId(3));
/// assert_eq!(nearest.distance, 5);
/// ```
pub fn resolve_nearest<F>(
    routes: &Adjacency,
    buyer_city: CityId,
    supplies: F,
) -> Result<NearestSupply, DispatchError>
where
    F: Fn(CityId) -> bool,
{
    if !routes.contains(buyer_city) {
        return Err(DispatchError::UnknownCity(buyer_city));
    }

    if supplies(buyer_city) {
        debug!(%buyer_city, "Buyer city hosts a shop");
        return Ok(NearestSupply {
            city: buyer_city,
            distance: 0,
            tree: ShortestPathTree::trivial(buyer_city),
        });
    }

    let mut best: Option<(CityId, u64)> = None;
    let tree = relax_with(routes, buyer_city, |city, distance| {
        let closer = best.map_or(true, |(_, d)| distance < d);
        if closer && supplies(city) {
            best = Some((city, distance));
        }
    });

    match best {
        Some((city, distance)) => {
            debug!(%buyer_city, nearest_city = %city, distance, "Nearest supplying city");
            Ok(NearestSupply {
                city,
                distance,
                tree,
            })
        }
        None if routes.cities().any(&supplies) => {
            Err(DispatchError::UnreachableCity { buyer_city })
        }
        None => Err(DispatchError::NoSupplyingCity),
    }
}
