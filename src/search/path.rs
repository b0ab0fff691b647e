//! Path reconstruction from predecessor links.

use super::relaxation::ShortestPathTree;
use crate::error::DispatchError;
use crate::models::CityId;
use crate::network::Adjacency;

/// Cities an order passes through, with the transit days of each leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitPath {
    /// Waypoints from the departure city to the destination, inclusive.
    pub cities: Vec<CityId>,
    /// `leg_days[i]` is the weight of the route `cities[i]`–`cities[i + 1]`.
    pub leg_days: Vec<u32>,
}

impl TransitPath {
    /// Sum of all leg weights.
    pub fn total_days(&self) -> u64 {
        self.leg_days.iter().map(|&d| u64::from(d)).sum()
    }
}

/// Walks predecessor links from `from` back to the tree's source.
///
/// The tree must be rooted at the destination (the buyer's city); the
/// returned path starts at `from` and ends at the root. Starting at the
/// root yields the single-city path.
///
/// # Errors
///
/// [`DispatchError::UnreachableCity`] if `from` was not reached by the
/// search.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{CityId, Route};
/// use u_dispatch::network::Adjacency;
/// use u_dispatch::search::{build_path, relax_from};
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
/// let tree = relax_from(&adj, CityId(1));
/// let path = build_path(&adj, &tree, CityId(3)).unwrap();
/// assert_eq!(path.cities, vec![CityId(3), CityId(2), CityId(1)]);
/// assert_eq!(path.leg_days, vec![3, 2]);
/// ```
pub fn build_path(
    routes: &Adjacency,
    tree: &ShortestPathTree,
    from: CityId,
) -> Result<TransitPath, DispatchError> {
    let root = tree.source();
    let unreachable = DispatchError::UnreachableCity { buyer_city: root };
    if !tree.reaches(from) {
        return Err(unreachable);
    }

    let mut cities = vec![from];
    let mut leg_days = Vec::new();
    let mut current = from;
    while current != root {
        // A chain longer than the tree would mean a predecessor cycle.
        if cities.len() > tree.num_reached() {
            return Err(unreachable);
        }
        let next = tree.predecessor(current).ok_or(unreachable.clone())?;
        let days = routes.days(current, next).ok_or(unreachable.clone())?;
        cities.push(next);
        leg_days.push(days);
        current = next;
    }

    Ok(TransitPath { cities, leg_days })
}
