//! Sparse symmetric adjacency of the city graph.

use std::collections::BTreeMap;

use crate::error::DispatchError;
use crate::models::{CityId, Route};

/// Undirected weighted city graph stored as nested ordered maps.
///
/// `edges[a][b]` is the transit time in days between `a` and `b`; every
/// route is stored in both directions. Neighbors are visited in ascending
/// id order, which makes shortest-path tie-breaks reproducible.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{CityId, Route};
/// use u_dispatch::network::Adjacency;
///
/// let mut adj = Adjacency::new();
/// adj.insert(Route::new(CityId(1), CityId(2), 2).unwrap()).unwrap();
/// adj.insert(Route::new(CityId(2), CityId(3), 3).unwrap()).unwrap();
/// assert_eq!(adj.days(CityId(2), CityId(1)), Some(2));
/// assert_eq!(adj.num_routes(), 2);
/// assert!(adj.is_symmetric());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    edges: BTreeMap<CityId, BTreeMap<CityId, u32>>,
}

impl Adjacency {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a city roster and a route list.
    ///
    /// Cities without routes are kept as isolated vertices.
    pub fn from_routes<C, R>(cities: C, routes: R) -> Result<Self, DispatchError>
    where
        C: IntoIterator<Item = CityId>,
        R: IntoIterator<Item = Route>,
    {
        let mut adj = Self::new();
        for city in cities {
            adj.add_city(city);
        }
        for route in routes {
            adj.insert(route)?;
        }
        Ok(adj)
    }

    /// Adds an isolated city. No-op if it is already present.
    pub fn add_city(&mut self, city: CityId) {
        self.edges.entry(city).or_default();
    }

    /// Inserts a route in both directions, adding missing endpoints.
    ///
    /// Fails with [`DispatchError::DuplicateRoute`] if the pair is already
    /// connected.
    pub fn insert(&mut self, route: Route) -> Result<(), DispatchError> {
        let (a, b) = route.endpoints();
        if self.days(a, b).is_some() {
            return Err(DispatchError::DuplicateRoute { a, b });
        }
        self.edges.entry(a).or_default().insert(b, route.days());
        self.edges.entry(b).or_default().insert(a, route.days());
        Ok(())
    }

    /// Transit days between two directly connected cities.
    pub fn days(&self, from: CityId, to: CityId) -> Option<u32> {
        self.edges.get(&from).and_then(|n| n.get(&to)).copied()
    }

    /// Direct neighbors of `city` with their transit days, ascending by id.
    ///
    /// Empty for unknown or isolated cities.
    pub fn neighbors(&self, city: CityId) -> impl Iterator<Item = (CityId, u32)> + '_ {
        self.edges
            .get(&city)
            .into_iter()
            .flat_map(|n| n.iter().map(|(&c, &d)| (c, d)))
    }

    /// Returns `true` if the city is a vertex of this graph.
    pub fn contains(&self, city: CityId) -> bool {
        self.edges.contains_key(&city)
    }

    /// All cities, ascending by id.
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        self.edges.keys().copied()
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.edges.len()
    }

    /// Number of undirected routes.
    pub fn num_routes(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Every route once, ordered by its lower endpoint.
    pub fn routes(&self) -> Vec<Route> {
        let mut out = Vec::with_capacity(self.num_routes());
        for (&a, neighbors) in &self.edges {
            for (&b, &days) in neighbors.range(a..) {
                if let Ok(route) = Route::new(a, b, days) {
                    out.push(route);
                }
            }
        }
        out
    }

    /// Returns `true` if every edge has an equal-weight reverse edge.
    pub fn is_symmetric(&self) -> bool {
        self.edges.iter().all(|(&a, neighbors)| {
            neighbors
                .iter()
                .all(|(&b, &days)| self.days(b, a) == Some(days))
        })
    }
}
