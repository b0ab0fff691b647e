//! FIFO label-correcting shortest-path relaxation.
//!
//! # Algorithm
//!
//! Distance labels start unknown except `dist[source] = 0`. A FIFO queue
//! holds cities whose label changed. Popping `u`, every neighbor `v` with
//! weight `w` is relaxed: if `dist[v]` is unknown or exceeds
//! `dist[u] + w`, the label and predecessor are updated and `v` is queued
//! unless it is already waiting.
//!
//! This is the queue-based Bellman-Ford variant rather than a heap-based
//! Dijkstra. Callers that observe improvements as they happen (the nearest
//! supplying city search) depend on the order in which labels improve, so
//! the queue discipline is part of the contract.
//!
//! # Complexity
//!
//! O(V·E) worst case; typically close to O(E) on road-like graphs.
//! Weights are positive, so every label decreases a bounded number of
//! times and the loop terminates. Route weights are `u32` while labels are
//! `u64`, so a path over any number of maximal routes still fits.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::trace;

use crate::models::CityId;
use crate::network::Adjacency;

/// Distance labels and predecessor links from a single source city.
///
/// Predecessors are stored as a `CityId → CityId` map; following them from
/// any reached city leads back to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: CityId,
    dist: BTreeMap<CityId, u64>,
    pred: BTreeMap<CityId, CityId>,
}

impl ShortestPathTree {
    /// A tree that reached only its source.
    pub fn trivial(source: CityId) -> Self {
        Self {
            source,
            dist: BTreeMap::from([(source, 0)]),
            pred: BTreeMap::new(),
        }
    }

    /// The city the search started from.
    pub fn source(&self) -> CityId {
        self.source
    }

    /// Shortest distance in days from the source, if reached.
    pub fn distance(&self, city: CityId) -> Option<u64> {
        self.dist.get(&city).copied()
    }

    /// Previous city on the shortest path from the source to `city`.
    ///
    /// `None` for the source itself and for unreached cities.
    pub fn predecessor(&self, city: CityId) -> Option<CityId> {
        self.pred.get(&city).copied()
    }

    /// Returns `true` if `city` is reachable from the source.
    pub fn reaches(&self, city: CityId) -> bool {
        self.dist.contains_key(&city)
    }

    /// Reached cities with their distances, ascending by id.
    pub fn distances(&self) -> impl Iterator<Item = (CityId, u64)> + '_ {
        self.dist.iter().map(|(&c, &d)| (c, d))
    }

    /// Number of reached cities, the source included.
    pub fn num_reached(&self) -> usize {
        self.dist.len()
    }
}

/// Runs the relaxation from `source` over `routes`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{CityId, Route};
/// use u_dispatch::network::Adjacency;
/// use u_dispatch::search::relax_from;
///
/// let adj = Adjacency::from_routes(
///     [],
///     [
///         Route::new(CityId(1), CityId(2), 2).unwrap(),
///         Route::new(CityId(2), CityId(3), 3).unwrap(),
///         Route::new(CityId(1), CityId(3), 9).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// let tree = relax_from(&adj, CityId(1));
/// assert_eq!(tree.distance(CityId(3)), Some(5));
/// assert_eq!(tree.predecessor(CityId(3)), Some(CityId(2)));
/// ```
pub fn relax_from(routes: &Adjacency, source: CityId) -> ShortestPathTree {
    relax_with(routes, source, |_, _| {})
}

/// Runs the relaxation, calling `on_improve(city, distance)` every time a
/// city's label is set or lowered, in the order it happens.
pub fn relax_with<F>(routes: &Adjacency, source: CityId, mut on_improve: F) -> ShortestPathTree
where
    F: FnMut(CityId, u64),
{
    let mut tree = ShortestPathTree::trivial(source);
    let mut queue = VecDeque::from([source]);
    let mut scheduled = BTreeSet::from([source]);

    while let Some(u) = queue.pop_front() {
        scheduled.remove(&u);
        let Some(du) = tree.distance(u) else {
            continue;
        };

        for (v, w) in routes.neighbors(u) {
            let through = du.saturating_add(u64::from(w));
            let improves = tree.distance(v).map_or(true, |dv| dv > through);
            if !improves {
                continue;
            }

            tree.dist.insert(v, through);
            tree.pred.insert(v, u);
            trace!(city = %v, via = %u, days = through, "Label improved");
            on_improve(v, through);

            if scheduled.insert(v) {
                queue.push_back(v);
            }
        }
    }

    tree
}
