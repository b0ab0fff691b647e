//! Random connected retail networks.
//!
//! # Algorithm
//!
//! 1. City `i` (for `i ≥ 2`) joins a uniformly chosen earlier city, which
//!    yields a random spanning tree and guarantees connectivity.
//! 2. Up to `extra_routes` further routes join random unconnected pairs,
//!    never more than the pairs the spanning tree left open.
//! 3. Each city opens a shop with probability `shop_probability`; if none
//!    did, one random city gets a shop.
//!
//! Route weights are uniform in `1..=max_days`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::RetailNetwork;
use crate::error::DispatchError;
use crate::models::CityId;

/// Parameters of [`generate_network`].
///
/// # Examples
///
/// ```
/// use u_dispatch::network::GeneratorConfig;
///
/// let cfg = GeneratorConfig::new(12).with_extra_routes(6).with_max_days(4);
/// assert_eq!(cfg.cities, 12);
/// assert_eq!(cfg.max_days, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of cities (at least one is always generated).
    pub cities: usize,
    /// Routes added on top of the spanning tree.
    pub extra_routes: usize,
    /// Largest route weight in days.
    pub max_days: u32,
    /// Chance that a city hosts a shop.
    pub shop_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cities: 10,
            extra_routes: 5,
            max_days: 5,
            shop_probability: 0.3,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with the given city count.
    pub fn new(cities: usize) -> Self {
        Self {
            cities,
            ..Self::default()
        }
    }

    /// Sets the number of extra routes.
    pub fn with_extra_routes(mut self, extra_routes: usize) -> Self {
        self.extra_routes = extra_routes;
        self
    }

    /// Sets the largest route weight.
    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    /// Sets the shop probability, clamped to `[0, 1]`.
    pub fn with_shop_probability(mut self, p: f64) -> Self {
        self.shop_probability = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        self
    }
}

/// Generates a connected network with at least one shop.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::network::{generate_network, GeneratorConfig, GraphSource};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let net = generate_network(&GeneratorConfig::new(8), &mut rng).unwrap();
/// assert_eq!(net.cities().len(), 8);
/// assert!(!net.supplying_cities().is_empty());
/// ```
pub fn generate_network<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<RetailNetwork, DispatchError> {
    let n = config.cities.max(1);
    let max_days = config.max_days.max(1);
    let mut net = RetailNetwork::new();

    let mut cities: Vec<CityId> = Vec::with_capacity(n);
    for i in 0..n {
        cities.push(net.add_city(format!("city-{i}"))?);
    }

    for i in 1..n {
        let j = rng.random_range(0..i);
        let days = rng.random_range(1..=max_days);
        net.connect_cities(cities[i], cities[j], days)?;
    }

    if n > 1 {
        // Bounded attempts; dense configurations may leave some unplaced.
        let open_pairs = n.saturating_mul(n - 1) / 2 - (n - 1);
        let wanted = config.extra_routes.min(open_pairs);
        let mut placed = 0;
        let mut attempts = 0;
        while placed < wanted && attempts < wanted.saturating_mul(10) {
            attempts += 1;
            let a = cities[rng.random_range(0..n)];
            let b = cities[rng.random_range(0..n)];
            if a == b || net.connected_cities(a).contains(&b) {
                continue;
            }
            net.connect_cities(a, b, rng.random_range(1..=max_days))?;
            placed += 1;
        }
    }

    let p = if config.shop_probability.is_nan() {
        0.0
    } else {
        config.shop_probability.clamp(0.0, 1.0)
    };
    let mut any_shop = false;
    for &city in &cities {
        if rng.random_bool(p) {
            net.add_shop(city)?;
            any_shop = true;
        }
    }
    if !any_shop {
        net.add_shop(cities[rng.random_range(0..n)])?;
    }

    Ok(net)
}
