//! Dispatch planning: nearest city, assembly time, and transit path.

use tracing::{info, info_span, warn};

use crate::error::DispatchError;
use crate::models::{CityId, DispatchPlan, OrderId};
use crate::network::GraphSource;
use crate::search::{assembly_days, build_path, resolve_nearest};

/// Plans the dispatch of `order` to a buyer in `buyer_city`.
///
/// Takes one snapshot of the routes and runs, in order: the nearest
/// supplying city search from the buyer, the assembly time at that city,
/// and the path back to the buyer. The result depends only on the graph
/// and the order's shop cities.
///
/// # Errors
///
/// - [`DispatchError::UnknownOrder`] from the source
/// - [`DispatchError::EmptyOrderItemSet`] if the order has no shop cities
/// - [`DispatchError::UnknownCity`], [`DispatchError::NoSupplyingCity`],
///   [`DispatchError::UnreachableCity`] from the nearest city search
/// - [`DispatchError::UnreachableShopCity`] from the assembly estimate
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatch::plan_dispatch;
/// use u_dispatch::network::RetailNetwork;
///
/// let mut net = RetailNetwork::new();
/// let a = net.add_city("A").unwrap();
/// let b = net.add_city("B").unwrap();
/// let c = net.add_city("C").unwrap();
/// net.connect_cities(a, b, 2).unwrap();
/// net.connect_cities(b, c, 3).unwrap();
/// let shop = net.add_shop(c).unwrap();
/// let order = net.add_order(a).unwrap();
/// net.add_item(order, shop).unwrap();
///
/// let plan = plan_dispatch(&net, a, order).unwrap();
/// assert_eq!(plan.nearest_city(), c);
/// assert_eq!(plan.transit_days(), 5);
/// assert_eq!(plan.assembly_days(), 0);
/// assert_eq!(plan.path(), &[c, b, a]);
/// ```
pub fn plan_dispatch<S>(
    source: &S,
    buyer_city: CityId,
    order: OrderId,
) -> Result<DispatchPlan, DispatchError>
where
    S: GraphSource + ?Sized,
{
    let span = info_span!("plan_dispatch", %order, %buyer_city);
    let _guard = span.enter();

    let result = plan_snapshot(source, buyer_city, order);
    if let Err(e) = &result {
        warn!(error = %e, "Dispatch planning failed");
    }
    result
}

/// Plans the dispatch of `order` to its buyer's city.
pub fn plan_order<S>(source: &S, order: OrderId) -> Result<DispatchPlan, DispatchError>
where
    S: GraphSource + ?Sized,
{
    let buyer_city = source.buyer_city_of(order)?;
    plan_dispatch(source, buyer_city, order)
}

fn plan_snapshot<S>(
    source: &S,
    buyer_city: CityId,
    order: OrderId,
) -> Result<DispatchPlan, DispatchError>
where
    S: GraphSource + ?Sized,
{
    let shop_cities = source.shop_cities_for_order(order)?;
    if shop_cities.is_empty() {
        return Err(DispatchError::EmptyOrderItemSet { order });
    }

    let routes = source.routes();
    let nearest = resolve_nearest(&routes, buyer_city, |c| source.has_shop(c))?;
    let assembly = assembly_days(&routes, nearest.city, &shop_cities)?;
    let path = build_path(&routes, &nearest.tree, nearest.city)?;
    debug_assert_eq!(path.total_days(), nearest.distance);

    let plan = DispatchPlan::new(order, nearest.city, assembly.days, path.cities, path.leg_days);
    info!(
        nearest_city = %plan.nearest_city(),
        assembly_days = plan.assembly_days(),
        transit_days = plan.transit_days(),
        hops = plan.leg_days().len(),
        "Dispatch planned"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::models::ShopId;
    use crate::network::{generate_network, Adjacency, GeneratorConfig, RetailNetwork};

    /// A–B (2), B–C (3), shop in C, buyer in A.
    fn line_network() -> (RetailNetwork, [CityId; 3], ShopId) {
        let mut net = RetailNetwork::new();
        let a = net.add_city("A").expect("city");
        let b = net.add_city("B").expect("city");
        let c = net.add_city("C").expect("city");
        net.connect_cities(a, b, 2).expect("route");
        net.connect_cities(b, c, 3).expect("route");
        let shop = net.add_shop(c).expect("shop");
        (net, [a, b, c], shop)
    }

    #[test]
    fn test_line_scenario() {
        let (mut net, [a, b, c], shop) = line_network();
        let order = net.add_order(a).expect("order");
        net.add_item(order, shop).expect("item");

        let plan = plan_order(&net, order).expect("planned");
        assert_eq!(plan.order(), order);
        assert_eq!(plan.buyer_city(), a);
        assert_eq!(plan.nearest_city(), c);
        assert_eq!(plan.transit_days(), 5);
        assert_eq!(plan.assembly_days(), 0);
        assert_eq!(plan.path(), &[c, b, a]);
        assert_eq!(plan.leg_days(), &[3, 2]);
    }

    #[test]
    fn test_buyer_city_hosts_shop() {
        let (mut net, [_, b, _], shop) = line_network();
        let local = net.add_shop(b).expect("shop");
        let order = net.add_order(b).expect("order");
        net.add_item(order, local).expect("item");
        net.add_item(order, shop).expect("item");

        let plan = plan_order(&net, order).expect("planned");
        assert_eq!(plan.nearest_city(), b);
        assert_eq!(plan.transit_days(), 0);
        assert_eq!(plan.path(), &[b]);
        // Stock from C must still travel to B.
        assert_eq!(plan.assembly_days(), 3);
    }

    #[test]
    fn test_assembly_is_slowest_shop_city() {
        // Nearest city N; order draws from N+2 and N+5.
        let mut net = RetailNetwork::new();
        let buyer = net.add_city("buyer").expect("city");
        let n = net.add_city("nearest").expect("city");
        let near = net.add_city("near").expect("city");
        let far = net.add_city("far").expect("city");
        net.connect_cities(buyer, n, 1).expect("route");
        net.connect_cities(n, near, 2).expect("route");
        net.connect_cities(n, far, 5).expect("route");
        net.add_shop(n).expect("shop");
        let s_near = net.add_shop(near).expect("shop");
        let s_far = net.add_shop(far).expect("shop");
        let order = net.add_order(buyer).expect("order");
        net.add_item(order, s_near).expect("item");
        net.add_item(order, s_far).expect("item");

        let plan = plan_order(&net, order).expect("planned");
        assert_eq!(plan.nearest_city(), n);
        assert_eq!(plan.assembly_days(), 5);
        assert_eq!(plan.total_days(), 6);
    }

    #[test]
    fn test_empty_order() {
        let (mut net, [a, _, _], _) = line_network();
        let order = net.add_order(a).expect("order");
        assert_eq!(
            plan_order(&net, order),
            Err(DispatchError::EmptyOrderItemSet { order })
        );
    }

    #[test]
    fn test_unknown_order() {
        let (net, _, _) = line_network();
        assert_eq!(
            plan_order(&net, OrderId(99)),
            Err(DispatchError::UnknownOrder(OrderId(99)))
        );
    }

    #[test]
    fn test_disconnected_buyer() {
        let (mut net, _, shop) = line_network();
        let island = net.add_city("island").expect("city");
        let order = net.add_order(island).expect("order");
        net.add_item(order, shop).expect("item");
        assert_eq!(
            plan_order(&net, order),
            Err(DispatchError::UnreachableCity { buyer_city: island })
        );
    }

    #[test]
    fn test_shop_city_cut_off_from_nearest() {
        let (mut net, [a, _, _], shop) = line_network();
        let island = net.add_city("island").expect("city");
        let remote = net.add_shop(island).expect("shop");
        let order = net.add_order(a).expect("order");
        net.add_item(order, shop).expect("item");
        net.add_item(order, remote).expect("item");
        assert!(matches!(
            plan_order(&net, order),
            Err(DispatchError::UnreachableShopCity { shop_city, .. }) if shop_city == island
        ));
    }

    #[test]
    fn test_transit_beyond_u32_range() {
        let mut net = RetailNetwork::new();
        let a = net.add_city("A").expect("city");
        let b = net.add_city("B").expect("city");
        let c = net.add_city("C").expect("city");
        net.connect_cities(a, b, 3_000_000_000).expect("route");
        net.connect_cities(b, c, 3_000_000_000).expect("route");
        let shop = net.add_shop(c).expect("shop");
        let order = net.add_order(a).expect("order");
        net.add_item(order, shop).expect("item");

        let plan = plan_dispatch(&net, a, order).expect("planned");
        assert_eq!(plan.path(), &[c, b, a]);
        assert_eq!(plan.leg_days(), &[3_000_000_000, 3_000_000_000]);
        assert_eq!(plan.transit_days(), 6_000_000_000);
        assert_eq!(plan.total_days(), 6_000_000_000);
    }

    /// All-pairs shortest distances by Floyd–Warshall.
    fn all_pairs(adj: &Adjacency) -> BTreeMap<(CityId, CityId), u64> {
        let cities: Vec<CityId> = adj.cities().collect();
        let mut d = BTreeMap::new();
        for &c in &cities {
            d.insert((c, c), 0u64);
            for (n, w) in adj.neighbors(c) {
                d.insert((c, n), u64::from(w));
            }
        }
        for &k in &cities {
            for &i in &cities {
                for &j in &cities {
                    if let (Some(&ik), Some(&kj)) = (d.get(&(i, k)), d.get(&(k, j))) {
                        let through = ik + kj;
                        if d.get(&(i, j)).map_or(true, |&ij| through < ij) {
                            d.insert((i, j), through);
                        }
                    }
                }
            }
        }
        d
    }

    /// Generated network plus one order from a random buyer drawing on a
    /// random subset of the shops.
    fn random_order(seed: u64, cities: usize) -> (RetailNetwork, OrderId) {
        let mut rng = StdRng::seed_from_u64(seed);
        let cfg = GeneratorConfig::new(cities)
            .with_extra_routes(cities / 2)
            .with_max_days(6)
            .with_shop_probability(0.3);
        let mut net = generate_network(&cfg, &mut rng).expect("valid");
        let all: Vec<CityId> = net.cities().into_iter().collect();
        let buyer = all[rng.random_range(0..all.len())];
        let order = net.add_order(buyer).expect("order");
        let shops: Vec<ShopId> = all.iter().flat_map(|&c| net.shops_in(c)).collect();
        for (i, &s) in shops.iter().enumerate() {
            if i == 0 || rng.random_bool(0.5) {
                net.add_item(order, s).expect("item");
            }
        }
        (net, order)
    }

    proptest! {
        #[test]
        fn prop_nearest_city_is_closest(seed in any::<u64>(), cities in 1usize..14) {
            let (net, order) = random_order(seed, cities);
            let plan = plan_order(&net, order).expect("connected network");
            let d = all_pairs(&net.routes());
            let buyer = plan.buyer_city();

            prop_assert!(net.has_shop(plan.nearest_city()));
            let best = net
                .supplying_cities()
                .into_iter()
                .filter_map(|c| d.get(&(buyer, c)).copied())
                .min()
                .expect("some shop reachable");
            prop_assert_eq!(d[&(buyer, plan.nearest_city())], best);
            prop_assert_eq!(plan.transit_days(), best);
        }

        #[test]
        fn prop_path_weights_sum_to_transit(seed in any::<u64>(), cities in 1usize..14) {
            let (net, order) = random_order(seed, cities);
            let plan = plan_order(&net, order).expect("connected network");
            let adj = net.routes();

            prop_assert_eq!(plan.path().first().copied(), Some(plan.nearest_city()));
            prop_assert_eq!(plan.path().last().copied(), Some(plan.buyer_city()));
            let mut total = 0u64;
            for pair in plan.path().windows(2) {
                total += u64::from(adj.days(pair[0], pair[1]).expect("consecutive cities share a route"));
            }
            prop_assert_eq!(total, plan.transit_days());
        }

        #[test]
        fn prop_assembly_is_max_shop_distance(seed in any::<u64>(), cities in 1usize..14) {
            let (net, order) = random_order(seed, cities);
            let plan = plan_order(&net, order).expect("connected network");
            let d = all_pairs(&net.routes());
            let expected = net
                .shop_cities_for_order(order)
                .expect("known order")
                .into_iter()
                .map(|c| d[&(plan.nearest_city(), c)])
                .max()
                .unwrap_or(0);
            prop_assert_eq!(plan.assembly_days(), expected);
        }
    }
}
