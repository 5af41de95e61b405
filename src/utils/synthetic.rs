// Seeded synthetic metro networks for benchmarks and property tests

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::NetworkError;
use crate::models::{Cost, MetroNetwork, NetworkBuilder, Route};

/// Key of the i-th synthetic stop
pub fn stop_key(i: usize) -> String {
    format!("s{}", i)
}

/// Build a random network of `stop_count` stops.
///
/// Stops form a bidirectional line so every stop is reachable, then
/// `extra_links` random one-way shortcuts are added. Costs are whole minutes
/// in `1..=max_cost`.
pub fn random_network(
    stop_count: usize,
    extra_links: usize,
    max_cost: u32,
    seed: u64,
) -> Result<MetroNetwork, NetworkError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_cost = max_cost.max(1);
    let mut builder = NetworkBuilder::new();

    for i in 0..stop_count {
        builder.add_stop(stop_key(i), format!("Stop {}", i));
    }

    for i in 1..stop_count {
        let cost = Cost::from(rng.gen_range(1..=max_cost));
        builder.add_bidirectional(&stop_key(i - 1), &stop_key(i), cost);
    }

    if stop_count > 1 {
        for _ in 0..extra_links {
            let from = rng.gen_range(0..stop_count);
            let to = rng.gen_range(0..stop_count);
            if from != to {
                let cost = Cost::from(rng.gen_range(1..=max_cost));
                builder.add_connection(stop_key(from), stop_key(to), cost);
            }
        }
    }

    builder.build()
}

/// Random walk of up to `length` stops following outgoing connections.
///
/// The walk stops early at a stop without connections.
pub fn random_walk<R: Rng>(network: &MetroNetwork, length: usize, rng: &mut R) -> Route {
    let mut stops = Vec::with_capacity(length);
    let Some(mut current) = network.stops().choose(rng) else {
        return Route::default();
    };

    stops.push(current.key.clone());
    while stops.len() < length {
        let Some(next) = current.connections.choose(rng) else {
            break;
        };
        match network.stop(&next.to) {
            Some(stop) => current = stop,
            None => break,
        }
        stops.push(current.key.clone());
    }

    Route::new(stops)
}
