// Structural validation of submitted routes

use crate::error::EvaluationError;
use crate::models::{Cost, MetroNetwork, Route};

/// Checks that `route` can be travelled exactly as given and returns its total cost.
///
/// Only direct, forward connections count: a leg whose reverse connection
/// exists is still rejected. No shortest path search happens here.
pub fn validate_route(network: &MetroNetwork, route: &Route) -> Result<Cost, EvaluationError> {
    if route.len() < 2 {
        return Err(EvaluationError::RouteTooShort);
    }

    if let Some(unknown) = route.stops.iter().find(|key| !network.contains(key)) {
        return Err(EvaluationError::UnknownStop(unknown.clone()));
    }

    let mut total: Cost = 0.0;
    for (from, to) in route.legs() {
        let cost = network
            .direct_cost(from, to)
            .ok_or_else(|| EvaluationError::NoDirectConnection {
                from: network.name_of(from).unwrap_or(from).to_string(),
                to: network.name_of(to).unwrap_or(to).to_string(),
            })?;
        total += cost;
    }

    log::debug!("route {:?} is traversable in {}", route.stops, total);
    Ok(total)
}
