//! Assembly of route tables for rendering

use crate::types::{Route, RouteLine};
use std::collections::HashSet;

/// Build one named geometry per route, in input order
pub fn route_lines<'a, I>(routes: I) -> Vec<RouteLine>
where
    I: IntoIterator<Item = &'a Route>,
{
    let lines: Vec<RouteLine> = routes.into_iter().map(RouteLine::from).collect();

    let split = lines.iter().filter(|line| line.path.is_split()).count();
    tracing::debug!(
        "Built {} route lines ({} split at the antimeridian)",
        lines.len(),
        split
    );

    lines
}

/// Drop routes that only differ from an earlier route by direction
///
/// `A-B` and `B-A` count as the same route; the first one seen is kept.
pub fn unique_routes<I>(routes: I) -> Vec<Route>
where
    I: IntoIterator<Item = Route>,
{
    let mut seen = HashSet::new();
    routes
        .into_iter()
        .filter(|route| seen.insert(route.undirected_name()))
        .collect()
}
