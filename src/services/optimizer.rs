//! Greedy nearest-neighbour ordering for a day's jobs.
//!
//! At each step the route visits the closest unvisited stop to the
//! current position. O(n²) over the day's stop count and locally optimal
//! per step, but not guaranteed globally shortest — acceptable for the
//! 2–8 stops a single team services in a day.

use chrono::NaiveDate;
use tracing::debug;

use crate::services::geo;
use crate::services::locations::LocationTable;
use crate::services::resolver;
use crate::types::{Client, Coordinates, Job, RouteStop};

/// Filter a job list down to one day's routable entries: drops breaks and
/// jobs on other dates. Callers apply this before `optimize`.
pub fn eligible_jobs(jobs: &[Job], date: NaiveDate) -> Vec<Job> {
    jobs.iter()
        .filter(|job| job.is_eligible(date))
        .cloned()
        .collect()
}

/// Order a day's jobs to approximately minimize total travel.
///
/// Jobs that resolve a coordinate are sequenced nearest-neighbour from
/// `start` (or from the first resolvable job when no start is given, in
/// which case that job leads the route unannotated). Each sequenced stop
/// carries its travel distance (km, one decimal) and duration (whole
/// minutes) from the previous position. Jobs that resolve no coordinate
/// are appended after all sequenced stops, in their original relative
/// order, with no travel annotation.
///
/// Always returns every input job exactly once; with one or zero
/// resolvable jobs the input order is kept and nothing is annotated.
/// Exact distance ties are broken by earliest original position.
pub fn optimize(
    jobs: &[Job],
    clients: &[Client],
    table: &LocationTable,
    start: Option<Coordinates>,
) -> Vec<RouteStop> {
    let mut resolvable: Vec<(RouteStop, Coordinates)> = Vec::new();
    let mut unresolvable: Vec<RouteStop> = Vec::new();

    for job in jobs {
        let client = job
            .client_id
            .and_then(|id| clients.iter().find(|c| c.id == id));
        let coordinates = resolver::resolve(job, clients, table);

        let stop = RouteStop {
            job: job.clone(),
            client_name: client.map(|c| c.name.clone()),
            suburb: job
                .suburb
                .clone()
                .or_else(|| client.and_then(|c| c.suburb.clone())),
            coordinates,
            distance_from_previous_km: None,
            duration_from_previous_minutes: None,
        };

        match coordinates {
            Some(coords) => resolvable.push((stop, coords)),
            None => unresolvable.push(stop),
        }
    }

    debug!(
        total = jobs.len(),
        resolvable = resolvable.len(),
        unresolvable = unresolvable.len(),
        "ordering day route"
    );

    // Nothing to sequence with fewer than two positioned stops.
    if resolvable.len() <= 1 {
        let mut route: Vec<RouteStop> =
            resolvable.into_iter().map(|(stop, _)| stop).collect();
        route.extend(unresolvable);
        return route;
    }

    let total = resolvable.len();
    let mut visited = vec![false; total];
    let mut route: Vec<RouteStop> = Vec::with_capacity(total + unresolvable.len());

    let mut position = match start {
        Some(coords) => coords,
        None => {
            // No depot given: the first resolvable job seeds the route
            // and gets no travel annotation.
            visited[0] = true;
            route.push(resolvable[0].0.clone());
            resolvable[0].1
        }
    };

    let mut placed = route.len();
    while placed < total {
        let mut best: Option<(usize, f64)> = None;
        for (i, (_, coords)) in resolvable.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let km = geo::haversine_km(&position, coords);
            // Strict < keeps the earliest candidate on exact ties.
            match best {
                Some((_, best_km)) if km >= best_km => {}
                _ => best = Some((i, km)),
            }
        }

        let Some((next, raw_km)) = best else { break };
        visited[next] = true;
        placed += 1;

        let (stop, coords) = &resolvable[next];
        let mut stop = stop.clone();
        stop.distance_from_previous_km = Some(geo::round_km(raw_km));
        stop.duration_from_previous_minutes = Some(geo::drive_minutes(raw_km));
        position = *coords;
        route.push(stop);
    }

    route.extend(unresolvable);
    route
}
