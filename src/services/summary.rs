//! Travel summary derivation for an ordered route.

use crate::services::geo;
use crate::types::{RouteLeg, RouteStop, RouteSummary};

/// Label for a leg's first endpoint when the route begins at an explicit
/// start coordinate rather than a job.
const START_LABEL: &str = "Start";

/// Label for a stop with no client name or suburb to show.
const UNKNOWN_LABEL: &str = "?";

/// Derive per-leg and total travel figures from an already-ordered route.
///
/// One leg per annotated stop — the seed stop and unresolved tail carry
/// no annotation and produce none. Total distance is the one-decimal
/// rounding of the leg sum; total minutes is the plain sum of the per-leg
/// minutes. Because each leg's minutes were rounded independently, the
/// total can differ by a few minutes from re-deriving it from the total
/// distance; both figures are kept as-is rather than reconciled.
pub fn summarize(route: &[RouteStop]) -> RouteSummary {
    let mut legs = Vec::new();
    let mut total_km = 0.0;
    let mut total_minutes = 0;

    for (i, stop) in route.iter().enumerate() {
        let (Some(km), Some(minutes)) = (
            stop.distance_from_previous_km,
            stop.duration_from_previous_minutes,
        ) else {
            continue;
        };

        let from = match i.checked_sub(1).and_then(|p| route.get(p)) {
            Some(prev) => prev.display_name().unwrap_or(UNKNOWN_LABEL),
            None => START_LABEL,
        };
        let to = stop.display_name().unwrap_or(UNKNOWN_LABEL);

        legs.push(RouteLeg {
            from: from.to_string(),
            to: to.to_string(),
            distance_km: km,
            duration_minutes: minutes,
        });

        total_km += km;
        total_minutes += minutes;
    }

    RouteSummary {
        total_distance_km: geo::round_km(total_km),
        total_duration_minutes: total_minutes,
        legs,
    }
}
