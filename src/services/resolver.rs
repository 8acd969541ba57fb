//! Coordinate resolution for jobs.
//!
//! A job's position comes from its client's geocoded coordinates when
//! they exist, otherwise from a suburb-level lookup in the reference
//! table. Jobs that resolve neither way are "unresolved" — the optimizer
//! carries them through to the tail of the route untouched.

use crate::services::locations::LocationTable;
use crate::types::{Client, Coordinates, Job};

/// Resolve a job to a coordinate, if one can be derived.
///
/// Resolution order, first match wins:
/// 1. the referenced client has both lat and lng present and parseable —
///    explicit coordinates always win, even when the job carries a
///    conflicting suburb label;
/// 2. the job's suburb label (falling back to the client's), looked up by
///    exact match in the reference table.
///
/// Pure function of its inputs; malformed coordinate fields degrade to
/// the suburb lookup rather than erroring.
pub fn resolve(job: &Job, clients: &[Client], table: &LocationTable) -> Option<Coordinates> {
    let client = job
        .client_id
        .and_then(|id| clients.iter().find(|c| c.id == id));

    if let Some(coords) = client.and_then(|c| c.coordinates()) {
        return Some(coords);
    }

    let suburb = job
        .suburb
        .as_deref()
        .or_else(|| client.and_then(|c| c.suburb.as_deref()))?;

    table.get(suburb)
}
