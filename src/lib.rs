//! Single-day route ordering for service run sheets.
//!
//! Given one day's jobs and the client records behind them, the engine
//! resolves each job to a coordinate (client geocode first, suburb table
//! second), orders the resolvable jobs nearest-neighbour, annotates each
//! step with straight-line travel distance and an approximate drive time,
//! and summarizes the result. Calendar rendering, job CRUD, and the
//! persistence backend live with the caller; the only storage-facing
//! piece here is the sequential order-apply loop in [`services::apply`].

pub mod services;
pub mod types;

pub use services::apply::{apply_route, RouteWriter};
pub use services::locations::LocationTable;
pub use services::optimizer::{eligible_jobs, optimize};
pub use services::resolver::resolve;
pub use services::summary::summarize;
pub use types::*;

/// Order one day's jobs and summarize the travel: the one-call surface
/// behind the calendar's "optimize my day" action.
pub fn plan_day_route(
    jobs: &[Job],
    clients: &[Client],
    table: &LocationTable,
    start: Option<Coordinates>,
) -> DayRoute {
    let stops = services::optimizer::optimize(jobs, clients, table, start);
    let summary = services::summary::summarize(&stops);
    DayRoute { stops, summary }
}
