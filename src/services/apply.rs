//! Sequential application of a computed order to storage.
//!
//! The engine itself never persists anything; the calendar backend
//! implements [`RouteWriter`] and this module drives it one stop at a
//! time. Updates are issued strictly in route order, each awaited before
//! the next, so a mid-sequence failure leaves the already-written prefix
//! in the new order and everything after it untouched. There is no
//! rollback and no cancellation beyond stopping at the first failure.

use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::types::{ApplyReport, ApplyStepResult, RouteStop};

/// Persistence collaborator for applying a computed order.
#[async_trait]
pub trait RouteWriter: Send + Sync {
    /// Persist one job's position in the new order (0-based).
    async fn write_position(&self, job_id: Uuid, position: usize) -> anyhow::Result<()>;
}

/// Apply the route's order through `writer`, one stop at a time.
///
/// Stops issuing updates at the first failure; the report records every
/// attempted step, so callers needing more than the overall flag can
/// read back which prefix landed.
pub async fn apply_route(writer: &dyn RouteWriter, route: &[RouteStop]) -> ApplyReport {
    let mut steps: Vec<ApplyStepResult> = Vec::with_capacity(route.len());

    for (position, stop) in route.iter().enumerate() {
        match writer.write_position(stop.job.id, position).await {
            Ok(()) => {
                steps.push(ApplyStepResult {
                    job_id: stop.job.id,
                    position: position as i32,
                    success: true,
                    error: None,
                });
            }
            Err(e) => {
                error!(job_id = %stop.job.id, position, "failed to apply route order: {:#}", e);
                steps.push(ApplyStepResult {
                    job_id: stop.job.id,
                    position: position as i32,
                    success: false,
                    error: Some(e.to_string()),
                });
                break;
            }
        }
    }

    let success = steps.len() == route.len() && steps.iter().all(|s| s.success);
    debug!(
        applied = steps.iter().filter(|s| s.success).count(),
        total = route.len(),
        success,
        "route apply finished"
    );

    ApplyReport { steps, success }
}
