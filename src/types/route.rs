//! Route types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Coordinates, Job};

/// A stop on the ordered run sheet.
///
/// Wraps the original job so nothing is lost in transit, plus the display
/// fields resolved from the client record and the travel annotation from
/// the previous position. The annotation is `None` on the seed stop (when
/// the route starts from a job rather than an explicit start coordinate)
/// and on every unresolved stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub job: Job,
    pub client_name: Option<String>,
    /// Display suburb: the job's own label, falling back to the client's.
    pub suburb: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub distance_from_previous_km: Option<f64>,
    pub duration_from_previous_minutes: Option<i32>,
}

impl RouteStop {
    /// Display name for leg labels: client name, else suburb.
    pub fn display_name(&self) -> Option<&str> {
        self.client_name.as_deref().or(self.suburb.as_deref())
    }

    /// Whether a coordinate could be derived for this stop.
    pub fn is_resolved(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// One travel segment between consecutive stops
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub duration_minutes: i32,
}

/// Travel totals for a route.
///
/// Durations are flat-speed estimates, not routing-engine figures, and
/// `total_duration_minutes` is the sum of per-leg rounded minutes — it may
/// drift a few minutes from recomputing the total distance at 30 km/h.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub total_distance_km: f64,
    pub total_duration_minutes: i32,
    pub legs: Vec<RouteLeg>,
}

/// Output of planning one day's route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRoute {
    pub stops: Vec<RouteStop>,
    pub summary: RouteSummary,
}

/// Outcome of persisting one stop's new position
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyStepResult {
    pub job_id: Uuid,
    /// Position in the new order (0-based).
    pub position: i32,
    pub success: bool,
    pub error: Option<String>,
}

/// Result of applying a computed order to storage.
///
/// Updates are issued strictly in route order and stop at the first
/// failure, so the recorded steps always describe a prefix of the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    pub steps: Vec<ApplyStepResult>,
    pub success: bool,
}

impl ApplyReport {
    /// Number of stops whose new position was written before the first
    /// failure (the whole route when `success`).
    pub fn applied_prefix(&self) -> usize {
        self.steps.iter().take_while(|s| s.success).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_route_stop_serializes_to_camel_case() {
        let stop = RouteStop {
            job: Job {
                id: Uuid::nil(),
                client_id: None,
                suburb: Some("Mooloolaba".to_string()),
                start_time: None,
                duration_minutes: 30,
                date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
                is_break: false,
            },
            client_name: None,
            suburb: Some("Mooloolaba".to_string()),
            coordinates: Some(Coordinates { lat: -26.68, lng: 153.12 }),
            distance_from_previous_km: Some(12.4),
            duration_from_previous_minutes: Some(25),
        };

        let json = serde_json::to_string(&stop).unwrap();
        assert!(json.contains("\"distanceFromPreviousKm\":12.4"));
        assert!(json.contains("\"durationFromPreviousMinutes\":25"));
        assert!(!json.contains("distance_from_previous_km"));
    }

    #[test]
    fn test_display_name_prefers_client_name() {
        let mut stop = RouteStop {
            job: Job {
                id: Uuid::nil(),
                client_id: None,
                suburb: None,
                start_time: None,
                duration_minutes: 30,
                date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
                is_break: false,
            },
            client_name: Some("Acme Pools".to_string()),
            suburb: Some("Warana".to_string()),
            coordinates: None,
            distance_from_previous_km: None,
            duration_from_previous_minutes: None,
        };

        assert_eq!(stop.display_name(), Some("Acme Pools"));
        stop.client_name = None;
        assert_eq!(stop.display_name(), Some("Warana"));
        stop.suburb = None;
        assert_eq!(stop.display_name(), None);
    }

    #[test]
    fn test_applied_prefix_counts_leading_successes() {
        let step = |success: bool| ApplyStepResult {
            job_id: Uuid::new_v4(),
            position: 0,
            success,
            error: if success { None } else { Some("write failed".to_string()) },
        };

        let report = ApplyReport {
            steps: vec![step(true), step(true), step(false)],
            success: false,
        };
        assert_eq!(report.applied_prefix(), 2);

        let report = ApplyReport { steps: vec![step(true)], success: true };
        assert_eq!(report.applied_prefix(), 1);
    }
}
