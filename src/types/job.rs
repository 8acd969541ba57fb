//! Job types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled service visit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub client_id: Option<Uuid>,
    pub suburb: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub duration_minutes: i32,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_break: bool,
}

impl Job {
    /// Whether this entry belongs in the day's route: on the target date
    /// and not a break.
    pub fn is_eligible(&self, date: NaiveDate) -> bool {
        !self.is_break && self.date == date
    }
}
