//! Client types

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A latitude/longitude field as it arrives from upstream records.
///
/// Imports and older records store these as text, newer ones as numbers;
/// both shapes deserialize here and are parsed explicitly rather than
/// coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordValue {
    Number(f64),
    Text(String),
}

/// Failure to read a coordinate field as a degree value
#[derive(Debug, Error, PartialEq)]
pub enum CoordParseError {
    #[error("coordinate text is not numeric: {0:?}")]
    NotNumeric(String),
    #[error("coordinate value is not finite")]
    NotFinite,
}

impl CoordValue {
    /// Parse into a finite degree value.
    pub fn parse(&self) -> Result<f64, CoordParseError> {
        let value = match self {
            CoordValue::Number(n) => *n,
            CoordValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoordParseError::NotNumeric(s.clone()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CoordParseError::NotFinite)
        }
    }
}

/// Client entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub suburb: Option<String>,
    pub lat: Option<CoordValue>,
    pub lng: Option<CoordValue>,
}

impl Client {
    /// Explicit coordinates, if both fields are present and parseable.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.lat.as_ref()?.parse().ok()?;
        let lng = self.lng.as_ref()?.parse().ok()?;
        Some(Coordinates { lat, lng })
    }
}
