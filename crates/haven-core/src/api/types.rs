//! Wire types for the backend JSON API.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpline {
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub body: String,
}

/// Reports are opaque to the client; only their count matters.
pub type Report = serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct HelplinesResponse {
    #[serde(default)]
    pub helplines: Vec<Helpline>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TipsResponse {
    #[serde(default)]
    pub tips: Vec<Tip>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportsResponse {
    pub reports: Vec<Report>,
}

/// An incident report. Coordinates are sent as `null` when unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSubmission {
    pub place: String,
    pub description: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl ReportSubmission {
    pub fn new(place: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            description: description.into(),
            lat: None,
            lng: None,
        }
    }

    pub fn with_coordinates(mut self, lat: Option<f64>, lng: Option<f64>) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.place.trim().is_empty() {
            return Err(CoreError::Validation("place must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation("description must not be empty".into()));
        }
        if self.lat.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
            return Err(CoreError::Validation("lat must be within -90..=90".into()));
        }
        if self.lng.is_some_and(|lng| !(-180.0..=180.0).contains(&lng)) {
            return Err(CoreError::Validation("lng must be within -180..=180".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportAck {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}
