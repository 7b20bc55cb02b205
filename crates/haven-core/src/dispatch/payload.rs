//! The body posted to `/api/sos`.

use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::CoreError;

/// A location fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Wire form: `"lat,lng"`.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CoreError::Validation(format!("expected 'lat,lng', got '{s}'")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| CoreError::Validation(format!("'{part}' is not a coordinate")))
        };
        let point = GeoPoint::new(parse(lat)?, parse(lng)?);
        if !(-90.0..=90.0).contains(&point.latitude)
            || !(-180.0..=180.0).contains(&point.longitude)
        {
            return Err(CoreError::Validation(format!("{point} is out of range")));
        }
        Ok(point)
    }
}

/// Free-text identity collected for a sustained alert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl Identity {
    /// Build from raw prompt answers. Blank answers become `None`; anything
    /// else is kept as typed.
    pub fn from_answers(name: Option<String>, phone: Option<String>) -> Self {
        Self {
            name: non_blank(name),
            phone: non_blank(phone),
        }
    }
}

fn non_blank(answer: Option<String>) -> Option<String> {
    answer.filter(|s| !s.trim().is_empty())
}

/// One alert, built fresh per dispatch.
///
/// A quick alert carries nothing and encodes as `{}`. An enriched alert always
/// carries `name` and `phone` (possibly `null`) and adds `location` only when a
/// fix was obtained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertPayload {
    identity: Option<Identity>,
    location: Option<GeoPoint>,
}

impl AlertPayload {
    pub fn quick() -> Self {
        Self::default()
    }

    pub fn enriched(identity: Identity, location: Option<GeoPoint>) -> Self {
        Self {
            identity: Some(identity),
            location,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.identity.as_ref()?.name.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.identity.as_ref()?.phone.as_deref()
    }

    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub fn is_enriched(&self) -> bool {
        self.identity.is_some()
    }
}

impl Serialize for AlertPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.identity.as_ref().map_or(0, |_| 2) + usize::from(self.location.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(identity) = &self.identity {
            map.serialize_entry("name", &identity.name)?;
            map.serialize_entry("phone", &identity.phone)?;
        }
        if let Some(location) = &self.location {
            map.serialize_entry("location", &location.to_string())?;
        }
        map.end()
    }
}
