//! Bounded location lookup.
//!
//! A fix is enrichment only. Every failure, including running out of time,
//! collapses to `None` so the alert still goes out.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use super::payload::GeoPoint;
use crate::error::LocationError;

/// Upper bound on waiting for a fix.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_millis(7_000);

/// Platform geolocation.
pub trait LocationProvider: Send + Sync {
    /// `false` when the platform has no location capability at all.
    fn is_supported(&self) -> bool {
        true
    }

    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send;
}

/// Race the provider against `timeout`.
pub async fn acquire_location<L: LocationProvider>(
    provider: &L,
    timeout: Duration,
) -> Option<GeoPoint> {
    if !provider.is_supported() {
        debug!("location unsupported, sending without it");
        return None;
    }
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(Ok(point)) => {
            debug!(%point, "location acquired");
            Some(point)
        }
        Ok(Err(e)) => {
            warn!(error = %e, "location unavailable, sending without it");
            None
        }
        Err(_) => {
            let e = LocationError::TimedOut {
                timeout_ms: timeout.as_millis() as u64,
            };
            warn!(error = %e, "location unavailable, sending without it");
            None
        }
    }
}

/// A provider with a preset answer, e.g. a position from configuration.
///
/// With no point configured it reports itself as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    point: Option<GeoPoint>,
}

impl FixedLocation {
    pub fn new(point: Option<GeoPoint>) -> Self {
        Self { point }
    }
}

impl LocationProvider for FixedLocation {
    fn is_supported(&self) -> bool {
        self.point.is_some()
    }

    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send {
        let point = self.point.ok_or(LocationError::Unsupported);
        async move { point }
    }
}
