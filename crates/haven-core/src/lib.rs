//! # Haven Core Library
//!
//! Client-side logic for the Haven personal-safety service: turning a press
//! on the SOS control into an alert and delivering it to the backend.
//!
//! ## Architecture
//!
//! - **Gesture**: a clock-driven classifier that tells a quick tap from a
//!   sustained press (700 ms by default)
//! - **Dispatch**: the quick and enriched alert flows, bounded location
//!   lookup, and single-attempt submission
//! - **Controller**: the input loop tying the two together
//! - **API**: typed client for the backend JSON endpoints
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`GestureClassifier`]: press/hold state machine
//! - [`AlertDispatcher`]: enrichment and submission
//! - [`SosControl`]: the event loop
//! - [`ApiClient`]: backend client
//! - [`Config`]: application configuration

pub mod api;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod gesture;
pub mod risk;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, Helpline, ReportSubmission, Tip};
pub use controller::{InputEvent, SosControl};
pub use dispatch::{
    AlertDispatcher, AlertPayload, AlertResolution, AlertTransport, DispatchOutcome,
    DispatchSettings, FixedLocation, GeoPoint, LocationProvider, Platform,
};
pub use error::{ConfigError, CoreError, LocationError};
pub use gesture::{AlertIntent, ControlVisual, GestureClassifier, GestureState, InputSource};
pub use risk::RiskLevel;
pub use storage::Config;
