//! Alert dispatcher.
//!
//! Turns an [`AlertIntent`] into at most one `POST /api/sos`. Enrichment
//! (identity prompts, location) always finishes or is abandoned before the
//! request starts. The request is single-attempt: no retry, no queue. On the
//! quick path the emergency call offer runs alongside the request.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::location::{acquire_location, LocationProvider, DEFAULT_LOCATION_TIMEOUT};
use super::payload::{AlertPayload, Identity};
use super::platform::Platform;
use crate::error::CoreError;
use crate::gesture::AlertIntent;

pub const QUICK_CONFIRM_PROMPT: &str =
    "Send quick SOS? You will be advised to call emergency services.";
pub const NAME_PROMPT: &str = "Your name (optional):";
pub const PHONE_PROMPT: &str = "Phone (optional):";
pub const SOS_SENT_MESSAGE: &str = "SOS sent. Stay safe, help is being notified.";
pub const SOS_FAILED_MESSAGE: &str = "Failed to send SOS. Try calling a helpline.";
pub const DEFAULT_EMERGENCY_NUMBER: &str = "112";

/// Delivers a payload to the backend.
///
/// `Ok` means a response arrived and its body parsed as JSON. What the body
/// says is not inspected.
pub trait AlertTransport: Send + Sync {
    fn send_sos(
        &self,
        payload: &AlertPayload,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Success,
    Failure(String),
}

impl DispatchOutcome {
    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            DispatchOutcome::Success => SOS_SENT_MESSAGE,
            DispatchOutcome::Failure(_) => SOS_FAILED_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success)
    }
}

/// How a dispatched intent ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum AlertResolution {
    /// The user said no to the quick-alert confirmation. Nothing was sent.
    Declined,
    Submitted {
        intent: AlertIntent,
        outcome: DispatchOutcome,
        location_attached: bool,
        call_placed: bool,
    },
}

impl AlertResolution {
    pub fn outcome(&self) -> Option<&DispatchOutcome> {
        match self {
            AlertResolution::Declined => None,
            AlertResolution::Submitted { outcome, .. } => Some(outcome),
        }
    }
}

/// Tunables for the dispatch flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    pub location_timeout: Duration,
    pub emergency_number: String,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            location_timeout: DEFAULT_LOCATION_TIMEOUT,
            emergency_number: DEFAULT_EMERGENCY_NUMBER.to_string(),
        }
    }
}

pub struct AlertDispatcher<T, P, L> {
    transport: T,
    platform: P,
    location: L,
    settings: DispatchSettings,
}

impl<T, P, L> AlertDispatcher<T, P, L>
where
    T: AlertTransport,
    P: Platform,
    L: LocationProvider,
{
    pub fn new(transport: T, platform: P, location: L, settings: DispatchSettings) -> Self {
        Self {
            transport,
            platform,
            location,
            settings,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Run the flow for `intent` to completion.
    pub async fn dispatch(&mut self, intent: AlertIntent) -> AlertResolution {
        let span = info_span!("dispatch", dispatch_id = %Uuid::new_v4(), ?intent);
        async {
            match intent {
                AlertIntent::QuickAlert => self.quick_alert().await,
                AlertIntent::EnrichedAlert => self.enriched_alert().await,
            }
        }
        .instrument(span)
        .await
    }

    async fn quick_alert(&mut self) -> AlertResolution {
        if !self.platform.confirm(QUICK_CONFIRM_PROMPT) {
            info!("quick alert declined");
            return AlertResolution::Declined;
        }

        let payload = AlertPayload::quick();
        log_submission(&payload);

        // The call offer must not wait on the backend.
        let Self {
            transport,
            platform,
            settings,
            ..
        } = self;
        let number = settings.emergency_number.as_str();
        let (delivery, call_placed) = tokio::join!(transport.send_sos(&payload), async {
            offer_call(&mut *platform, number)
        });
        let outcome = settle(platform, delivery);

        AlertResolution::Submitted {
            intent: AlertIntent::QuickAlert,
            outcome,
            location_attached: false,
            call_placed,
        }
    }

    async fn enriched_alert(&mut self) -> AlertResolution {
        let name = self.platform.prompt_text(NAME_PROMPT);
        let phone = self.platform.prompt_text(PHONE_PROMPT);
        let identity = Identity::from_answers(name, phone);

        let location = acquire_location(&self.location, self.settings.location_timeout).await;
        let payload = AlertPayload::enriched(identity, location);
        log_submission(&payload);
        let delivery = self.transport.send_sos(&payload).await;
        let outcome = settle(&mut self.platform, delivery);

        AlertResolution::Submitted {
            intent: AlertIntent::EnrichedAlert,
            outcome,
            location_attached: location.is_some(),
            call_placed: false,
        }
    }
}

fn log_submission(payload: &AlertPayload) {
    info!(
        enriched = payload.is_enriched(),
        has_location = payload.location().is_some(),
        "submitting alert"
    );
}

/// Ask to dial `number`. Returns whether the call was started.
fn offer_call<P: Platform>(platform: &mut P, number: &str) -> bool {
    let offer = format!("Would you like to call local emergency number {number}?");
    if !platform.confirm(&offer) {
        return false;
    }
    match platform.place_call(number) {
        Ok(()) => {
            info!(%number, "emergency call initiated");
            true
        }
        Err(e) => {
            warn!(%number, error = %e, "could not start emergency call");
            false
        }
    }
}

/// Map a delivery result to an outcome and show its message.
fn settle<P: Platform>(
    platform: &mut P,
    delivery: Result<serde_json::Value, CoreError>,
) -> DispatchOutcome {
    let outcome = match delivery {
        Ok(_) => {
            info!("alert delivered");
            DispatchOutcome::Success
        }
        Err(e) => {
            error!(error = %e, "alert submission failed");
            DispatchOutcome::Failure(e.to_string())
        }
    };
    platform.notify(outcome.message());
    outcome
}
