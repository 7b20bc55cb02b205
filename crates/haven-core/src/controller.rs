//! The SOS control: classifier and dispatcher wired to one input stream.
//!
//! Everything runs on the caller's task. A dispatch is awaited inside the
//! loop, so inputs that arrive meanwhile wait in the channel and at most one
//! alert is in flight.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::dispatch::{AlertDispatcher, AlertResolution, AlertTransport, LocationProvider, Platform};
use crate::gesture::{AlertIntent, Clock, GestureClassifier, InputSource};

/// A raw input on the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Press { source: InputSource },
    Release,
}

pub struct SosControl<C: Clock, T, P, L> {
    classifier: GestureClassifier<C>,
    dispatcher: AlertDispatcher<T, P, L>,
}

impl<C, T, P, L> SosControl<C, T, P, L>
where
    C: Clock,
    T: AlertTransport,
    P: Platform,
    L: LocationProvider,
{
    pub fn new(classifier: GestureClassifier<C>, dispatcher: AlertDispatcher<T, P, L>) -> Self {
        Self {
            classifier,
            dispatcher,
        }
    }

    pub fn classifier(&self) -> &GestureClassifier<C> {
        &self.classifier
    }

    pub fn dispatcher(&self) -> &AlertDispatcher<T, P, L> {
        &self.dispatcher
    }

    /// Feed one input. Returns the resolution if it completed a gesture.
    pub async fn handle_input(&mut self, event: InputEvent) -> Option<AlertResolution> {
        let intent = match event {
            InputEvent::Press { source } => {
                if source.suppresses_default() {
                    debug!("suppressing platform touch handling");
                }
                self.classifier.press(source);
                None
            }
            InputEvent::Release => self.classifier.release(),
        }?;
        Some(self.dispatch(intent).await)
    }

    /// Fire the hold timer if it is due.
    pub async fn on_timer(&mut self) -> Option<AlertResolution> {
        let intent = self.classifier.tick()?;
        Some(self.dispatch(intent).await)
    }

    async fn dispatch(&mut self, intent: AlertIntent) -> AlertResolution {
        let resolution = self.dispatcher.dispatch(intent).await;
        if intent == AlertIntent::EnrichedAlert {
            self.classifier.reset_visual();
        }
        resolution
    }

    /// Drive the control until `inputs` closes.
    ///
    /// The hold timer is re-armed from the classifier on every iteration, so a
    /// release always disarms it. The classifier's clock must advance with
    /// tokio time.
    pub async fn run(&mut self, mut inputs: mpsc::Receiver<InputEvent>) -> Vec<AlertResolution> {
        let mut resolutions = Vec::new();
        loop {
            let wake = self.classifier.deadline().map(|deadline| {
                let wait = deadline.saturating_sub(self.classifier.now_ms());
                Instant::now() + Duration::from_millis(wait)
            });

            tokio::select! {
                event = inputs.recv() => match event {
                    Some(event) => resolutions.extend(self.handle_input(event).await),
                    None => break,
                },
                _ = wait_until(wake) => resolutions.extend(self.on_timer().await),
            }
        }
        resolutions
    }
}

async fn wait_until(wake: Option<Instant>) {
    match wake {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
