//! Press/hold classifier for the SOS control.
//!
//! The classifier is a clock-driven state machine with no internal timer.
//! The host arms a wake-up for [`GestureClassifier::deadline`] and calls
//! [`GestureClassifier::tick`] when it elapses.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Pressing -> (release before threshold)   -> QuickAlert    -> Idle
//!                  -> (threshold while still held) -> EnrichedAlert -> SustainedConfirmed
//! SustainedConfirmed -> (release, no intent) -> Idle
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clock::{Clock, MonotonicClock};

/// Hold duration that turns a press into a sustained press.
pub const DEFAULT_HOLD_THRESHOLD_MS: u64 = 700;

/// Where a press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Pointer,
    Touch,
}

impl InputSource {
    /// Touch presses must swallow the platform's own scroll/select handling.
    pub fn suppresses_default(self) -> bool {
        matches!(self, InputSource::Touch)
    }
}

/// The classified outcome of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertIntent {
    QuickAlert,
    EnrichedAlert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    Idle,
    Pressing,
    /// Threshold fired while the press was still down; waiting for release.
    SustainedConfirmed,
}

/// Visual affordance of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlVisual {
    #[default]
    Normal,
    Pressed,
}

impl ControlVisual {
    pub fn scale(self) -> f32 {
        match self {
            ControlVisual::Normal => 1.0,
            ControlVisual::Pressed => 0.96,
        }
    }
}

/// The press currently being tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressSession {
    pub started_at_ms: u64,
    pub source: InputSource,
    /// True once the hold threshold fired while the press was active.
    pub classified: bool,
    deadline_ms: u64,
}

/// Turns press/release pairs into exactly one [`AlertIntent`] each.
#[derive(Debug)]
pub struct GestureClassifier<C: Clock = MonotonicClock> {
    clock: C,
    threshold_ms: u64,
    session: Option<PressSession>,
    visual: ControlVisual,
}

impl GestureClassifier<MonotonicClock> {
    pub fn new(threshold_ms: u64) -> Self {
        Self::with_clock(MonotonicClock::new(), threshold_ms)
    }
}

impl<C: Clock> GestureClassifier<C> {
    pub fn with_clock(clock: C, threshold_ms: u64) -> Self {
        Self {
            clock,
            threshold_ms,
            session: None,
            visual: ControlVisual::Normal,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> GestureState {
        match &self.session {
            None => GestureState::Idle,
            Some(s) if s.classified => GestureState::SustainedConfirmed,
            Some(_) => GestureState::Pressing,
        }
    }

    pub fn session(&self) -> Option<&PressSession> {
        self.session.as_ref()
    }

    pub fn visual(&self) -> ControlVisual {
        self.visual
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// When the pending hold timer is due, if one is armed.
    ///
    /// `None` outside of `Pressing`, so a host that re-reads this after every
    /// input never keeps a timer alive past its gesture.
    pub fn deadline(&self) -> Option<u64> {
        self.session
            .as_ref()
            .filter(|s| !s.classified)
            .map(|s| s.deadline_ms)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start tracking a press. Any earlier session is dropped unclassified.
    pub fn press(&mut self, source: InputSource) {
        let now = self.clock.now_ms();
        if let Some(prev) = self.session.take() {
            debug!(
                started_at_ms = prev.started_at_ms,
                "press superseded an unfinished gesture"
            );
        }
        self.visual = ControlVisual::Normal;
        self.session = Some(PressSession {
            started_at_ms: now,
            source,
            classified: false,
            deadline_ms: now.saturating_add(self.threshold_ms),
        });
        debug!(?source, now, "press started");
    }

    /// Fire the hold timer if it is due.
    ///
    /// Returns `Some(EnrichedAlert)` at most once per gesture.
    pub fn tick(&mut self) -> Option<AlertIntent> {
        let now = self.clock.now_ms();
        let session = self.session.as_mut()?;
        if session.classified || now < session.deadline_ms {
            return None;
        }
        session.classified = true;
        self.visual = ControlVisual::Pressed;
        debug!(held_ms = now - session.started_at_ms, "hold confirmed");
        Some(AlertIntent::EnrichedAlert)
    }

    /// End the press.
    ///
    /// A release before the threshold yields `QuickAlert`. A release after the
    /// hold was confirmed yields nothing. If the threshold has passed but the
    /// host has not ticked yet, the overdue timer is honoured first, so the
    /// gesture still counts as sustained.
    pub fn release(&mut self) -> Option<AlertIntent> {
        let overdue = self.tick();
        self.visual = ControlVisual::Normal;
        let session = self.session.take()?;
        if overdue.is_some() {
            return overdue;
        }
        if session.classified {
            debug!("release after confirmed hold");
            return None;
        }
        debug!(
            held_ms = self.clock.now_ms().saturating_sub(session.started_at_ms),
            "quick release"
        );
        Some(AlertIntent::QuickAlert)
    }

    /// Return the control to its resting look.
    pub fn reset_visual(&mut self) {
        self.visual = ControlVisual::Normal;
    }
}
