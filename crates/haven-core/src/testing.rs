//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use crate::dispatch::{AlertPayload, AlertTransport, GeoPoint, LocationProvider, Platform};
use crate::error::{CoreError, LocationError};

/// Answers questions from a script. Unscripted questions get "no"/`None`.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    confirm_answers: VecDeque<bool>,
    text_answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
    pub notices: Vec<String>,
    pub calls: Vec<String>,
}

impl ScriptedPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirms(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirm_answers.extend(answers);
        self
    }

    pub fn answers<'a>(mut self, answers: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        self.text_answers
            .extend(answers.into_iter().map(|a| a.map(str::to_string)));
        self
    }
}

impl Platform for ScriptedPlatform {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }

    fn prompt_text(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.text_answers.pop_front().flatten()
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn place_call(&mut self, number: &str) -> Result<(), CoreError> {
        self.calls.push(number.to_string());
        Ok(())
    }
}

/// Records every payload as JSON and answers with a canned result.
#[derive(Debug)]
pub struct RecordingTransport {
    sent: Mutex<Vec<serde_json::Value>>,
    failure: Option<String>,
}

impl RecordingTransport {
    pub fn ok() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<serde_json::Value> {
        self.sent.lock().unwrap().clone()
    }
}

impl AlertTransport for RecordingTransport {
    fn send_sos(
        &self,
        payload: &AlertPayload,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send {
        self.sent
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload).unwrap());
        let result = match &self.failure {
            Some(reason) => Err(CoreError::Custom(reason.clone())),
            None => Ok(serde_json::json!({ "ok": true })),
        };
        async move { result }
    }
}

/// Accepts the payload and never answers.
pub struct StalledTransport;

impl AlertTransport for StalledTransport {
    fn send_sos(
        &self,
        _payload: &AlertPayload,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send {
        std::future::pending()
    }
}

/// Never answers.
pub struct SilentLocation;

impl LocationProvider for SilentLocation {
    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send {
        std::future::pending()
    }
}

/// Permission refused.
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send {
        async { Err(LocationError::Denied) }
    }
}
