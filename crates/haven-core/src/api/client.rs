//! ApiClient: the backend's JSON HTTP endpoints.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::types::{
    Helpline, HelplinesResponse, Report, ReportAck, ReportSubmission, ReportsResponse, Tip,
    TipsResponse,
};
use crate::dispatch::{AlertPayload, AlertTransport};
use crate::error::{ConfigError, CoreError, Result};
use crate::risk::RiskLevel;

/// Bound on a whole request, connect to parsed body.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Client for the backend API rooted at `base_url`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http_client: Client,
}

impl ApiClient {
    /// Create a client. `base_url` may carry a path prefix.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            key: "api.base_url".into(),
            message: e.to_string(),
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CoreError::Custom(format!("bad endpoint {path}: {e}")))
    }

    pub async fn helplines(&self) -> Result<Vec<Helpline>> {
        let resp: HelplinesResponse = self
            .http_client
            .get(self.endpoint("api/helplines")?)
            .send()
            .await?
            .json()
            .await?;
        Ok(resp.helplines)
    }

    pub async fn tips(&self) -> Result<Vec<Tip>> {
        let resp: TipsResponse = self
            .http_client
            .get(self.endpoint("api/tips")?)
            .send()
            .await?
            .json()
            .await?;
        Ok(resp.tips)
    }

    pub async fn reports(&self) -> Result<Vec<Report>> {
        let resp: ReportsResponse = self
            .http_client
            .get(self.endpoint("api/reports")?)
            .send()
            .await?
            .json()
            .await?;
        Ok(resp.reports)
    }

    /// Fetch reports and bucket their count.
    pub async fn risk_score(&self) -> Result<RiskLevel> {
        let count = self.reports().await?.len();
        debug!(count, "computing risk score");
        Ok(RiskLevel::from_report_count(count))
    }

    /// Submit an incident report. `ok: false` becomes an [`CoreError::Api`].
    pub async fn submit_report(&self, report: &ReportSubmission) -> Result<()> {
        report.validate()?;
        let ack: ReportAck = self
            .http_client
            .post(self.endpoint("api/report")?)
            .json(report)
            .send()
            .await?
            .json()
            .await?;
        if ack.ok {
            Ok(())
        } else {
            Err(CoreError::api(
                "/api/report",
                ack.error.unwrap_or_else(|| "Failed to submit".to_string()),
            ))
        }
    }

    /// Post an alert. Any JSON body counts as delivered, whatever the status.
    pub async fn post_sos(&self, payload: &AlertPayload) -> Result<serde_json::Value> {
        let body = self
            .http_client
            .post(self.endpoint("api/sos")?)
            .json(payload)
            .send()
            .await?
            .json()
            .await?;
        Ok(body)
    }
}

impl AlertTransport for ApiClient {
    fn send_sos(
        &self,
        payload: &AlertPayload,
    ) -> impl Future<Output = Result<serde_json::Value>> + Send {
        self.post_sos(payload)
    }
}
