mod client;
mod types;

pub use client::{ApiClient, DEFAULT_REQUEST_TIMEOUT};
pub use types::{Helpline, Report, ReportAck, ReportSubmission, Tip};
