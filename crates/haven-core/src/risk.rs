//! Area risk score derived from the number of recent reports.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Good,
    Caution,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl RiskLevel {
    /// ≤1 report is `Good`, ≤4 is `Caution`, anything more is `HighRisk`.
    pub fn from_report_count(count: usize) -> Self {
        match count {
            0..=1 => RiskLevel::Good,
            2..=4 => RiskLevel::Caution,
            _ => RiskLevel::HighRisk,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Good => "Good",
            RiskLevel::Caution => "Caution",
            RiskLevel::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
