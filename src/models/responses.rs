use serde::{Deserialize, Serialize};
use std::fmt;
use crate::models::domain::{CompatibilityResult, CompatibilityTier, RankedListing};

/// Response for the pairwise score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: CompatibilityResult,
    pub tier: CompatibilityTier,
    pub badge: String,
}

impl From<CompatibilityResult> for ScoreResponse {
    fn from(result: CompatibilityResult) -> Self {
        Self {
            tier: result.tier(),
            badge: result.badge(),
            result,
        }
    }
}

/// Response for the listing ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankListingsResponse {
    pub listings: Vec<RankedListing>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: 400,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}
