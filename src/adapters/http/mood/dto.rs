//! Data Transfer Objects for mood HTTP endpoints.
//!
//! These types handle JSON serialization for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::MoodProfileId;
use crate::domain::mood::{MoodProfile, MoodProfileSource};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for `POST /mood/analyze-text`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// Query string for `POST /mood/predict-behavioral`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictBehavioralParams {
    pub days_back: Option<u32>,
}

/// Query string for `GET /mood/current`. Both sources default to on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentMoodParams {
    pub use_text: Option<bool>,
    pub use_behavioral: Option<bool>,
}

/// Query string for `GET /mood/history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodHistoryParams {
    pub days: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A stored mood profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodProfileResponse {
    pub id: MoodProfileId,
    pub user_id: String,
    pub valence: f64,
    pub arousal: f64,
    pub confidence: f64,
    pub source: MoodProfileSource,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<&MoodProfile> for MoodProfileResponse {
    fn from(profile: &MoodProfile) -> Self {
        Self {
            id: *profile.id(),
            user_id: profile.user_id().to_string(),
            valence: profile.valence(),
            arousal: profile.arousal(),
            confidence: profile.confidence(),
            source: profile.source(),
            metadata: profile.metadata().clone(),
            created_at: *profile.created_at().as_datetime(),
        }
    }
}

impl From<MoodProfile> for MoodProfileResponse {
    fn from(profile: MoodProfile) -> Self {
        Self::from(&profile)
    }
}

/// Service banner for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Body for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
