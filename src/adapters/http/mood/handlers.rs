//! HTTP handlers for mood endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::mood::{
    AnalyzeTextMoodCommand, AnalyzeTextMoodHandler, GetCurrentMoodCommand, GetCurrentMoodHandler,
    GetMoodHistoryHandler, GetMoodHistoryQuery, PredictBehavioralMoodCommand,
    PredictBehavioralMoodHandler,
};
use crate::domain::mood::{FusionWeights, LookbackDays, MoodError, TextMoodAnalyzer};
use crate::ports::{ActivityReader, MoodProfileRepository};

use super::dto::{
    AnalyzeTextRequest, CurrentMoodParams, ErrorResponse, MoodHistoryParams,
    MoodProfileResponse, PredictBehavioralParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Defaults applied when a request leaves a parameter out.
#[derive(Debug, Clone, Copy)]
pub struct MoodSettings {
    pub default_days_back: LookbackDays,
    pub history_days: u32,
    pub weights: FusionWeights,
}

impl Default for MoodSettings {
    fn default() -> Self {
        Self {
            default_days_back: LookbackDays::default(),
            history_days: 30,
            weights: FusionWeights::default(),
        }
    }
}

/// Shared state for the mood routes.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct MoodAppState {
    pub mood_profile_repository: Arc<dyn MoodProfileRepository>,
    pub activity_reader: Arc<dyn ActivityReader>,
    pub analyzer: TextMoodAnalyzer,
    pub settings: MoodSettings,
}

impl MoodAppState {
    pub fn new(
        mood_profile_repository: Arc<dyn MoodProfileRepository>,
        activity_reader: Arc<dyn ActivityReader>,
        settings: MoodSettings,
    ) -> Self {
        Self {
            mood_profile_repository,
            activity_reader,
            analyzer: TextMoodAnalyzer::new(),
            settings,
        }
    }

    pub fn analyze_text_handler(&self) -> AnalyzeTextMoodHandler {
        AnalyzeTextMoodHandler::new(self.analyzer.clone(), self.mood_profile_repository.clone())
    }

    pub fn predict_behavioral_handler(&self) -> PredictBehavioralMoodHandler {
        PredictBehavioralMoodHandler::new(
            self.activity_reader.clone(),
            self.mood_profile_repository.clone(),
            self.settings.default_days_back,
        )
    }

    pub fn current_mood_handler(&self) -> GetCurrentMoodHandler {
        GetCurrentMoodHandler::new(
            self.analyzer.clone(),
            self.activity_reader.clone(),
            self.mood_profile_repository.clone(),
            self.settings.default_days_back,
            self.settings.weights,
        )
    }

    pub fn history_handler(&self) -> GetMoodHistoryHandler {
        GetMoodHistoryHandler::new(self.mood_profile_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/mood/analyze-text - Score free text and store a text profile
pub async fn analyze_text(
    State(state): State<MoodAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<impl IntoResponse, MoodApiError> {
    let cmd = AnalyzeTextMoodCommand {
        user_id: user.id,
        text: request.text,
    };

    let profile = state.analyze_text_handler().handle(cmd).await?;
    Ok(Json(MoodProfileResponse::from(profile)))
}

/// POST /api/v1/mood/predict-behavioral - Predict from recent activity
pub async fn predict_behavioral(
    State(state): State<MoodAppState>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<PredictBehavioralParams>, QueryRejection>,
) -> Result<impl IntoResponse, MoodApiError> {
    let Query(params) = params?;
    let cmd = PredictBehavioralMoodCommand {
        user_id: user.id,
        days_back: params.days_back,
    };

    let profile = state.predict_behavioral_handler().handle(cmd).await?;
    Ok(Json(MoodProfileResponse::from(profile)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/mood/current - Fuse the latest journal entry with recent activity
pub async fn get_current_mood(
    State(state): State<MoodAppState>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<CurrentMoodParams>, QueryRejection>,
) -> Result<impl IntoResponse, MoodApiError> {
    let Query(params) = params?;
    let cmd = GetCurrentMoodCommand {
        user_id: user.id,
        use_text: params.use_text.unwrap_or(true),
        use_behavioral: params.use_behavioral.unwrap_or(true),
    };

    let profile = state.current_mood_handler().handle(cmd).await?;
    Ok(Json(MoodProfileResponse::from(profile)))
}

/// GET /api/v1/mood/history - Stored profiles, newest first
pub async fn get_mood_history(
    State(state): State<MoodAppState>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<MoodHistoryParams>, QueryRejection>,
) -> Result<impl IntoResponse, MoodApiError> {
    let Query(params) = params?;
    let query = GetMoodHistoryQuery {
        user_id: user.id,
        days: params.days.unwrap_or(state.settings.history_days),
    };

    let profiles = state.history_handler().handle(query).await?;
    let response: Vec<MoodProfileResponse> =
        profiles.iter().map(MoodProfileResponse::from).collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for mood errors.
#[derive(Debug)]
pub struct MoodApiError(MoodError);

impl From<MoodError> for MoodApiError {
    fn from(err: MoodError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::DomainError> for MoodApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        Self(MoodError::from(err))
    }
}

impl From<QueryRejection> for MoodApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(MoodError::validation("query", rejection.body_text()))
    }
}

impl IntoResponse for MoodApiError {
    fn into_response(self) -> axum::response::Response {
        let message = self.0.message();
        let (status, body) = match &self.0 {
            MoodError::ValidationFailed { field, .. } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    "VALIDATION_FAILED",
                    message,
                    serde_json::json!({ "field": field }),
                ),
            ),
            MoodError::JournalEntryNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("JOURNAL_ENTRY_NOT_FOUND", message),
            ),
            MoodError::Infrastructure(_) => {
                tracing::error!(error = %self.0, "Mood request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", message),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
