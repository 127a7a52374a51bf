//! Axum router configuration for mood endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_text, get_current_mood, get_mood_history, predict_behavioral, MoodAppState,
};

/// Create the mood API router.
///
/// # Routes (all require authentication)
/// - `POST /analyze-text` - Analyze free text
/// - `POST /predict-behavioral?days_back=N` - Predict from recent activity
/// - `GET /current?use_text=&use_behavioral=` - Fused current mood
/// - `GET /history?days=N` - Stored profiles, newest first
pub fn mood_routes() -> Router<MoodAppState> {
    Router::new()
        .route("/analyze-text", post(analyze_text))
        .route("/predict-behavioral", post(predict_behavioral))
        .route("/current", get(get_current_mood))
        .route("/history", get(get_mood_history))
}

/// Create the mood module router, suitable for mounting at `/api/v1`.
pub fn mood_router() -> Router<MoodAppState> {
    Router::new().nest("/mood", mood_routes())
}
