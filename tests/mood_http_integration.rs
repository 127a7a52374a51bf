//! Integration tests for mood HTTP endpoints.
//!
//! Drives the full router (auth middleware included) with in-memory storage
//! and the mock session validator.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use friday::adapters::http::{
    api_router, AuthState, MoodAppState, MoodSettings, DEFAULT_API_PREFIX,
};
use friday::adapters::{InMemoryActivityReader, InMemoryMoodProfileRepository, MockSessionValidator};
use friday::domain::foundation::{JournalEntryId, TaskId, Timestamp, UserId};
use friday::domain::mood::{JournalEntry, MoodLabel, TaskRecord, TaskStatus};

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOKEN: &str = "test-token";
const USER: &str = "user-42";

struct TestApp {
    router: Router,
    repository: Arc<InMemoryMoodProfileRepository>,
    activity: Arc<InMemoryActivityReader>,
}

fn test_app() -> TestApp {
    let repository = Arc::new(InMemoryMoodProfileRepository::new());
    let activity = Arc::new(InMemoryActivityReader::new());
    let state = MoodAppState::new(repository.clone(), activity.clone(), MoodSettings::default());
    let auth: AuthState = Arc::new(MockSessionValidator::new().with_test_user(TOKEN, USER));

    TestApp {
        router: api_router(state, auth, DEFAULT_API_PREFIX),
        repository,
        activity,
    }
}

fn user() -> UserId {
    UserId::new(USER).unwrap()
}

fn authed(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn task(status: TaskStatus, created_days_ago: i64) -> TaskRecord {
    TaskRecord {
        id: TaskId::new(),
        user_id: user(),
        title: "task".to_string(),
        due_date: None,
        estimated_minutes: Some(30),
        status,
        created_at: Timestamp::now().minus_days(created_days_ago),
    }
}

// =============================================================================
// Service Routes
// =============================================================================

#[tokio::test]
async fn root_and_health_need_no_auth() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Friday API");

    let (status, body) = send(
        &app.router,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn mood_routes_require_a_token() {
    let app = test_app();
    let request = Request::builder()
        .uri("/api/v1/mood/history")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error_code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let app = test_app();
    let request = Request::builder()
        .uri("/api/v1/mood/history")
        .header(header::AUTHORIZATION, "Bearer someone-else")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Analyze Text
// =============================================================================

#[tokio::test]
async fn analyze_text_stores_and_returns_text_profile() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(
            Method::POST,
            "/api/v1/mood/analyze-text",
            Some(json!({ "text": "I am happy" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "text");
    assert_eq!(body["user_id"], USER);
    assert_eq!(body["valence"], 0.8);
    assert_eq!(body["confidence"], 0.3);
    assert_eq!(body["metadata"]["text_length"], 10);
    assert_eq!(body["metadata"]["emotions"][0]["emotion"], "happy");
    assert_eq!(app.repository.count().await, 1);
}

#[tokio::test]
async fn analyze_blank_text_returns_neutral_sentinel() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(
            Method::POST,
            "/api/v1/mood/analyze-text",
            Some(json!({ "text": "   " })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valence"], 0.0);
    assert_eq!(body["arousal"], 0.3);
    assert_eq!(body["confidence"], 0.0);
}

// =============================================================================
// Predict Behavioral
// =============================================================================

#[tokio::test]
async fn predict_behavioral_uses_activity() {
    let app = test_app();
    for _ in 0..4 {
        app.activity.add_task(task(TaskStatus::Completed, 1)).await;
    }

    let (status, body) = send(
        &app.router,
        authed(Method::POST, "/api/v1/mood/predict-behavioral?days_back=7", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "behavioral");
    assert_eq!(body["metadata"]["completion_rate"], 1.0);
    assert!(body["valence"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn predict_behavioral_rejects_zero_days() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(Method::POST, "/api/v1/mood/predict-behavioral?days_back=0", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "days_back");
    assert_eq!(app.repository.count().await, 0);
}

#[tokio::test]
async fn predict_behavioral_rejects_window_past_maximum() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(Method::POST, "/api/v1/mood/predict-behavioral?days_back=4294967295", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "days_back");
    assert_eq!(app.repository.count().await, 0);
}

#[tokio::test]
async fn predict_behavioral_rejects_malformed_query_as_json() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(Method::POST, "/api/v1/mood/predict-behavioral?days_back=-1", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "query");
}

// =============================================================================
// Current Mood
// =============================================================================

#[tokio::test]
async fn current_mood_fuses_and_labels_latest_journal_entry() {
    let app = test_app();
    let entry_id = JournalEntryId::new();
    app.activity
        .add_journal_entry(JournalEntry {
            id: entry_id,
            user_id: user(),
            content: "I am happy".to_string(),
            mood_label: None,
            created_at: Timestamp::now(),
        })
        .await;

    let (status, body) = send(&app.router, authed(Method::GET, "/api/v1/mood/current", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fused");
    assert!(body["metadata"]["components"]["text"].is_object());
    assert!(body["metadata"]["components"]["behavioral"].is_object());

    let entry = app.activity.journal_entry(&entry_id).await.unwrap();
    assert_eq!(entry.mood_label, Some(MoodLabel::Positive));
}

#[tokio::test]
async fn current_mood_without_sources_is_neutral() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(
            Method::GET,
            "/api/v1/mood/current?use_text=false&use_behavioral=false",
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valence"], 0.0);
    assert_eq!(body["arousal"], 0.3);
    assert_eq!(body["confidence"], 0.0);
    assert_eq!(body["metadata"]["source_breakdown"], "none");
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn history_lists_own_profiles_newest_first() {
    let app = test_app();
    for text in ["I am happy", "I am sad"] {
        let (status, _) = send(
            &app.router,
            authed(
                Method::POST,
                "/api/v1/mood/analyze-text",
                Some(json!({ "text": text })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app.router, authed(Method::GET, "/api/v1/mood/history", None)).await;

    assert_eq!(status, StatusCode::OK);
    let profiles = body.as_array().unwrap();
    assert_eq!(profiles.len(), 2);
    let created_at = |i: usize| {
        profiles[i]["created_at"]
            .as_str()
            .unwrap()
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap()
    };
    assert!(created_at(0) >= created_at(1));
}

#[tokio::test]
async fn history_rejects_zero_days() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(Method::GET, "/api/v1/mood/history?days=0", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn history_rejects_days_past_maximum() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(Method::GET, "/api/v1/mood/history?days=4294967295", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "days");
}

#[tokio::test]
async fn current_mood_rejects_malformed_flag_as_json() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        authed(Method::GET, "/api/v1/mood/current?use_text=maybe", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "query");
}
