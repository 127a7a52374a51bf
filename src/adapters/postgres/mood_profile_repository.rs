//! PostgreSQL implementation of MoodProfileRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, MoodProfileId, Timestamp, UserId};
use crate::domain::mood::{MoodProfile, MoodProfileSource};
use crate::ports::MoodProfileRepository;

use super::column;

/// PostgreSQL implementation of MoodProfileRepository.
#[derive(Clone)]
pub struct PostgresMoodProfileRepository {
    pool: PgPool,
}

impl PostgresMoodProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MoodProfileRepository for PostgresMoodProfileRepository {
    async fn save(&self, profile: &MoodProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO mood_profiles (
                id, user_id, valence, arousal, source, confidence, metadata, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.user_id().as_str())
        .bind(profile.valence())
        .bind(profile.arousal())
        .bind(profile.source().as_str())
        .bind(profile.confidence())
        .bind(profile.metadata())
        .bind(profile.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert mood profile");
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert mood profile: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_since(
        &self,
        user_id: &UserId,
        since: Timestamp,
    ) -> Result<Vec<MoodProfile>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, valence, arousal, source, confidence, metadata, created_at
            FROM mood_profiles
            WHERE user_id = $1 AND created_at >= $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .bind(since.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch mood profiles: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_profile).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<MoodProfile, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let valence: f64 = column(&row, "valence")?;
    let arousal: f64 = column(&row, "arousal")?;
    let confidence: f64 = column(&row, "confidence")?;
    let source: String = column(&row, "source")?;
    let metadata: serde_json::Value = column(&row, "metadata")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    let source = parse_source(&source)?;
    let user_id = UserId::new(user_id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
    })?;

    Ok(MoodProfile::reconstitute(
        MoodProfileId::from_uuid(id),
        user_id,
        valence,
        arousal,
        confidence,
        source,
        metadata,
        Timestamp::from_datetime(created_at),
    ))
}

fn parse_source(value: &str) -> Result<MoodProfileSource, DomainError> {
    value.parse().map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid mood profile source: {}", e),
        )
    })
}
