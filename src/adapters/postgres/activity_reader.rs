//! PostgreSQL implementation of ActivityReader.
//!
//! Window counters are computed in SQL with `FILTER` aggregates so a window
//! costs two queries regardless of how many tasks a user has.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, ErrorCode, JournalEntryId, Timestamp, UserId,
};
use crate::domain::mood::{
    window_cutoff, BehavioralWindow, JournalEntry, LookbackDays, MoodLabel,
    UPCOMING_DEADLINE_DAYS,
};
use crate::ports::ActivityReader;

use super::column;

/// PostgreSQL implementation of ActivityReader.
#[derive(Clone)]
pub struct PostgresActivityReader {
    pool: PgPool,
}

impl PostgresActivityReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityReader for PostgresActivityReader {
    async fn behavioral_window(
        &self,
        user_id: &UserId,
        days_back: LookbackDays,
        now: Timestamp,
    ) -> Result<BehavioralWindow, DomainError> {
        let cutoff = window_cutoff(now, days_back)?;
        let horizon = now.plus_days(i64::from(UPCOMING_DEADLINE_DAYS));

        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE created_at >= $2) AS total_tasks,
                COUNT(*) FILTER (WHERE created_at >= $2 AND status = 'completed') AS completed_tasks,
                COUNT(*) FILTER (
                    WHERE status <> 'completed' AND due_date >= $3 AND due_date <= $4
                ) AS upcoming_deadlines,
                COUNT(*) FILTER (WHERE status <> 'completed' AND due_date < $3) AS overdue_tasks,
                COALESCE(
                    SUM(estimated_minutes) FILTER (WHERE status <> 'completed'), 0
                )::BIGINT AS incomplete_minutes
            FROM tasks
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .bind(cutoff.as_datetime())
        .bind(now.as_datetime())
        .bind(horizon.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to aggregate tasks");
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to aggregate tasks: {}", e),
            )
        })?;

        let (journal_entries,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM journal_entries WHERE user_id = $1 AND created_at >= $2",
        )
        .bind(user_id.as_str())
        .bind(cutoff.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to count journal entries: {}", e),
            )
        })?;

        let incomplete_minutes: i64 = column(&row, "incomplete_minutes")?;

        BehavioralWindow::new(
            count(column(&row, "total_tasks")?)?,
            count(column(&row, "completed_tasks")?)?,
            count(column(&row, "upcoming_deadlines")?)?,
            count(column(&row, "overdue_tasks")?)?,
            count(journal_entries)?,
            incomplete_minutes as f64,
        )
        .map_err(DomainError::from)
    }

    async fn latest_journal_entry(
        &self,
        user_id: &UserId,
    ) -> Result<Option<JournalEntry>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, content, mood_label, created_at
            FROM journal_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch latest journal entry: {}", e),
            )
        })?;

        row.map(row_to_journal_entry).transpose()
    }

    async fn set_journal_mood_label(
        &self,
        entry_id: &JournalEntryId,
        label: MoodLabel,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE journal_entries SET mood_label = $2 WHERE id = $1")
            .bind(entry_id.as_uuid())
            .bind(label.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update journal entry: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::JournalEntryNotFound,
                format!("Journal entry not found: {}", entry_id),
            )
            .with_detail("entry_id", entry_id.to_string()));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn count(value: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Count out of range: {}", value),
        )
    })
}

fn row_to_journal_entry(row: sqlx::postgres::PgRow) -> Result<JournalEntry, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let content: String = column(&row, "content")?;
    let mood_label: Option<String> = column(&row, "mood_label")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    let mood_label = mood_label
        .map(|label| label.parse::<MoodLabel>())
        .transpose()
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid mood label: {}", e),
            )
        })?;
    let user_id = UserId::new(user_id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
    })?;

    Ok(JournalEntry {
        id: JournalEntryId::from_uuid(id),
        user_id,
        content,
        mood_label,
        created_at: Timestamp::from_datetime(created_at),
    })
}
