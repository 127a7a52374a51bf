//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresMoodProfileRepository` - Stored mood results
//! - `PostgresActivityReader` - Task/journal aggregation and journal labelling

mod activity_reader;
mod mood_profile_repository;

pub use activity_reader::PostgresActivityReader;
pub use mood_profile_repository::PostgresMoodProfileRepository;

use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reads a column, mapping decode failures to a database error.
fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}
