//! Mood-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, JournalEntryId, ValidationError};

/// Errors raised by the mood application handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodError {
    /// Journal entry to label was not found.
    JournalEntryNotFound(JournalEntryId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl MoodError {
    pub fn journal_entry_not_found(id: JournalEntryId) -> Self {
        MoodError::JournalEntryNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MoodError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        MoodError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            MoodError::JournalEntryNotFound(_) => ErrorCode::JournalEntryNotFound,
            MoodError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MoodError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            MoodError::JournalEntryNotFound(id) => format!("Journal entry not found: {}", id),
            MoodError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MoodError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MoodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MoodError {}

impl From<DomainError> for MoodError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => MoodError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::JournalEntryNotFound => match err
                .details
                .get("entry_id")
                .and_then(|id| id.parse::<JournalEntryId>().ok())
            {
                Some(id) => MoodError::JournalEntryNotFound(id),
                None => MoodError::Infrastructure(err.to_string()),
            },
            _ => MoodError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for MoodError {
    fn from(err: ValidationError) -> Self {
        MoodError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
