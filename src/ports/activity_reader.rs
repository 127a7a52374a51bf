//! Activity reader port (read side of tasks and journal entries).
//!
//! The mood handlers only ever need aggregated task counters, the most recent
//! journal entry and the ability to label that entry. Task and journal CRUD
//! live elsewhere.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, JournalEntryId, Timestamp, UserId};
use crate::domain::mood::{BehavioralWindow, JournalEntry, LookbackDays, MoodLabel};

/// Reader port for user activity consumed by the mood engine.
#[async_trait]
pub trait ActivityReader: Send + Sync {
    /// Aggregate a user's tasks and journal entries into window counters.
    ///
    /// Task and journal totals cover `days_back` days before `now`; deadline
    /// and workload counters cover every open task.
    async fn behavioral_window(
        &self,
        user_id: &UserId,
        days_back: LookbackDays,
        now: Timestamp,
    ) -> Result<BehavioralWindow, DomainError>;

    /// The user's most recently created journal entry, if any.
    async fn latest_journal_entry(
        &self,
        user_id: &UserId,
    ) -> Result<Option<JournalEntry>, DomainError>;

    /// Set the mood label of a journal entry.
    ///
    /// # Errors
    ///
    /// - `JournalEntryNotFound` if the entry doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn set_journal_mood_label(
        &self,
        entry_id: &JournalEntryId,
        label: MoodLabel,
    ) -> Result<(), DomainError>;
}
