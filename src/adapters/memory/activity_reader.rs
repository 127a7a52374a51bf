//! In-memory implementation of ActivityReader.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, JournalEntryId, Timestamp, UserId};
use crate::domain::mood::{BehavioralWindow, JournalEntry, LookbackDays, MoodLabel, TaskRecord};
use crate::ports::ActivityReader;

/// Holds tasks and journal entries in memory and aggregates them on read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityReader {
    tasks: Arc<RwLock<Vec<TaskRecord>>>,
    journals: Arc<RwLock<Vec<JournalEntry>>>,
}

impl InMemoryActivityReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_task(&self, task: TaskRecord) {
        self.tasks.write().await.push(task);
    }

    pub async fn add_journal_entry(&self, entry: JournalEntry) {
        self.journals.write().await.push(entry);
    }

    pub async fn journal_entry(&self, id: &JournalEntryId) -> Option<JournalEntry> {
        self.journals
            .read()
            .await
            .iter()
            .find(|j| &j.id == id)
            .cloned()
    }
}

#[async_trait]
impl ActivityReader for InMemoryActivityReader {
    async fn behavioral_window(
        &self,
        user_id: &UserId,
        days_back: LookbackDays,
        now: Timestamp,
    ) -> Result<BehavioralWindow, DomainError> {
        let tasks = self.tasks.read().await;
        let journals = self.journals.read().await;

        BehavioralWindow::aggregate(
            tasks.iter().filter(|t| &t.user_id == user_id),
            journals.iter().filter(|j| &j.user_id == user_id),
            now,
            days_back,
        )
        .map_err(DomainError::from)
    }

    async fn latest_journal_entry(
        &self,
        user_id: &UserId,
    ) -> Result<Option<JournalEntry>, DomainError> {
        let journals = self.journals.read().await;
        Ok(journals
            .iter()
            .filter(|j| &j.user_id == user_id)
            .max_by_key(|j| j.created_at)
            .cloned())
    }

    async fn set_journal_mood_label(
        &self,
        entry_id: &JournalEntryId,
        label: MoodLabel,
    ) -> Result<(), DomainError> {
        let mut journals = self.journals.write().await;
        let entry = journals.iter_mut().find(|j| &j.id == entry_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::JournalEntryNotFound,
                format!("Journal entry not found: {}", entry_id),
            )
            .with_detail("entry_id", entry_id.to_string())
        })?;
        entry.mood_label = Some(label);
        Ok(())
    }
}
