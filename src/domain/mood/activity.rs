//! Task and journal records consumed by the behavioral predictor.
//!
//! These are read-only views of data owned by the task and journal features.
//! The mood engine only aggregates them into a `BehavioralWindow`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{JournalEntryId, TaskId, Timestamp, UserId, ValidationError};

use super::behavioral::{BehavioralWindow, LookbackDays};
use super::profile::MoodLabel;

/// Days ahead of `now` in which a due date counts as upcoming.
pub const UPCOMING_DEADLINE_DAYS: u32 = 3;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(ValidationError::invalid_value(
                "status",
                format!("unknown task status '{}'", other),
            )),
        }
    }
}

/// A user's task as seen by the mood engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub user_id: UserId,
    pub title: String,
    pub due_date: Option<Timestamp>,
    pub estimated_minutes: Option<u32>,
    pub status: TaskStatus,
    pub created_at: Timestamp,
}

impl TaskRecord {
    fn is_open(&self) -> bool {
        !self.status.is_completed()
    }
}

/// A journal entry as seen by the mood engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    pub user_id: UserId,
    pub content: String,
    pub mood_label: Option<MoodLabel>,
    pub created_at: Timestamp,
}

/// Start of a `days_back` window ending at `now`.
pub fn window_cutoff(
    now: Timestamp,
    days_back: LookbackDays,
) -> Result<Timestamp, ValidationError> {
    now.checked_minus_days(i64::from(days_back.value()))
        .ok_or_else(|| {
            ValidationError::invalid_value("days_back", "reaches before the earliest date")
        })
}

impl BehavioralWindow {
    /// Aggregates raw records into window counters.
    ///
    /// Task totals and journal counts only include records created within
    /// `days_back` of `now`. Deadline counts and outstanding minutes look at
    /// every open task regardless of when it was created.
    pub fn aggregate<'a>(
        tasks: impl IntoIterator<Item = &'a TaskRecord>,
        journals: impl IntoIterator<Item = &'a JournalEntry>,
        now: Timestamp,
        days_back: LookbackDays,
    ) -> Result<Self, ValidationError> {
        let cutoff = window_cutoff(now, days_back)?;
        let horizon = now.plus_days(i64::from(UPCOMING_DEADLINE_DAYS));

        let mut total = 0u32;
        let mut completed = 0u32;
        let mut upcoming = 0u32;
        let mut overdue = 0u32;
        let mut minutes = 0u64;

        for task in tasks {
            if !task.created_at.is_before(&cutoff) {
                total += 1;
                if task.status.is_completed() {
                    completed += 1;
                }
            }

            if !task.is_open() {
                continue;
            }
            if let Some(due) = task.due_date {
                if due.is_before(&now) {
                    overdue += 1;
                } else if !due.is_after(&horizon) {
                    upcoming += 1;
                }
            }
            minutes += u64::from(task.estimated_minutes.unwrap_or(0));
        }

        let journal_count = journals
            .into_iter()
            .filter(|j| !j.created_at.is_before(&cutoff))
            .count() as u32;

        BehavioralWindow::new(total, completed, upcoming, overdue, journal_count, minutes as f64)
    }
}
