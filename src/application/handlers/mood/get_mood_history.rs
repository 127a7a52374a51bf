//! GetMoodHistoryHandler - Query handler for stored mood profiles.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::mood::{MoodError, MoodProfile, MAX_LOOKBACK_DAYS};
use crate::ports::MoodProfileRepository;

/// Query for a user's recent mood profiles.
#[derive(Debug, Clone)]
pub struct GetMoodHistoryQuery {
    pub user_id: UserId,
    /// How many days back to look, between 1 and `MAX_LOOKBACK_DAYS`.
    pub days: u32,
}

/// Handler for mood history.
pub struct GetMoodHistoryHandler {
    repository: Arc<dyn MoodProfileRepository>,
}

impl GetMoodHistoryHandler {
    pub fn new(repository: Arc<dyn MoodProfileRepository>) -> Self {
        Self { repository }
    }

    /// Profiles created within the last `days` days, newest first.
    pub async fn handle(&self, query: GetMoodHistoryQuery) -> Result<Vec<MoodProfile>, MoodError> {
        if query.days == 0 {
            return Err(MoodError::validation("days", "must be at least 1"));
        }
        if query.days > MAX_LOOKBACK_DAYS {
            return Err(MoodError::validation(
                "days",
                format!("must be at most {}", MAX_LOOKBACK_DAYS),
            ));
        }

        let since = Timestamp::now()
            .checked_minus_days(i64::from(query.days))
            .ok_or_else(|| MoodError::validation("days", "reaches before the earliest date"))?;
        let profiles = self.repository.find_since(&query.user_id, since).await?;
        Ok(profiles)
    }
}
