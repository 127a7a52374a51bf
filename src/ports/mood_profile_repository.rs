//! Mood profile repository port.
//!
//! Stores the results of text analyses, behavioral predictions and fused
//! estimates so a user's mood history can be read back.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::mood::MoodProfile;

/// Repository port for stored mood profiles.
#[async_trait]
pub trait MoodProfileRepository: Send + Sync {
    /// Save a new profile.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, profile: &MoodProfile) -> Result<(), DomainError>;

    /// Profiles for `user_id` created at or after `since`, newest first.
    async fn find_since(
        &self,
        user_id: &UserId,
        since: Timestamp,
    ) -> Result<Vec<MoodProfile>, DomainError>;
}
