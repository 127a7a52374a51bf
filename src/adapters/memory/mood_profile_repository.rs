//! In-memory implementation of MoodProfileRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::mood::MoodProfile;
use crate::ports::MoodProfileRepository;

/// Stores mood profiles in a shared vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMoodProfileRepository {
    profiles: Arc<RwLock<Vec<MoodProfile>>>,
}

impl InMemoryMoodProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored profiles
    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// All stored profiles in insertion order.
    pub async fn all(&self) -> Vec<MoodProfile> {
        self.profiles.read().await.clone()
    }
}

#[async_trait]
impl MoodProfileRepository for InMemoryMoodProfileRepository {
    async fn save(&self, profile: &MoodProfile) -> Result<(), DomainError> {
        self.profiles.write().await.push(profile.clone());
        Ok(())
    }

    async fn find_since(
        &self,
        user_id: &UserId,
        since: Timestamp,
    ) -> Result<Vec<MoodProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        let mut found: Vec<MoodProfile> = profiles
            .iter()
            .filter(|p| p.user_id() == user_id && !p.created_at().is_before(&since))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(found)
    }
}
