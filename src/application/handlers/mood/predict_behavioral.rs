//! PredictBehavioralMoodHandler - Command handler for activity-based mood.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::mood::{BehavioralMoodPredictor, LookbackDays, MoodError, MoodProfile};
use crate::ports::{ActivityReader, MoodProfileRepository};

/// Command to predict mood from recent activity.
#[derive(Debug, Clone)]
pub struct PredictBehavioralMoodCommand {
    pub user_id: UserId,
    /// Window length; the configured default when `None`.
    pub days_back: Option<u32>,
}

/// Handler for behavioral mood prediction.
pub struct PredictBehavioralMoodHandler {
    activity: Arc<dyn ActivityReader>,
    repository: Arc<dyn MoodProfileRepository>,
    default_days_back: LookbackDays,
}

impl PredictBehavioralMoodHandler {
    pub fn new(
        activity: Arc<dyn ActivityReader>,
        repository: Arc<dyn MoodProfileRepository>,
        default_days_back: LookbackDays,
    ) -> Self {
        Self {
            activity,
            repository,
            default_days_back,
        }
    }

    pub async fn handle(&self, cmd: PredictBehavioralMoodCommand) -> Result<MoodProfile, MoodError> {
        let days_back = match cmd.days_back {
            Some(days) => LookbackDays::new(days)?,
            None => self.default_days_back,
        };

        let window = self
            .activity
            .behavioral_window(&cmd.user_id, days_back, Timestamp::now())
            .await?;
        let estimate = BehavioralMoodPredictor::new(days_back).predict(&window);
        tracing::debug!(
            user_id = %cmd.user_id,
            days_back = days_back.value(),
            valence = estimate.valence(),
            arousal = estimate.arousal(),
            confidence = estimate.confidence(),
            "Predicted behavioral mood"
        );

        let profile = MoodProfile::from_behavioral(cmd.user_id, &estimate);
        self.repository.save(&profile).await?;

        Ok(profile)
    }
}
