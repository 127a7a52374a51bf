//! GetCurrentMoodHandler - Command handler for the fused current mood.
//!
//! Despite being a read from the caller's point of view this is a command:
//! it labels the latest journal entry and stores a `fused` profile.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::mood::{
    BehavioralMoodPredictor, FusionWeights, LookbackDays, MoodError, MoodFusion, MoodLabel,
    MoodProfile, TextMoodAnalyzer,
};
use crate::ports::{ActivityReader, MoodProfileRepository};

/// Command to compute the user's current mood.
#[derive(Debug, Clone)]
pub struct GetCurrentMoodCommand {
    pub user_id: UserId,
    /// Analyze the most recent journal entry.
    pub use_text: bool,
    /// Predict from recent task and journaling activity.
    pub use_behavioral: bool,
}

impl GetCurrentMoodCommand {
    /// Both sources enabled.
    pub fn all_sources(user_id: UserId) -> Self {
        Self {
            user_id,
            use_text: true,
            use_behavioral: true,
        }
    }
}

/// Handler for the current fused mood.
pub struct GetCurrentMoodHandler {
    analyzer: TextMoodAnalyzer,
    fusion: MoodFusion,
    activity: Arc<dyn ActivityReader>,
    repository: Arc<dyn MoodProfileRepository>,
    days_back: LookbackDays,
    weights: FusionWeights,
}

impl GetCurrentMoodHandler {
    pub fn new(
        analyzer: TextMoodAnalyzer,
        activity: Arc<dyn ActivityReader>,
        repository: Arc<dyn MoodProfileRepository>,
        days_back: LookbackDays,
        weights: FusionWeights,
    ) -> Self {
        Self {
            analyzer,
            fusion: MoodFusion::new(),
            activity,
            repository,
            days_back,
            weights,
        }
    }

    pub async fn handle(&self, cmd: GetCurrentMoodCommand) -> Result<MoodProfile, MoodError> {
        // 1. Text estimate from the latest journal entry
        let text = if cmd.use_text {
            match self.activity.latest_journal_entry(&cmd.user_id).await? {
                Some(entry) => {
                    let estimate = self.analyzer.analyze(&entry.content);
                    if entry.mood_label.is_none() {
                        let label = MoodLabel::from_valence(estimate.valence());
                        self.activity.set_journal_mood_label(&entry.id, label).await?;
                        tracing::debug!(entry_id = %entry.id, %label, "Labelled journal entry");
                    }
                    Some(estimate)
                }
                None => None,
            }
        } else {
            None
        };

        // 2. Behavioral estimate
        let behavioral = if cmd.use_behavioral {
            let window = self
                .activity
                .behavioral_window(&cmd.user_id, self.days_back, Timestamp::now())
                .await?;
            Some(BehavioralMoodPredictor::new(self.days_back).predict(&window))
        } else {
            None
        };

        // 3. Fuse and persist
        let fused = self
            .fusion
            .fuse(text.as_ref(), behavioral.as_ref(), &self.weights);
        tracing::debug!(
            user_id = %cmd.user_id,
            valence = fused.valence(),
            arousal = fused.arousal(),
            confidence = fused.confidence(),
            source = %fused.source(),
            "Fused current mood"
        );

        let profile = MoodProfile::from_fused(cmd.user_id, &fused);
        self.repository.save(&profile).await?;

        Ok(profile)
    }
}
