//! AnalyzeTextMoodHandler - Command handler for scoring free text.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::mood::{MoodError, MoodProfile, TextMoodAnalyzer};
use crate::ports::MoodProfileRepository;

/// Command to analyze a piece of text.
#[derive(Debug, Clone)]
pub struct AnalyzeTextMoodCommand {
    pub user_id: UserId,
    pub text: String,
}

/// Handler for text mood analysis.
///
/// Scores the text and stores the result as a `text` profile.
pub struct AnalyzeTextMoodHandler {
    analyzer: TextMoodAnalyzer,
    repository: Arc<dyn MoodProfileRepository>,
}

impl AnalyzeTextMoodHandler {
    pub fn new(analyzer: TextMoodAnalyzer, repository: Arc<dyn MoodProfileRepository>) -> Self {
        Self {
            analyzer,
            repository,
        }
    }

    pub async fn handle(&self, cmd: AnalyzeTextMoodCommand) -> Result<MoodProfile, MoodError> {
        let estimate = self.analyzer.analyze(&cmd.text);
        tracing::debug!(
            user_id = %cmd.user_id,
            valence = estimate.valence(),
            arousal = estimate.arousal(),
            confidence = estimate.confidence(),
            "Analyzed text mood"
        );

        let profile = MoodProfile::from_text(cmd.user_id, &estimate, &cmd.text);
        self.repository.save(&profile).await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
    use crate::domain::mood::MoodProfileSource;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockMoodProfileRepository {
        saved: Mutex<Vec<MoodProfile>>,
        fail_save: bool,
    }

    impl MockMoodProfileRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved(&self) -> Vec<MoodProfile> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MoodProfileRepository for MockMoodProfileRepository {
        async fn save(&self, profile: &MoodProfile) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated save failure",
                ));
            }
            self.saved.lock().unwrap().push(profile.clone());
            Ok(())
        }

        async fn find_since(
            &self,
            _user_id: &UserId,
            _since: Timestamp,
        ) -> Result<Vec<MoodProfile>, DomainError> {
            Ok(Vec::new())
        }
    }

    fn command(text: &str) -> AnalyzeTextMoodCommand {
        AnalyzeTextMoodCommand {
            user_id: UserId::new("user-1").unwrap(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn stores_and_returns_text_profile() {
        let repo = Arc::new(MockMoodProfileRepository::new());
        let handler = AnalyzeTextMoodHandler::new(TextMoodAnalyzer::new(), repo.clone());

        let profile = handler.handle(command("I am not happy")).await.unwrap();

        assert_eq!(profile.source(), MoodProfileSource::Text);
        assert_eq!(profile.valence(), -0.4);
        assert_eq!(profile.confidence(), 0.3);
        assert_eq!(repo.saved().len(), 1);
        assert_eq!(repo.saved()[0].id(), profile.id());
    }

    #[tokio::test]
    async fn empty_text_stores_sentinel_profile() {
        let repo = Arc::new(MockMoodProfileRepository::new());
        let handler = AnalyzeTextMoodHandler::new(TextMoodAnalyzer::new(), repo.clone());

        let profile = handler.handle(command("   ")).await.unwrap();

        assert_eq!(profile.valence(), 0.0);
        assert_eq!(profile.arousal(), 0.3);
        assert_eq!(profile.confidence(), 0.0);
        assert_eq!(profile.metadata()["text_length"], 3);
    }

    #[tokio::test]
    async fn save_failure_is_infrastructure_error() {
        let repo = Arc::new(MockMoodProfileRepository::failing());
        let handler = AnalyzeTextMoodHandler::new(TextMoodAnalyzer::new(), repo);

        let err = handler.handle(command("happy")).await.unwrap_err();
        assert!(matches!(err, MoodError::Infrastructure(_)));
    }
}
