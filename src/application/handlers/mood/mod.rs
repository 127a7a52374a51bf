//! Mood command and query handlers.

mod analyze_text;
mod get_current_mood;
mod get_mood_history;
mod predict_behavioral;

pub use analyze_text::{AnalyzeTextMoodCommand, AnalyzeTextMoodHandler};
pub use get_current_mood::{GetCurrentMoodCommand, GetCurrentMoodHandler};
pub use get_mood_history::{GetMoodHistoryHandler, GetMoodHistoryQuery};
pub use predict_behavioral::{PredictBehavioralMoodCommand, PredictBehavioralMoodHandler};
