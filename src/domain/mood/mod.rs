//! Mood inference engine.
//!
//! Three pure components make up the pipeline:
//!
//! - `TextMoodAnalyzer` - lexicon scoring of free text
//! - `BehavioralMoodPredictor` - scoring of task and journaling activity
//! - `MoodFusion` - confidence-weighted combination of the two
//!
//! Every component is synchronous, holds no cross-call state and is safe to
//! share across threads. Loading activity and storing results is left to the
//! application layer.

mod activity;
mod behavioral;
mod errors;
mod estimate;
mod fusion;
mod lexicon;
mod profile;
mod text_analyzer;

pub use activity::{window_cutoff, JournalEntry, TaskRecord, TaskStatus, UPCOMING_DEADLINE_DAYS};
pub use behavioral::{
    BehavioralMoodPredictor, BehavioralWindow, LookbackDays, DEFAULT_DAYS_BACK, MAX_LOOKBACK_DAYS,
};
pub use errors::MoodError;
pub use estimate::{
    BehavioralFeatures, EmotionMatch, MoodEstimate, MoodEvidence, NEUTRAL_AROUSAL,
    NEUTRAL_VALENCE,
};
pub use fusion::{FusedMoodEstimate, FusionComponents, FusionSource, FusionWeights, MoodFusion};
pub use lexicon::{EmotionScore, MoodLexicon};
pub use profile::{MoodLabel, MoodProfile, MoodProfileSource};
pub use text_analyzer::TextMoodAnalyzer;

/// Analyzes text with the default lexicon.
pub fn analyze_text(text: &str) -> MoodEstimate {
    TextMoodAnalyzer::new().analyze(text)
}

/// Predicts mood from a window aggregated over `days_back` days.
pub fn predict_behavioral(window: &BehavioralWindow, days_back: LookbackDays) -> MoodEstimate {
    BehavioralMoodPredictor::new(days_back).predict(window)
}

/// Fuses up to two estimates.
pub fn fuse(
    text: Option<&MoodEstimate>,
    behavioral: Option<&MoodEstimate>,
    weights: Option<&FusionWeights>,
) -> FusedMoodEstimate {
    MoodFusion::new().fuse(text, behavioral, weights.unwrap_or(&FusionWeights::default()))
}
