//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod mood;

pub use mood::{
    AnalyzeTextMoodCommand, AnalyzeTextMoodHandler, GetCurrentMoodCommand, GetCurrentMoodHandler,
    GetMoodHistoryHandler, GetMoodHistoryQuery, PredictBehavioralMoodCommand,
    PredictBehavioralMoodHandler,
};
