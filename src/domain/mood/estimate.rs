//! Mood estimate value object and its evidence payloads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Valence reported when there is no signal.
pub const NEUTRAL_VALENCE: f64 = 0.0;

/// Arousal reported when there is no signal.
pub const NEUTRAL_AROUSAL: f64 = 0.3;

/// Rounds to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Rounds to the 3 decimal places every estimate is reported with.
pub(crate) fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// One lexicon hit found in analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionMatch {
    pub emotion: String,
    pub valence: f64,
    pub arousal: f64,
    pub negated: bool,
}

/// Features derived from a behavioral window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralFeatures {
    pub completion_rate: f64,
    pub upcoming_tasks: u32,
    pub overdue_tasks: u32,
    pub journaling_frequency: f64,
    pub total_incomplete_minutes: u64,
}

/// Explanatory payload attached to an estimate.
///
/// Informational only; fusion never reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoodEvidence {
    #[default]
    None,
    Text { matches: Vec<EmotionMatch> },
    Behavioral(BehavioralFeatures),
}

impl MoodEvidence {
    pub fn is_empty(&self) -> bool {
        match self {
            MoodEvidence::None => true,
            MoodEvidence::Text { matches } => matches.is_empty(),
            MoodEvidence::Behavioral(_) => false,
        }
    }
}

/// A normalized emotional state estimate.
///
/// Every instance satisfies `valence ∈ [-1, 1]`, `arousal ∈ [0, 1]` and
/// `confidence ∈ [0, 1]`. A confidence of exactly zero means "no signal".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMoodEstimate")]
pub struct MoodEstimate {
    valence: f64,
    arousal: f64,
    confidence: f64,
    evidence: MoodEvidence,
}

impl MoodEstimate {
    /// The canonical "unknown" estimate.
    pub fn neutral() -> Self {
        Self {
            valence: NEUTRAL_VALENCE,
            arousal: NEUTRAL_AROUSAL,
            confidence: 0.0,
            evidence: MoodEvidence::None,
        }
    }

    /// Creates an estimate from caller-supplied values, rejecting anything
    /// outside the valid ranges.
    pub fn try_new(
        valence: f64,
        arousal: f64,
        confidence: f64,
        evidence: MoodEvidence,
    ) -> Result<Self, ValidationError> {
        check_range("valence", valence, -1.0, 1.0)?;
        check_range("arousal", arousal, 0.0, 1.0)?;
        check_range("confidence", confidence, 0.0, 1.0)?;
        Ok(Self {
            valence,
            arousal,
            confidence,
            evidence,
        })
    }

    /// Builds an estimate from computed values: clamps to range, then rounds.
    pub(crate) fn computed(
        valence: f64,
        arousal: f64,
        confidence: f64,
        evidence: MoodEvidence,
    ) -> Self {
        Self {
            valence: round3(valence.clamp(-1.0, 1.0)),
            arousal: round3(arousal.clamp(0.0, 1.0)),
            confidence: round3(confidence.clamp(0.0, 1.0)),
            evidence,
        }
    }

    pub fn valence(&self) -> f64 {
        self.valence
    }

    pub fn arousal(&self) -> f64 {
        self.arousal
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn evidence(&self) -> &MoodEvidence {
        &self.evidence
    }

    /// Returns true if this estimate carries any signal for fusion.
    pub fn is_usable(&self) -> bool {
        self.confidence > 0.0
    }
}

impl Default for MoodEstimate {
    fn default() -> Self {
        Self::neutral()
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max, value));
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawMoodEstimate {
    valence: f64,
    arousal: f64,
    confidence: f64,
    #[serde(default)]
    evidence: MoodEvidence,
}

impl TryFrom<RawMoodEstimate> for MoodEstimate {
    type Error = ValidationError;

    fn try_from(raw: RawMoodEstimate) -> Result<Self, Self::Error> {
        MoodEstimate::try_new(raw.valence, raw.arousal, raw.confidence, raw.evidence)
    }
}
