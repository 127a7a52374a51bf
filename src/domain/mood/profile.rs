//! Stored mood results and journal mood labels.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::domain::foundation::{MoodProfileId, Timestamp, UserId, ValidationError};

use super::estimate::{MoodEstimate, MoodEvidence};
use super::fusion::FusedMoodEstimate;

/// Valence above which a journal entry is labelled positive.
pub const POSITIVE_LABEL_THRESHOLD: f64 = 0.5;

/// Valence below which a journal entry is labelled negative.
pub const NEGATIVE_LABEL_THRESHOLD: f64 = -0.5;

/// Coarse mood label attached to a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLabel {
    Positive,
    Neutral,
    Negative,
}

impl MoodLabel {
    pub fn from_valence(valence: f64) -> Self {
        if valence > POSITIVE_LABEL_THRESHOLD {
            MoodLabel::Positive
        } else if valence < NEGATIVE_LABEL_THRESHOLD {
            MoodLabel::Negative
        } else {
            MoodLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Positive => "positive",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MoodLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(MoodLabel::Positive),
            "neutral" => Ok(MoodLabel::Neutral),
            "negative" => Ok(MoodLabel::Negative),
            other => Err(ValidationError::invalid_value(
                "mood_label",
                format!("unknown mood label '{}'", other),
            )),
        }
    }
}

/// What produced a stored profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodProfileSource {
    Text,
    Behavioral,
    Fused,
}

impl MoodProfileSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodProfileSource::Text => "text",
            MoodProfileSource::Behavioral => "behavioral",
            MoodProfileSource::Fused => "fused",
        }
    }
}

impl fmt::Display for MoodProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MoodProfileSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(MoodProfileSource::Text),
            "behavioral" => Ok(MoodProfileSource::Behavioral),
            "fused" => Ok(MoodProfileSource::Fused),
            other => Err(ValidationError::invalid_value(
                "source",
                format!("unknown mood profile source '{}'", other),
            )),
        }
    }
}

/// A persisted mood result for one user at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodProfile {
    id: MoodProfileId,
    user_id: UserId,
    valence: f64,
    arousal: f64,
    confidence: f64,
    source: MoodProfileSource,
    metadata: Value,
    created_at: Timestamp,
}

impl MoodProfile {
    /// Profile for a text analysis. Metadata lists the matched emotions and
    /// the analyzed text's length in characters.
    pub fn from_text(user_id: UserId, estimate: &MoodEstimate, text: &str) -> Self {
        let emotions = match estimate.evidence() {
            MoodEvidence::Text { matches } => json!(matches),
            _ => json!([]),
        };
        let metadata = json!({
            "emotions": emotions,
            "text_length": text.chars().count(),
        });
        Self::from_parts(
            user_id,
            estimate.valence(),
            estimate.arousal(),
            estimate.confidence(),
            MoodProfileSource::Text,
            metadata,
        )
    }

    /// Profile for a behavioral prediction. Metadata is the feature payload.
    pub fn from_behavioral(user_id: UserId, estimate: &MoodEstimate) -> Self {
        let metadata = match estimate.evidence() {
            MoodEvidence::Behavioral(features) => json!(features),
            _ => json!({}),
        };
        Self::from_parts(
            user_id,
            estimate.valence(),
            estimate.arousal(),
            estimate.confidence(),
            MoodProfileSource::Behavioral,
            metadata,
        )
    }

    /// Profile for a fused estimate. Metadata keeps the source tag and the
    /// component estimates.
    pub fn from_fused(user_id: UserId, fused: &FusedMoodEstimate) -> Self {
        let metadata = json!({
            "source_breakdown": fused.source(),
            "components": fused.components(),
        });
        Self::from_parts(
            user_id,
            fused.valence(),
            fused.arousal(),
            fused.confidence(),
            MoodProfileSource::Fused,
            metadata,
        )
    }

    fn from_parts(
        user_id: UserId,
        valence: f64,
        arousal: f64,
        confidence: f64,
        source: MoodProfileSource,
        metadata: Value,
    ) -> Self {
        Self {
            id: MoodProfileId::new(),
            user_id,
            valence,
            arousal,
            confidence,
            source,
            metadata,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a profile from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MoodProfileId,
        user_id: UserId,
        valence: f64,
        arousal: f64,
        confidence: f64,
        source: MoodProfileSource,
        metadata: Value,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            valence,
            arousal,
            confidence,
            source,
            metadata,
            created_at,
        }
    }

    pub fn id(&self) -> &MoodProfileId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
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

    pub fn source(&self) -> MoodProfileSource {
        self.source
    }

    pub fn metadata(&self) -> &Value {
        &self.metadata
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
