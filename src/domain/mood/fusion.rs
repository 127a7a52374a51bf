//! Mood Fusion - combines text and behavioral estimates into one.
//!
//! Valence and arousal are a weighted mean of the usable inputs. Confidence
//! is the plain mean of the input confidences, so a weight override shifts
//! where the estimate lands without inflating how sure it is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::estimate::{round3, MoodEstimate, NEUTRAL_AROUSAL, NEUTRAL_VALENCE};

/// Optional per-source weight overrides.
///
/// A missing weight falls back to the estimate's own confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FusionWeights {
    text: Option<f64>,
    behavioral: Option<f64>,
}

impl FusionWeights {
    /// # Errors
    ///
    /// Rejects negative or non-finite weights.
    pub fn new(text: Option<f64>, behavioral: Option<f64>) -> Result<Self, ValidationError> {
        check_weight("text_weight", text)?;
        check_weight("behavioral_weight", behavioral)?;
        Ok(Self { text, behavioral })
    }

    pub fn text(&self) -> Option<f64> {
        self.text
    }

    pub fn behavioral(&self) -> Option<f64> {
        self.behavioral
    }
}

fn check_weight(field: &str, weight: Option<f64>) -> Result<(), ValidationError> {
    match weight {
        Some(w) if !w.is_finite() || w < 0.0 => Err(ValidationError::invalid_value(
            field,
            format!("must be a non-negative number, got {}", w),
        )),
        _ => Ok(()),
    }
}

/// Which inputs drove a fused estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionSource {
    TextPrimary,
    BehavioralPrimary,
    TextOnly,
    BehavioralOnly,
    None,
}

impl FusionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FusionSource::TextPrimary => "text_primary",
            FusionSource::BehavioralPrimary => "behavioral_primary",
            FusionSource::TextOnly => "text_only",
            FusionSource::BehavioralOnly => "behavioral_only",
            FusionSource::None => "none",
        }
    }
}

impl fmt::Display for FusionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The inputs a fused estimate was built from, as supplied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FusionComponents {
    pub text: Option<MoodEstimate>,
    pub behavioral: Option<MoodEstimate>,
}

/// Result of fusing zero, one or two estimates.
///
/// Only [`MoodFusion::fuse`] builds one, so the values are always clamped
/// and rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusedMoodEstimate {
    valence: f64,
    arousal: f64,
    confidence: f64,
    source: FusionSource,
    components: FusionComponents,
}

impl FusedMoodEstimate {
    pub fn valence(&self) -> f64 {
        self.valence
    }

    pub fn arousal(&self) -> f64 {
        self.arousal
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn source(&self) -> FusionSource {
        self.source
    }

    pub fn components(&self) -> &FusionComponents {
        &self.components
    }

    fn none(components: FusionComponents) -> Self {
        Self {
            valence: NEUTRAL_VALENCE,
            arousal: NEUTRAL_AROUSAL,
            confidence: 0.0,
            source: FusionSource::None,
            components,
        }
    }
}

/// Stateless estimate combiner.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodFusion;

impl MoodFusion {
    pub fn new() -> Self {
        Self
    }

    pub fn fuse(
        &self,
        text: Option<&MoodEstimate>,
        behavioral: Option<&MoodEstimate>,
        weights: &FusionWeights,
    ) -> FusedMoodEstimate {
        let components = FusionComponents {
            text: text.cloned(),
            behavioral: behavioral.cloned(),
        };

        let text = text.filter(|e| e.is_usable());
        let behavioral = behavioral.filter(|e| e.is_usable());

        let weighted: Vec<(f64, &MoodEstimate)> = [
            text.map(|e| (weights.text.unwrap_or(e.confidence()), e)),
            behavioral.map(|e| (weights.behavioral.unwrap_or(e.confidence()), e)),
        ]
        .into_iter()
        .flatten()
        .collect();

        let total_weight: f64 = weighted.iter().map(|(w, _)| w).sum();
        if weighted.is_empty() || total_weight <= 0.0 {
            return FusedMoodEstimate::none(components);
        }

        let valence = weighted.iter().map(|(w, e)| w * e.valence()).sum::<f64>() / total_weight;
        let arousal = weighted.iter().map(|(w, e)| w * e.arousal()).sum::<f64>() / total_weight;
        let confidence =
            weighted.iter().map(|(_, e)| e.confidence()).sum::<f64>() / weighted.len() as f64;

        let source = match (text, behavioral) {
            (Some(t), Some(b)) if t.confidence() > b.confidence() => FusionSource::TextPrimary,
            (Some(_), Some(_)) => FusionSource::BehavioralPrimary,
            (Some(_), None) => FusionSource::TextOnly,
            (None, Some(_)) => FusionSource::BehavioralOnly,
            (None, None) => FusionSource::None,
        };

        FusedMoodEstimate {
            valence: round3(valence.clamp(-1.0, 1.0)),
            arousal: round3(arousal.clamp(0.0, 1.0)),
            confidence: round3(confidence.clamp(0.0, 1.0)),
            source,
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mood::estimate::MoodEvidence;

    fn estimate(v: f64, a: f64, c: f64) -> MoodEstimate {
        MoodEstimate::try_new(v, a, c, MoodEvidence::None).unwrap()
    }

    fn fuse(
        text: Option<&MoodEstimate>,
        behavioral: Option<&MoodEstimate>,
    ) -> FusedMoodEstimate {
        MoodFusion::new().fuse(text, behavioral, &FusionWeights::default())
    }

    #[test]
    fn no_inputs_give_sentinel() {
        let f = fuse(None, None);
        assert_eq!(f.valence(), 0.0);
        assert_eq!(f.arousal(), 0.3);
        assert_eq!(f.confidence(), 0.0);
        assert_eq!(f.source(), FusionSource::None);
    }

    #[test]
    fn zero_confidence_inputs_are_treated_as_absent() {
        let t = estimate(0.9, 0.9, 0.0);
        let b = estimate(-0.9, 0.1, 0.0);
        let f = fuse(Some(&t), Some(&b));
        assert_eq!(f.source(), FusionSource::None);
        assert_eq!(f.confidence(), 0.0);
        assert_eq!(f.components().text, Some(t));
    }

    #[test]
    fn text_alone_passes_through() {
        let t = estimate(0.8, 0.5, 1.0);
        let b = estimate(-0.2, 0.3, 0.0);
        let f = fuse(Some(&t), Some(&b));
        assert_eq!(f.valence(), 0.8);
        assert_eq!(f.arousal(), 0.5);
        assert_eq!(f.confidence(), 1.0);
        assert_eq!(f.source(), FusionSource::TextOnly);
    }

    #[test]
    fn behavioral_alone_passes_through() {
        let b = estimate(-0.25, 0.6, 0.4);
        let f = fuse(None, Some(&b));
        assert_eq!(f.valence(), -0.25);
        assert_eq!(f.arousal(), 0.6);
        assert_eq!(f.confidence(), 0.4);
        assert_eq!(f.source(), FusionSource::BehavioralOnly);
    }

    #[test]
    fn confidence_weighted_average_of_both() {
        // weights 0.9 / 0.3: v = (0.9*0.6 + 0.3*-0.2)/1.2 = 0.4
        let t = estimate(0.6, 0.8, 0.9);
        let b = estimate(-0.2, 0.4, 0.3);
        let f = fuse(Some(&t), Some(&b));
        assert_eq!(f.valence(), 0.4);
        assert_eq!(f.arousal(), 0.7);
        assert_eq!(f.confidence(), 0.6);
        assert_eq!(f.source(), FusionSource::TextPrimary);
    }

    #[test]
    fn equal_confidence_tie_favors_behavioral() {
        let t = estimate(0.5, 0.5, 0.6);
        let b = estimate(0.1, 0.3, 0.6);
        let f = fuse(Some(&t), Some(&b));
        assert_eq!(f.source(), FusionSource::BehavioralPrimary);
        assert_eq!(f.valence(), 0.3);
        assert_eq!(f.confidence(), 0.6);
    }

    #[test]
    fn weight_overrides_shift_values_but_not_confidence() {
        let t = estimate(1.0, 1.0, 0.2);
        let b = estimate(0.0, 0.0, 0.8);
        let weights = FusionWeights::new(Some(3.0), Some(1.0)).unwrap();
        let f = MoodFusion::new().fuse(Some(&t), Some(&b), &weights);
        assert_eq!(f.valence(), 0.75);
        assert_eq!(f.arousal(), 0.75);
        assert_eq!(f.confidence(), 0.5);
        assert_eq!(f.source(), FusionSource::BehavioralPrimary);
    }

    #[test]
    fn zero_total_weight_gives_sentinel() {
        let t = estimate(0.5, 0.5, 0.6);
        let weights = FusionWeights::new(Some(0.0), None).unwrap();
        let f = MoodFusion::new().fuse(Some(&t), None, &weights);
        assert_eq!(f.source(), FusionSource::None);
        assert_eq!(f.valence(), 0.0);
        assert_eq!(f.arousal(), 0.3);
        assert_eq!(f.components().text, Some(t));
    }

    #[test]
    fn weights_reject_negative_and_nan() {
        assert!(FusionWeights::new(Some(-0.1), None).is_err());
        assert!(FusionWeights::new(None, Some(f64::NAN)).is_err());
        assert!(FusionWeights::new(Some(0.0), Some(2.5)).is_ok());
    }

    #[test]
    fn fused_estimate_serializes_clamped_values() {
        let t = estimate(1.0, 1.0, 1.0);
        let weights = FusionWeights::new(Some(5.0), None).unwrap();
        let f = MoodFusion::new().fuse(Some(&t), None, &weights);

        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["valence"], 1.0);
        assert_eq!(json["arousal"], 1.0);
        assert_eq!(json["confidence"], 1.0);
        assert_eq!(json["source"], "text_only");
        assert_eq!(json["components"]["behavioral"], serde_json::Value::Null);
    }

    #[test]
    fn source_serializes_snake_case() {
        let json = serde_json::to_value(FusionSource::BehavioralPrimary).unwrap();
        assert_eq!(json, "behavioral_primary");
        assert_eq!(FusionSource::TextOnly.to_string(), "text_only");
    }
}
