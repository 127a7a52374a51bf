//! Mood engine configuration

use serde::Deserialize;

use crate::domain::mood::{FusionWeights, LookbackDays, DEFAULT_DAYS_BACK, MAX_LOOKBACK_DAYS};

use super::error::ValidationError;

/// Mood engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MoodConfig {
    /// Behavioral window length when a request doesn't specify one
    #[serde(default = "default_days_back")]
    pub default_days_back: u32,

    /// History range when a request doesn't specify one
    #[serde(default = "default_history_days")]
    pub history_days: u32,

    /// Fusion weight override for the text estimate
    pub text_weight: Option<f64>,

    /// Fusion weight override for the behavioral estimate
    pub behavioral_weight: Option<f64>,
}

impl MoodConfig {
    /// The default behavioral window.
    pub fn lookback_days(&self) -> Result<LookbackDays, ValidationError> {
        LookbackDays::new(self.default_days_back)
            .map_err(|_| ValidationError::InvalidLookbackDays("default_days_back"))
    }

    /// Configured fusion weight overrides.
    pub fn fusion_weights(&self) -> Result<FusionWeights, ValidationError> {
        FusionWeights::new(self.text_weight, self.behavioral_weight).map_err(|e| {
            if e.field() == "text_weight" {
                ValidationError::InvalidFusionWeight("text_weight")
            } else {
                ValidationError::InvalidFusionWeight("behavioral_weight")
            }
        })
    }

    /// Validate mood configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.lookback_days()?;
        if self.history_days == 0 || self.history_days > MAX_LOOKBACK_DAYS {
            return Err(ValidationError::InvalidLookbackDays("history_days"));
        }
        self.fusion_weights()?;
        Ok(())
    }
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            default_days_back: default_days_back(),
            history_days: default_history_days(),
            text_weight: None,
            behavioral_weight: None,
        }
    }
}

fn default_days_back() -> u32 {
    DEFAULT_DAYS_BACK
}

fn default_history_days() -> u32 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_config_defaults() {
        let config = MoodConfig::default();
        assert_eq!(config.default_days_back, 7);
        assert_eq!(config.history_days, 30);
        assert_eq!(config.fusion_weights().unwrap(), FusionWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_days_rejected() {
        let config = MoodConfig {
            default_days_back: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLookbackDays("default_days_back"))
        );

        let config = MoodConfig {
            history_days: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLookbackDays("history_days"))
        );
    }

    #[test]
    fn test_oversized_days_rejected() {
        let config = MoodConfig {
            default_days_back: MAX_LOOKBACK_DAYS + 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLookbackDays("default_days_back"))
        );

        let config = MoodConfig {
            history_days: u32::MAX,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLookbackDays("history_days"))
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = MoodConfig {
            behavioral_weight: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidFusionWeight("behavioral_weight"))
        );
    }

    #[test]
    fn test_weights_are_passed_through() {
        let config = MoodConfig {
            text_weight: Some(2.0),
            ..Default::default()
        };
        let weights = config.fusion_weights().unwrap();
        assert_eq!(weights.text(), Some(2.0));
        assert_eq!(weights.behavioral(), None);
    }
}
