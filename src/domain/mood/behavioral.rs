//! Behavioral Mood Predictor - mood from task and journaling activity.
//!
//! Valence follows task completion, overdue work and journaling frequency;
//! arousal follows near-term deadlines and outstanding workload. Confidence
//! grows with the amount of observed activity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::estimate::{round_to, BehavioralFeatures, MoodEstimate, MoodEvidence};

/// Default number of days a behavioral window covers.
pub const DEFAULT_DAYS_BACK: u32 = 7;

/// Longest window, in days, that a lookback may cover.
pub const MAX_LOOKBACK_DAYS: u32 = 36_500;

/// Completion rate assumed when no tasks were observed.
pub const NEUTRAL_COMPLETION_RATE: f64 = 0.5;

const COMPLETION_VALENCE_SCALE: f64 = 0.6;
const OVERDUE_PENALTY_PER_TASK: f64 = 0.1;
const OVERDUE_PENALTY_CAP: f64 = 0.4;
const JOURNALING_BONUS_SCALE: f64 = 0.1;
const JOURNALING_BONUS_CAP: f64 = 0.2;

const BASE_AROUSAL: f64 = 0.3;
const URGENCY_PER_DEADLINE: f64 = 0.1;
const URGENCY_CAP: f64 = 0.4;
/// Ten hours of outstanding work.
const REFERENCE_WORKLOAD_MINUTES: f64 = 600.0;
const WORKLOAD_SCALE: f64 = 0.1;
const WORKLOAD_CAP: f64 = 0.3;

/// Activity data points at which confidence saturates.
const FULL_CONFIDENCE_DATA_POINTS: f64 = 20.0;

/// Length of the lookback window in days, between 1 and [`MAX_LOOKBACK_DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LookbackDays(u32);

impl LookbackDays {
    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if days == 0 {
            return Err(ValidationError::invalid_value("days_back", "must be at least 1"));
        }
        if days > MAX_LOOKBACK_DAYS {
            return Err(ValidationError::invalid_value(
                "days_back",
                format!("must be at most {}", MAX_LOOKBACK_DAYS),
            ));
        }
        Ok(Self(days))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for LookbackDays {
    fn default() -> Self {
        Self(DEFAULT_DAYS_BACK)
    }
}

impl TryFrom<u32> for LookbackDays {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<LookbackDays> for u32 {
    fn from(days: LookbackDays) -> Self {
        days.0
    }
}

/// Activity counters aggregated over a lookback window.
///
/// Built by the persistence layer; the predictor never queries storage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BehavioralWindow {
    total_tasks: u32,
    completed_tasks: u32,
    upcoming_deadlines: u32,
    overdue_tasks: u32,
    journal_entries: u32,
    incomplete_minutes: f64,
}

impl BehavioralWindow {
    /// Validates and creates a window.
    ///
    /// # Errors
    ///
    /// - `completed_tasks` greater than `total_tasks`
    /// - `incomplete_minutes` negative or not finite
    pub fn new(
        total_tasks: u32,
        completed_tasks: u32,
        upcoming_deadlines: u32,
        overdue_tasks: u32,
        journal_entries: u32,
        incomplete_minutes: f64,
    ) -> Result<Self, ValidationError> {
        if completed_tasks > total_tasks {
            return Err(ValidationError::invalid_value(
                "completed_tasks",
                format!("{} exceeds total_tasks {}", completed_tasks, total_tasks),
            ));
        }
        if !incomplete_minutes.is_finite() || incomplete_minutes < 0.0 {
            return Err(ValidationError::invalid_value(
                "incomplete_minutes",
                "must be a non-negative number",
            ));
        }
        Ok(Self {
            total_tasks,
            completed_tasks,
            upcoming_deadlines,
            overdue_tasks,
            journal_entries,
            incomplete_minutes,
        })
    }

    pub fn total_tasks(&self) -> u32 {
        self.total_tasks
    }

    pub fn completed_tasks(&self) -> u32 {
        self.completed_tasks
    }

    pub fn upcoming_deadlines(&self) -> u32 {
        self.upcoming_deadlines
    }

    pub fn overdue_tasks(&self) -> u32 {
        self.overdue_tasks
    }

    pub fn journal_entries(&self) -> u32 {
        self.journal_entries
    }

    pub fn incomplete_minutes(&self) -> f64 {
        self.incomplete_minutes
    }

    /// Fraction of tasks completed, or the neutral prior when there were none.
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            NEUTRAL_COMPLETION_RATE
        } else {
            f64::from(self.completed_tasks) / f64::from(self.total_tasks)
        }
    }
}

/// Predicts mood from a `BehavioralWindow`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehavioralMoodPredictor {
    days_back: LookbackDays,
}

impl BehavioralMoodPredictor {
    pub fn new(days_back: LookbackDays) -> Self {
        Self { days_back }
    }

    pub fn days_back(&self) -> LookbackDays {
        self.days_back
    }

    /// Scores a window that was aggregated over `days_back` days.
    pub fn predict(&self, window: &BehavioralWindow) -> MoodEstimate {
        let days = f64::from(self.days_back.value());
        let completion_rate = window.completion_rate();
        let journaling_frequency = f64::from(window.journal_entries) / days;

        let overdue_penalty =
            (f64::from(window.overdue_tasks) * OVERDUE_PENALTY_PER_TASK).min(OVERDUE_PENALTY_CAP);
        let journaling_bonus =
            (journaling_frequency * JOURNALING_BONUS_SCALE).min(JOURNALING_BONUS_CAP);
        let valence = (completion_rate - NEUTRAL_COMPLETION_RATE) * COMPLETION_VALENCE_SCALE
            - overdue_penalty
            + journaling_bonus;

        let urgency = (f64::from(window.upcoming_deadlines) * URGENCY_PER_DEADLINE).min(URGENCY_CAP);
        let workload = (window.incomplete_minutes / REFERENCE_WORKLOAD_MINUTES * WORKLOAD_SCALE)
            .min(WORKLOAD_CAP);
        let arousal = BASE_AROUSAL + urgency + workload;

        let data_points = f64::from(window.total_tasks) + f64::from(window.journal_entries);
        let confidence = (data_points / FULL_CONFIDENCE_DATA_POINTS).min(1.0);

        let features = BehavioralFeatures {
            completion_rate: round_to(completion_rate, 3),
            upcoming_tasks: window.upcoming_deadlines,
            overdue_tasks: window.overdue_tasks,
            journaling_frequency: round_to(journaling_frequency, 2),
            total_incomplete_minutes: window.incomplete_minutes.trunc() as u64,
        };

        MoodEstimate::computed(valence, arousal, confidence, MoodEvidence::Behavioral(features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(
        total: u32,
        completed: u32,
        upcoming: u32,
        overdue: u32,
        journals: u32,
        minutes: f64,
    ) -> BehavioralWindow {
        BehavioralWindow::new(total, completed, upcoming, overdue, journals, minutes).unwrap()
    }

    fn features_of(estimate: &MoodEstimate) -> &BehavioralFeatures {
        match estimate.evidence() {
            MoodEvidence::Behavioral(f) => f,
            other => panic!("expected behavioral evidence, got {:?}", other),
        }
    }

    #[test]
    fn empty_window_uses_neutral_prior_and_zero_confidence() {
        let e = BehavioralMoodPredictor::default().predict(&BehavioralWindow::default());
        assert_eq!(e.valence(), 0.0);
        assert_eq!(e.arousal(), 0.3);
        assert_eq!(e.confidence(), 0.0);
        assert_eq!(features_of(&e).completion_rate, 0.5);
    }

    #[test]
    fn full_completion_gives_positive_valence() {
        let e = BehavioralMoodPredictor::default().predict(&window(10, 10, 0, 0, 0, 0.0));
        assert_eq!(e.valence(), 0.3);
        assert_eq!(e.confidence(), 0.5);
    }

    #[test]
    fn zero_completion_gives_negative_valence() {
        let e = BehavioralMoodPredictor::default().predict(&window(4, 0, 0, 0, 0, 0.0));
        assert_eq!(e.valence(), -0.3);
        assert_eq!(e.confidence(), 0.2);
    }

    #[test]
    fn overdue_penalty_is_capped_at_four_tasks() {
        let p = BehavioralMoodPredictor::default();
        let four = p.predict(&window(10, 5, 0, 4, 0, 0.0));
        let nine = p.predict(&window(10, 5, 0, 9, 0, 0.0));
        assert_eq!(four.valence(), -0.4);
        assert_eq!(nine.valence(), -0.4);
    }

    #[test]
    fn journaling_bonus_scales_with_days_back() {
        // 7 entries over 7 days = 1/day -> +0.1
        let week = BehavioralMoodPredictor::default().predict(&window(0, 0, 0, 0, 7, 0.0));
        assert_eq!(week.valence(), 0.1);
        assert_eq!(features_of(&week).journaling_frequency, 1.0);

        // 7 entries over 1 day -> capped at +0.2
        let day = BehavioralMoodPredictor::new(LookbackDays::new(1).unwrap())
            .predict(&window(0, 0, 0, 0, 7, 0.0));
        assert_eq!(day.valence(), 0.2);
    }

    #[test]
    fn deadlines_and_workload_raise_arousal() {
        // 2 upcoming -> +0.2, 600 minutes -> +0.1
        let e = BehavioralMoodPredictor::default().predict(&window(5, 2, 2, 0, 0, 600.0));
        assert_eq!(e.arousal(), 0.6);
    }

    #[test]
    fn arousal_contributions_are_capped() {
        let e = BehavioralMoodPredictor::default().predict(&window(5, 2, 10, 0, 0, 100_000.0));
        assert_eq!(e.arousal(), 1.0);
    }

    #[test]
    fn confidence_saturates_at_twenty_data_points() {
        let e = BehavioralMoodPredictor::default().predict(&window(15, 10, 0, 0, 10, 0.0));
        assert_eq!(e.confidence(), 1.0);
    }

    #[test]
    fn features_are_reported() {
        let e = BehavioralMoodPredictor::default().predict(&window(3, 1, 2, 1, 2, 95.7));
        let f = features_of(&e);
        assert_eq!(f.completion_rate, 0.333);
        assert_eq!(f.upcoming_tasks, 2);
        assert_eq!(f.overdue_tasks, 1);
        assert_eq!(f.journaling_frequency, 0.29);
        assert_eq!(f.total_incomplete_minutes, 95);
    }

    #[test]
    fn prediction_is_idempotent() {
        let p = BehavioralMoodPredictor::default();
        let w = window(12, 7, 3, 2, 4, 420.0);
        assert_eq!(p.predict(&w), p.predict(&w));
    }

    #[test]
    fn window_rejects_completed_above_total() {
        assert!(BehavioralWindow::new(2, 3, 0, 0, 0, 0.0).is_err());
    }

    #[test]
    fn window_rejects_bad_minutes() {
        assert!(BehavioralWindow::new(2, 1, 0, 0, 0, -5.0).is_err());
        assert!(BehavioralWindow::new(2, 1, 0, 0, 0, f64::NAN).is_err());
        assert!(BehavioralWindow::new(2, 1, 0, 0, 0, f64::INFINITY).is_err());
    }

    #[test]
    fn lookback_rejects_zero_days() {
        assert!(LookbackDays::new(0).is_err());
        assert_eq!(LookbackDays::default().value(), 7);
    }

    #[test]
    fn lookback_rejects_windows_past_the_maximum() {
        assert_eq!(LookbackDays::new(MAX_LOOKBACK_DAYS).unwrap().value(), MAX_LOOKBACK_DAYS);

        let err = LookbackDays::new(MAX_LOOKBACK_DAYS + 1).unwrap_err();
        assert_eq!(err.field(), "days_back");
        assert!(LookbackDays::new(u32::MAX).is_err());
        assert!(serde_json::from_str::<LookbackDays>("4294967295").is_err());
    }
}
