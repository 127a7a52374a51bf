//! Text Mood Analyzer - lexicon-based valence/arousal scoring of free text.
//!
//! # Algorithm
//!
//! 1. Blank input yields the neutral sentinel (confidence 0).
//! 2. Text is lowercased and split into word tokens.
//! 3. Every token found in the lexicon contributes one match:
//!    - a negation within the 3 preceding tokens flips valence and halves it
//!    - an intensifier directly before (checked first) or after scales arousal
//! 4. Matches are averaged; confidence grows by 0.3 per match up to 1.0.
//! 5. With no matches, a coarse polarity/punctuation heuristic is used at a
//!    fixed confidence of 0.2.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::estimate::{round3, EmotionMatch, MoodEstimate, MoodEvidence};
use super::lexicon::MoodLexicon;

/// How many tokens before a match are searched for a negation.
pub const NEGATION_WINDOW: usize = 3;

/// Confidence contributed by each lexicon match.
pub const CONFIDENCE_PER_MATCH: f64 = 0.3;

/// Confidence of the no-match fallback.
pub const FALLBACK_CONFIDENCE: f64 = 0.2;

const FALLBACK_POLARITY: f64 = 0.3;
const FALLBACK_BASE_AROUSAL: f64 = 0.3;
const FALLBACK_MAX_AROUSAL: f64 = 0.7;
const AROUSAL_PER_PUNCTUATION: f64 = 0.1;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Scores free text against a `MoodLexicon`.
///
/// Stateless apart from the shared read-only lexicon; safe to share across
/// threads and call concurrently.
#[derive(Debug, Clone)]
pub struct TextMoodAnalyzer {
    lexicon: Arc<MoodLexicon>,
}

impl TextMoodAnalyzer {
    /// Creates an analyzer over the shared default lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(MoodLexicon::shared_default())
    }

    /// Creates an analyzer over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Arc<MoodLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &MoodLexicon {
        &self.lexicon
    }

    /// Analyzes text and returns a mood estimate. Never fails.
    pub fn analyze(&self, text: &str) -> MoodEstimate {
        if text.trim().is_empty() {
            return MoodEstimate::neutral();
        }

        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = WORD.find_iter(&lowered).map(|m| m.as_str()).collect();

        let matches: Vec<EmotionMatch> = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| self.score_token(&tokens, i, token))
            .collect();

        if matches.is_empty() {
            return self.fallback(&lowered);
        }

        let n = matches.len() as f64;
        let valence = matches.iter().map(|m| m.valence).sum::<f64>() / n;
        let arousal = matches.iter().map(|m| m.arousal).sum::<f64>() / n;
        let confidence = (n * CONFIDENCE_PER_MATCH).min(1.0);

        let matches = matches
            .into_iter()
            .map(|m| EmotionMatch {
                valence: round3(m.valence),
                arousal: round3(m.arousal),
                ..m
            })
            .collect();

        MoodEstimate::computed(valence, arousal, confidence, MoodEvidence::Text { matches })
    }

    fn score_token(&self, tokens: &[&str], i: usize, token: &str) -> Option<EmotionMatch> {
        let base = self.lexicon.emotion(token)?;

        let window_start = i.saturating_sub(NEGATION_WINDOW);
        let negated = tokens[window_start..i]
            .iter()
            .any(|t| self.lexicon.is_negation(t));
        let valence = if negated {
            -base.valence * 0.5
        } else {
            base.valence
        };

        let preceding = i.checked_sub(1).and_then(|p| self.lexicon.intensifier(tokens[p]));
        let following = tokens.get(i + 1).and_then(|t| self.lexicon.intensifier(t));
        let intensity = preceding.or(following).unwrap_or(1.0);
        let arousal = (base.arousal * intensity).clamp(0.0, 1.0);

        Some(EmotionMatch {
            emotion: token.to_string(),
            valence,
            arousal,
            negated,
        })
    }

    /// Polarity and punctuation heuristic for text with no lexicon hits.
    ///
    /// Cue words are matched by raw substring containment and ignore
    /// negation, unlike the lexicon path.
    fn fallback(&self, lowered: &str) -> MoodEstimate {
        let count_cues = |cues: &[String]| cues.iter().filter(|c| lowered.contains(c.as_str())).count();
        let positive = count_cues(self.lexicon.positive_cues());
        let negative = count_cues(self.lexicon.negative_cues());

        let valence = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => FALLBACK_POLARITY,
            std::cmp::Ordering::Less => -FALLBACK_POLARITY,
            std::cmp::Ordering::Equal => 0.0,
        };

        let punctuation = lowered.chars().filter(|c| matches!(c, '!' | '?')).count() as f64;
        let arousal =
            (FALLBACK_BASE_AROUSAL + punctuation * AROUSAL_PER_PUNCTUATION).min(FALLBACK_MAX_AROUSAL);

        MoodEstimate::computed(valence, arousal, FALLBACK_CONFIDENCE, MoodEvidence::None)
    }
}

impl Default for TextMoodAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mood::lexicon::EmotionScore;

    fn analyzer() -> TextMoodAnalyzer {
        TextMoodAnalyzer::new()
    }

    fn matches_of(estimate: &MoodEstimate) -> &[EmotionMatch] {
        match estimate.evidence() {
            MoodEvidence::Text { matches } => matches,
            other => panic!("expected text evidence, got {:?}", other),
        }
    }

    #[test]
    fn empty_text_returns_sentinel() {
        assert_eq!(analyzer().analyze(""), MoodEstimate::neutral());
    }

    #[test]
    fn whitespace_text_returns_sentinel() {
        assert_eq!(analyzer().analyze("   \n\t"), MoodEstimate::neutral());
    }

    #[test]
    fn single_keyword_scores_base_values() {
        let e = analyzer().analyze("I feel happy");
        assert_eq!(e.valence(), 0.8);
        assert_eq!(e.arousal(), 0.7);
        assert_eq!(e.confidence(), 0.3);
        assert_eq!(matches_of(&e).len(), 1);
        assert!(!matches_of(&e)[0].negated);
    }

    #[test]
    fn negation_flips_and_halves_valence() {
        let e = analyzer().analyze("I am not happy");
        assert_eq!(e.valence(), -0.4);
        assert_eq!(e.arousal(), 0.7);
        assert_eq!(e.confidence(), 0.3);
        let m = &matches_of(&e)[0];
        assert_eq!(m.emotion, "happy");
        assert!(m.negated);
    }

    #[test]
    fn negation_reaches_three_tokens_back() {
        let e = analyzer().analyze("never was really happy");
        assert!(matches_of(&e)[0].negated);
        assert_eq!(e.valence(), -0.4);
        assert_eq!(e.arousal(), 0.77);
    }

    #[test]
    fn negation_beyond_window_is_ignored() {
        let e = analyzer().analyze("not that it matters but happy");
        assert!(!matches_of(&e)[0].negated);
        assert_eq!(e.valence(), 0.8);
    }

    #[test]
    fn intensifier_before_match_clamps_arousal() {
        let e = analyzer().analyze("I am extremely excited");
        assert_eq!(e.valence(), 0.8);
        assert_eq!(e.arousal(), 1.0);
    }

    #[test]
    fn intensifier_after_match_applies() {
        let e = analyzer().analyze("calm somewhat");
        assert_eq!(e.arousal(), 0.18);
    }

    #[test]
    fn preceding_intensifier_wins_over_following() {
        // slightly (0.8) precedes, very (1.2) follows: 0.5 * 0.8 = 0.4
        let e = analyzer().analyze("slightly grateful very");
        assert_eq!(e.arousal(), 0.4);
    }

    #[test]
    fn multiple_matches_are_averaged() {
        // happy (0.8, 0.7) and sad (-0.6, 0.3)
        let e = analyzer().analyze("Happy in the morning, sad at night.");
        assert_eq!(e.valence(), 0.1);
        assert_eq!(e.arousal(), 0.5);
        assert_eq!(e.confidence(), 0.6);
    }

    #[test]
    fn confidence_saturates_at_one() {
        let e = analyzer().analyze("happy joy excited proud confident");
        assert_eq!(e.confidence(), 1.0);
        assert_eq!(matches_of(&e).len(), 5);
    }

    #[test]
    fn fallback_positive_cues() {
        let e = analyzer().analyze("Today was a good day, great lunch");
        assert_eq!(e.valence(), 0.3);
        assert_eq!(e.arousal(), 0.3);
        assert_eq!(e.confidence(), 0.2);
        assert!(e.evidence().is_empty());
    }

    #[test]
    fn fallback_negative_cues() {
        let e = analyzer().analyze("That exam was a problem. So difficult?");
        assert_eq!(e.valence(), -0.3);
        assert_eq!(e.arousal(), 0.4);
    }

    #[test]
    fn fallback_uses_raw_substrings_without_negation() {
        // "not good" still counts as a positive cue in the fallback path
        let e = analyzer().analyze("not good");
        assert_eq!(e.valence(), 0.3);
    }

    #[test]
    fn fallback_balanced_cues_are_neutral() {
        let e = analyzer().analyze("good and bad");
        assert_eq!(e.valence(), 0.0);
    }

    #[test]
    fn fallback_arousal_caps_at_point_seven() {
        let e = analyzer().analyze("what!!!!!!??");
        assert_eq!(e.arousal(), 0.7);
    }

    #[test]
    fn analysis_is_idempotent() {
        let a = analyzer();
        let text = "Not very happy, quite stressed and extremely tired!";
        assert_eq!(a.analyze(text), a.analyze(text));
    }

    #[test]
    fn custom_lexicon_is_used() {
        let lexicon = MoodLexicon::new(
            [("elated", EmotionScore::new(0.9, 0.6))],
            [("totally", 1.5)],
            ["hardly"],
        );
        let a = TextMoodAnalyzer::with_lexicon(Arc::new(lexicon));

        let e = a.analyze("hardly totally elated");
        assert_eq!(e.valence(), -0.45);
        assert_eq!(e.arousal(), 0.9);

        assert_eq!(a.analyze("happy").confidence(), 0.2);
    }
}
