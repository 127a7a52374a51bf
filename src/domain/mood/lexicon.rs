//! Emotion lexicon - keyword tables that drive text scoring.
//!
//! A `MoodLexicon` is built once and never mutated. The default tables are a
//! lazily-initialized process-wide static shared through `Arc`; tests and
//! alternate deployments can build their own and hand it to
//! `TextMoodAnalyzer::with_lexicon`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Base affect for a lexicon keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionScore {
    pub valence: f64,
    pub arousal: f64,
}

impl EmotionScore {
    pub const fn new(valence: f64, arousal: f64) -> Self {
        Self { valence, arousal }
    }
}

const DEFAULT_EMOTIONS: &[(&str, f64, f64)] = &[
    // Positive
    ("happy", 0.8, 0.7),
    ("joy", 0.9, 0.8),
    ("excited", 0.8, 0.9),
    ("grateful", 0.7, 0.5),
    ("content", 0.6, 0.3),
    ("peaceful", 0.7, 0.2),
    ("proud", 0.8, 0.6),
    ("hopeful", 0.7, 0.5),
    ("optimistic", 0.7, 0.6),
    ("energetic", 0.7, 0.9),
    ("motivated", 0.7, 0.7),
    ("confident", 0.8, 0.6),
    // Negative
    ("sad", -0.6, 0.3),
    ("depressed", -0.8, 0.2),
    ("down", -0.5, 0.3),
    ("anxious", -0.4, 0.8),
    ("worried", -0.5, 0.7),
    ("stressed", -0.6, 0.8),
    ("angry", -0.7, 0.9),
    ("frustrated", -0.6, 0.8),
    ("annoyed", -0.5, 0.7),
    ("tired", -0.4, 0.2),
    ("exhausted", -0.6, 0.1),
    ("burned", -0.7, 0.2),
    ("overwhelmed", -0.7, 0.8),
    ("helpless", -0.8, 0.4),
    ("lonely", -0.7, 0.3),
    // Neutral / low arousal
    ("calm", 0.2, 0.2),
    ("neutral", 0.0, 0.3),
    ("fine", 0.2, 0.3),
    ("okay", 0.1, 0.3),
    ("meh", -0.1, 0.2),
];

const DEFAULT_INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.2),
    ("extremely", 1.4),
    ("really", 1.1),
    ("super", 1.3),
    ("slightly", 0.8),
    ("somewhat", 0.9),
    ("quite", 1.1),
];

const DEFAULT_NEGATIONS: &[&str] = &["not", "no", "never", "none", "nothing", "nobody"];

const DEFAULT_POSITIVE_CUES: &[&str] = &[
    "good", "great", "nice", "well", "better", "best", "love", "like",
];

const DEFAULT_NEGATIVE_CUES: &[&str] = &[
    "bad", "terrible", "awful", "hate", "worst", "difficult", "hard", "problem",
];

static DEFAULT_LEXICON: Lazy<Arc<MoodLexicon>> = Lazy::new(|| {
    Arc::new(
        MoodLexicon::new(
            DEFAULT_EMOTIONS
                .iter()
                .map(|(word, v, a)| (*word, EmotionScore::new(*v, *a))),
            DEFAULT_INTENSIFIERS.iter().copied(),
            DEFAULT_NEGATIONS.iter().copied(),
        )
        .with_polarity_cues(
            DEFAULT_POSITIVE_CUES.iter().copied(),
            DEFAULT_NEGATIVE_CUES.iter().copied(),
        ),
    )
});

/// Read-only tables used by the text analyzer.
#[derive(Debug, Clone, Default)]
pub struct MoodLexicon {
    emotions: HashMap<String, EmotionScore>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
    positive_cues: Vec<String>,
    negative_cues: Vec<String>,
}

impl MoodLexicon {
    /// Builds a lexicon. Keywords are lowercased so lookups match tokenized text.
    pub fn new<'a>(
        emotions: impl IntoIterator<Item = (&'a str, EmotionScore)>,
        intensifiers: impl IntoIterator<Item = (&'a str, f64)>,
        negations: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            emotions: emotions
                .into_iter()
                .map(|(w, s)| (w.to_lowercase(), s))
                .collect(),
            intensifiers: intensifiers
                .into_iter()
                .map(|(w, m)| (w.to_lowercase(), m))
                .collect(),
            negations: negations.into_iter().map(str::to_lowercase).collect(),
            positive_cues: Vec::new(),
            negative_cues: Vec::new(),
        }
    }

    /// Sets the word lists used by the no-match polarity fallback.
    pub fn with_polarity_cues<'a>(
        mut self,
        positive: impl IntoIterator<Item = &'a str>,
        negative: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.positive_cues = positive.into_iter().map(str::to_lowercase).collect();
        self.negative_cues = negative.into_iter().map(str::to_lowercase).collect();
        self
    }

    /// The shared default tables.
    pub fn shared_default() -> Arc<MoodLexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    pub fn emotion(&self, word: &str) -> Option<EmotionScore> {
        self.emotions.get(word).copied()
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn positive_cues(&self) -> &[String] {
        &self.positive_cues
    }

    pub fn negative_cues(&self) -> &[String] {
        &self.negative_cues
    }

    pub fn emotion_count(&self) -> usize {
        self.emotions.len()
    }
}
