//! Word lists used by the sentiment scorer.
//!
//! The lists are plain data handed to [`SentimentScorer`](super::SentimentScorer)
//! at construction, so a deployment can swap or extend them for another
//! locale or product domain without touching the scoring algorithm.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "excellent", "fantastic", "great", "good", "love", "perfect",
    "wonderful", "brilliant", "outstanding", "superb", "magnificent", "impressive",
    "helpful", "useful", "valuable", "beneficial", "effective", "efficient",
    "innovative", "creative", "intuitive", "user-friendly", "seamless", "smooth",
    "fast", "quick", "reliable", "stable", "robust", "secure", "clean", "modern",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "terrible", "awful", "bad", "horrible", "hate", "disgusting", "worst",
    "useless", "pointless", "waste", "broken", "buggy", "slow", "laggy",
    "confusing", "complicated", "difficult", "hard", "frustrating", "annoying",
    "disappointing", "poor", "lacking", "missing", "incomplete", "flawed",
    "unreliable", "unstable", "insecure", "outdated", "clunky", "messy",
];

pub const INTENSIFIERS: &[&str] = &["very", "extremely", "really", "quite", "totally", "absolutely"];

pub const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "nowhere", "nobody"];

/// Strip everything except ASCII word characters (`[A-Za-z0-9_]`).
pub fn strip_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Extra words layered on top of a lexicon, typically from config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconOverrides {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub intensifiers: Vec<String>,
    pub negators: Vec<String>,
}

impl LexiconOverrides {
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
            && self.negative.is_empty()
            && self.intensifiers.is_empty()
            && self.negators.is_empty()
    }
}

/// Single-word, case-insensitive sentiment vocabulary.
///
/// Sentiment words are stored in stripped form so they compare equal to
/// stripped tokens. Intensifiers and negators are compared against the
/// previous raw token and are stored lower-cased only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    intensifiers: HashSet<String>,
    negators: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(POSITIVE_WORDS, NEGATIVE_WORDS, INTENSIFIERS, NEGATORS)
    }
}

impl Lexicon {
    pub fn new<S: AsRef<str>>(
        positive: &[S],
        negative: &[S],
        intensifiers: &[S],
        negators: &[S],
    ) -> Self {
        Self {
            positive: sentiment_set(positive),
            negative: sentiment_set(negative),
            intensifiers: modifier_set(intensifiers),
            negators: modifier_set(negators),
        }
    }

    /// An empty vocabulary. Every text scores neutral.
    pub fn empty() -> Self {
        Self::new::<&str>(&[], &[], &[], &[])
    }

    pub fn extend(&mut self, overrides: &LexiconOverrides) {
        self.positive.extend(sentiment_set(&overrides.positive));
        self.negative.extend(sentiment_set(&overrides.negative));
        self.intensifiers.extend(modifier_set(&overrides.intensifiers));
        self.negators.extend(modifier_set(&overrides.negators));
    }

    pub fn with_overrides(mut self, overrides: &LexiconOverrides) -> Self {
        self.extend(overrides);
        self
    }

    /// Base polarity of a stripped token: +1, -1, or `None` if unknown.
    ///
    /// A word listed as both positive and negative counts as positive.
    pub fn polarity(&self, stripped: &str) -> Option<f64> {
        if self.positive.contains(stripped) {
            Some(1.0)
        } else if self.negative.contains(stripped) {
            Some(-1.0)
        } else {
            None
        }
    }

    pub fn is_intensifier(&self, raw: &str) -> bool {
        self.intensifiers.contains(raw)
    }

    pub fn is_negator(&self, raw: &str) -> bool {
        self.negators.contains(raw)
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sentiment_set<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
    words
        .iter()
        .map(|w| strip_token(&w.as_ref().to_lowercase()))
        .filter(|w| !w.is_empty())
        .collect()
}

fn modifier_set<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
