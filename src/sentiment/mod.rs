//! Keyword-based sentiment scoring for free-text feedback.
//!
//! Each whitespace token that appears in the lexicon contributes +1 or -1.
//! An intensifier directly before the word scales the contribution by 1.5
//! and a negator directly before it flips the sign. The final score is the
//! mean contribution, clamped to [-1, 1].

mod lexicon;

pub use lexicon::{
    strip_token, Lexicon, LexiconOverrides, INTENSIFIERS, NEGATIVE_WORDS, NEGATORS,
    POSITIVE_WORDS,
};

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::entity::Feedback;

/// Magnitude multiplier applied when an intensifier precedes a sentiment word.
pub const INTENSIFIER_MULTIPLIER: f64 = 1.5;

/// Scores within `[-NEUTRAL_BAND, NEUTRAL_BAND]` are labeled neutral.
pub const NEUTRAL_BAND: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if score < -NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(format!("Invalid sentiment: {}", s)),
        }
    }
}

/// Result of scoring one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    #[serde(rename = "sentiment")]
    pub label: SentimentLabel,
    pub score: f64,
    /// Number of tokens that matched the lexicon.
    #[serde(default)]
    pub matched_words: usize,
}

impl SentimentAnalysis {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
            matched_words: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text`. Total over all inputs; empty text is neutral 0.0.
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        let mut sum = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(base) = self.lexicon.polarity(&strip_token(token)) else {
                continue;
            };

            let mut polarity = base;
            if i > 0 {
                // Modifiers are looked up on the raw previous token, punctuation included.
                let previous = tokens[i - 1];
                if self.lexicon.is_intensifier(previous) {
                    polarity *= INTENSIFIER_MULTIPLIER;
                }
                if self.lexicon.is_negator(previous) {
                    polarity = -polarity;
                }
            }

            sum += polarity;
            matched += 1;
        }

        if matched == 0 {
            return SentimentAnalysis::neutral();
        }

        let score = (sum / matched as f64).clamp(-1.0, 1.0);
        SentimentAnalysis {
            label: SentimentLabel::from_score(score),
            score,
            matched_words: matched,
        }
    }
}

fn default_scorer() -> &'static SentimentScorer {
    static SCORER: OnceLock<SentimentScorer> = OnceLock::new();
    SCORER.get_or_init(SentimentScorer::default)
}

/// Score `text` with the bundled English lexicon.
pub fn analyze_sentiment(text: &str) -> SentimentAnalysis {
    default_scorer().analyze(text)
}

/// Mean sentiment score across feedback items, 0.0 when there are none.
pub fn mean_sentiment<'a, I>(feedback: I) -> f64
where
    I: IntoIterator<Item = &'a Feedback>,
{
    let (sum, count) = feedback
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), fb| (sum + fb.sentiment_score, count + 1));
    if count == 0 {
        0.0
    } else {
        (sum / count as f64).clamp(-1.0, 1.0)
    }
}
