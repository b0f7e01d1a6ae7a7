use std::collections::BTreeMap;
use std::fmt;

use buzzmeter_core::RawPost;
use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Sentiment label assigned to a post.
///
/// Variant order is the canonical order used for tie-breaks and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in canonical order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Title-cased label, e.g. `"Positive"`.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Display color name: green, gray or red.
    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            Sentiment::Positive => "green",
            Sentiment::Neutral => "gray",
            Sentiment::Negative => "red",
        }
    }

    /// Hex color used for chart bars.
    #[must_use]
    pub fn color_hex(self) -> &'static str {
        match self {
            Sentiment::Positive => "#2ecc71",
            Sentiment::Neutral => "#95a5a6",
            Sentiment::Negative => "#e74c3c",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Post text that survived cleaning.
///
/// Only [`crate::normalize`] constructs this, so a value always has no URLs
/// and at least three whitespace-delimited tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Outcome of scoring one piece of text.
///
/// `Unscored` stands in for text that was excluded before scoring and reads
/// as neutral with zero confidence and zero compound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentimentResult {
    Scored {
        sentiment: Sentiment,
        /// In `[0.0, 1.0]`, rounded to 2 decimals.
        confidence: f64,
        /// In `[-1.0, 1.0]`, rounded to 2 decimals.
        compound: f64,
    },
    Unscored,
}

impl SentimentResult {
    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        match self {
            SentimentResult::Scored { sentiment, .. } => *sentiment,
            SentimentResult::Unscored => Sentiment::Neutral,
        }
    }

    #[must_use]
    pub fn confidence(&self) -> f64 {
        match self {
            SentimentResult::Scored { confidence, .. } => *confidence,
            SentimentResult::Unscored => 0.0,
        }
    }

    #[must_use]
    pub fn compound(&self) -> f64 {
        match self {
            SentimentResult::Scored { compound, .. } => *compound,
            SentimentResult::Unscored => 0.0,
        }
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        matches!(self, SentimentResult::Scored { .. })
    }
}

impl Serialize for SentimentResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SentimentResult", 3)?;
        state.serialize_field("sentiment", &self.sentiment())?;
        state.serialize_field("confidence", &self.confidence())?;
        state.serialize_field("compound", &self.compound())?;
        state.end()
    }
}

/// A post together with its cleaned text and score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPost {
    pub post: RawPost,
    pub cleaned_text: NormalizedText,
    pub sentiment: SentimentResult,
}

impl ScoredPost {
    #[must_use]
    pub fn label(&self) -> Sentiment {
        self.sentiment.sentiment()
    }

    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.sentiment.confidence()
    }
}

/// Flat, serializable view of a [`ScoredPost`] for display consumers.
#[derive(Debug, Clone, Serialize)]
pub struct PostRecord<'a> {
    pub created_at: DateTime<Utc>,
    pub text: &'a str,
    pub cleaned_text: &'a str,
    pub sentiment: SentimentResult,
    pub sentiment_label: Sentiment,
    pub confidence: f64,
}

impl<'a> From<&'a ScoredPost> for PostRecord<'a> {
    fn from(scored: &'a ScoredPost) -> Self {
        Self {
            created_at: scored.post.created_at,
            text: &scored.post.text,
            cleaned_text: scored.cleaned_text.as_str(),
            sentiment: scored.sentiment,
            sentiment_label: scored.label(),
            confidence: scored.confidence(),
        }
    }
}

/// Distribution statistics over a collection of scored posts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub total: usize,
    /// Always holds all three labels.
    pub counts: BTreeMap<Sentiment, usize>,
    /// Share of `total` per label, rounded to 1 decimal.
    pub percentages: BTreeMap<Sentiment, f64>,
    pub average_confidence: f64,
    pub mode_label: Sentiment,
}

impl AggregateSummary {
    #[must_use]
    pub fn count(&self, label: Sentiment) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn percentage(&self, label: Sentiment) -> f64 {
        self.percentages.get(&label).copied().unwrap_or(0.0)
    }
}

/// Round `value` to `places` decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
