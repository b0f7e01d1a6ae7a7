//! Opinion-aware sentiment labelling on top of a pluggable polarity engine.

use std::sync::Arc;

use crate::error::SentimentError;
use crate::lexicon::LexiconEngine;
use crate::types::{round_to, NormalizedText, Sentiment, SentimentResult};

/// Words whose presence marks text as carrying a personal opinion.
///
/// Matched as lowercase substrings, so `"thinking"` counts as `"think"`.
pub const OPINION_MARKERS: &[&str] = &[
    "think",
    "feel",
    "believe",
    "opinion",
    "love",
    "hate",
    "amazing",
    "terrible",
    "worst",
    "best",
    "overrated",
    "underrated",
    "deserves",
    "should",
    "would",
    "could",
    "great",
    "awful",
    "bad",
    "good",
    "fantastic",
    "horrible",
];

/// A source of compound polarity scores.
///
/// Implementations must be deterministic and return a value in `[-1.0, 1.0]`,
/// higher meaning more positive. One instance may be shared across threads.
pub trait PolarityEngine: Send + Sync {
    /// Compound polarity of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Engine`] if the engine cannot score the text.
    fn compound(&self, text: &str) -> Result<f64, SentimentError>;
}

impl<E: PolarityEngine + ?Sized> PolarityEngine for &E {
    fn compound(&self, text: &str) -> Result<f64, SentimentError> {
        (**self).compound(text)
    }
}

impl<E: PolarityEngine + ?Sized> PolarityEngine for Arc<E> {
    fn compound(&self, text: &str) -> Result<f64, SentimentError> {
        (**self).compound(text)
    }
}

/// Returns `true` if the lowercased text contains any [`OPINION_MARKERS`] entry.
#[must_use]
pub fn has_opinion(text: &str) -> bool {
    let lower = text.to_lowercase();
    OPINION_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// One row of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRow {
    /// `compound >= threshold` is positive, `compound <= -threshold` is negative.
    pub threshold: f64,
    /// Applied to `|compound|` for non-neutral labels; the product is capped at 1.0.
    pub confidence_multiplier: f64,
}

impl ThresholdRow {
    /// Label `compound` and derive its unrounded confidence.
    #[must_use]
    pub fn classify(self, compound: f64) -> (Sentiment, f64) {
        let magnitude = compound.abs();
        if compound >= self.threshold {
            (
                Sentiment::Positive,
                (magnitude * self.confidence_multiplier).min(1.0),
            )
        } else if compound <= -self.threshold {
            (
                Sentiment::Negative,
                (magnitude * self.confidence_multiplier).min(1.0),
            )
        } else {
            (Sentiment::Neutral, 1.0 - magnitude)
        }
    }
}

/// Two-row threshold table keyed by whether the text carries opinion markers.
///
/// Opinion text is held to a lower bar and gets a confidence boost. The 1.2
/// multiplier is a tuning constant with no calibration behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    pub with_opinion: ThresholdRow,
    pub without_opinion: ThresholdRow,
}

impl ThresholdPolicy {
    pub const DEFAULT: ThresholdPolicy = ThresholdPolicy {
        with_opinion: ThresholdRow {
            threshold: 0.3,
            confidence_multiplier: 1.2,
        },
        without_opinion: ThresholdRow {
            threshold: 0.5,
            confidence_multiplier: 1.0,
        },
    };

    #[must_use]
    pub fn row(&self, has_opinion: bool) -> ThresholdRow {
        if has_opinion {
            self.with_opinion
        } else {
            self.without_opinion
        }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scores normalized text with a polarity engine and a threshold policy.
#[derive(Debug, Clone)]
pub struct SentimentScorer<E> {
    engine: E,
    policy: ThresholdPolicy,
}

impl Default for SentimentScorer<LexiconEngine> {
    fn default() -> Self {
        Self::new(LexiconEngine::default())
    }
}

impl<E: PolarityEngine> SentimentScorer<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self::with_policy(engine, ThresholdPolicy::DEFAULT)
    }

    #[must_use]
    pub fn with_policy(engine: E, policy: ThresholdPolicy) -> Self {
        Self { engine, policy }
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    /// Score `text`, or return [`SentimentResult::Unscored`] when it is absent.
    ///
    /// The engine is not consulted for absent text. Engine output is clamped to
    /// `[-1.0, 1.0]`; `confidence` and `compound` are rounded to 2 decimals.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Engine`] if the engine fails or returns a
    /// non-finite value.
    pub fn score(&self, text: Option<&NormalizedText>) -> Result<SentimentResult, SentimentError> {
        let Some(text) = text else {
            return Ok(SentimentResult::Unscored);
        };

        let raw = self.engine.compound(text.as_str())?;
        if !raw.is_finite() {
            return Err(SentimentError::Engine(format!(
                "engine returned non-finite compound {raw}"
            )));
        }
        let compound = raw.clamp(-1.0, 1.0);

        let opinion = has_opinion(text.as_str());
        let (sentiment, confidence) = self.policy.row(opinion).classify(compound);

        tracing::trace!(compound, opinion, sentiment = %sentiment, "scored text");

        Ok(SentimentResult::Scored {
            sentiment,
            confidence: round_to(confidence, 2),
            compound: round_to(compound, 2),
        })
    }
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
