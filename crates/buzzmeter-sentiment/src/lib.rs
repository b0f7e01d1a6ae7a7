//! Opinion filtering and sentiment scoring for social posts.
//!
//! Cleans raw post text, drops news-style relays, scores each remaining post
//! with a pluggable polarity engine and an opinion-aware threshold policy,
//! then summarizes the label distribution.

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use aggregate::summarize;
pub use chart::{chart_bars, chart_model, ChartBar, ChartModel};
pub use error::SentimentError;
pub use lexicon::LexiconEngine;
pub use normalize::normalize;
pub use pipeline::{analyze_posts, sample_records, score_post, SentimentAnalysis};
pub use scorer::{has_opinion, PolarityEngine, SentimentScorer, ThresholdPolicy, ThresholdRow};
pub use types::{
    AggregateSummary, NormalizedText, PostRecord, ScoredPost, Sentiment, SentimentResult,
};
