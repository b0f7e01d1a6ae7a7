//! Distribution statistics over scored posts.

use std::collections::BTreeMap;

use crate::error::SentimentError;
use crate::types::{round_to, AggregateSummary, ScoredPost, Sentiment};

/// Summarize a full collection of scored posts.
///
/// Counts and percentages always cover all three labels. Ties for the most
/// common label go to the earliest label in [`Sentiment::ALL`].
///
/// # Errors
///
/// Returns [`SentimentError::NoAnalyzablePosts`] for an empty collection.
pub fn summarize(records: &[ScoredPost]) -> Result<AggregateSummary, SentimentError> {
    if records.is_empty() {
        return Err(SentimentError::NoAnalyzablePosts);
    }

    let mut counts: BTreeMap<Sentiment, usize> =
        Sentiment::ALL.iter().map(|&label| (label, 0)).collect();
    for record in records {
        *counts.entry(record.label()).or_insert(0) += 1;
    }

    let total = records.len();
    #[allow(clippy::cast_precision_loss)]
    let denom = total as f64;

    #[allow(clippy::cast_precision_loss)]
    let percentages = counts
        .iter()
        .map(|(&label, &count)| (label, round_to(count as f64 / denom * 100.0, 1)))
        .collect();

    let average_confidence = records.iter().map(ScoredPost::confidence).sum::<f64>() / denom;

    let mut mode_label = Sentiment::Positive;
    let mut best = 0;
    for label in Sentiment::ALL {
        let count = counts[&label];
        if count > best {
            best = count;
            mode_label = label;
        }
    }

    Ok(AggregateSummary {
        total,
        counts,
        percentages,
        average_confidence,
        mode_label,
    })
}
