//! Batch orchestration: clean, score and summarize a set of posts.

use buzzmeter_core::RawPost;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::aggregate::summarize;
use crate::error::SentimentError;
use crate::normalize::normalize;
use crate::scorer::{PolarityEngine, SentimentScorer};
use crate::types::{AggregateSummary, ScoredPost};

/// Scored posts plus their summary for one batch.
#[derive(Debug, Clone)]
pub struct SentimentAnalysis {
    pub records: Vec<ScoredPost>,
    pub summary: AggregateSummary,
    /// Posts dropped by [`normalize`].
    pub filtered: usize,
    /// Posts skipped because the polarity engine failed on them.
    pub failed: usize,
}

/// Clean and score a single post.
///
/// Returns `Ok(None)` when the post is excluded during cleaning. This is the
/// per-post unit of [`analyze_posts`]; callers that parallelize can map it
/// over posts and feed the survivors to [`summarize`].
///
/// # Errors
///
/// Returns [`SentimentError::Engine`] if the polarity engine fails.
pub fn score_post<E: PolarityEngine>(
    scorer: &SentimentScorer<E>,
    post: RawPost,
) -> Result<Option<ScoredPost>, SentimentError> {
    let Some(cleaned_text) = normalize(&post.text) else {
        return Ok(None);
    };
    let sentiment = scorer.score(Some(&cleaned_text))?;
    Ok(Some(ScoredPost {
        post,
        cleaned_text,
        sentiment,
    }))
}

/// Run the full pipeline over a batch of posts.
///
/// 1. Clean each post, dropping news relays and near-empty text.
/// 2. Score the survivors.
/// 3. Summarize the scored posts.
///
/// Engine failures on individual posts are logged and skipped.
///
/// # Errors
///
/// Returns [`SentimentError::NoPosts`] for an empty batch and
/// [`SentimentError::NoAnalyzablePosts`] when nothing survives cleaning and
/// scoring.
pub fn analyze_posts<E: PolarityEngine>(
    scorer: &SentimentScorer<E>,
    posts: Vec<RawPost>,
) -> Result<SentimentAnalysis, SentimentError> {
    if posts.is_empty() {
        return Err(SentimentError::NoPosts);
    }

    let received = posts.len();
    let mut records = Vec::with_capacity(received);
    let mut filtered = 0_usize;
    let mut failed = 0_usize;

    for post in posts {
        let created_at = post.created_at;
        match score_post(scorer, post) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => filtered += 1,
            Err(e) => {
                tracing::warn!(%created_at, error = %e, "scoring failed, skipping post");
                failed += 1;
            }
        }
    }

    tracing::debug!(
        received,
        scored = records.len(),
        filtered,
        failed,
        "scored post batch"
    );

    if records.is_empty() {
        return Err(SentimentError::NoAnalyzablePosts);
    }

    let summary = summarize(&records)?;

    tracing::info!(
        posts = summary.total,
        mode = %summary.mode_label,
        average_confidence = summary.average_confidence,
        "sentiment analysis complete"
    );

    Ok(SentimentAnalysis {
        records,
        summary,
        filtered,
        failed,
    })
}

/// Pick up to `n` records at random for display.
pub fn sample_records<'a, R: Rng + ?Sized>(
    records: &'a [ScoredPost],
    n: usize,
    rng: &mut R,
) -> Vec<&'a ScoredPost> {
    records.choose_multiple(rng, n).collect()
}
