//! Reading posts from disk or stdin and selecting the analysis window.

use std::path::Path;

use anyhow::Context;
use buzzmeter_core::RawPost;
use chrono::{DateTime, Utc};
use tokio::io::AsyncReadExt;

/// Read the raw input from `path`, or from stdin when `path` is `-`.
pub(crate) async fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read posts from stdin")?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read posts from {}", path.display()))
}

/// Parse posts from a JSON array or from JSON lines.
///
/// Blank lines are ignored in JSON-lines input.
pub(crate) fn parse_posts(raw: &str) -> anyhow::Result<Vec<RawPost>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("invalid JSON array of posts");
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<RawPost>(line)
                .with_context(|| format!("invalid post on line {}", idx + 1))
        })
        .collect()
}

/// Keep posts created within `[start, end]`, capped at `max_posts`.
///
/// Input order is preserved.
pub(crate) fn select_posts(
    posts: Vec<RawPost>,
    (start, end): (DateTime<Utc>, DateTime<Utc>),
    max_posts: usize,
) -> Vec<RawPost> {
    let before = posts.len();
    let selected: Vec<RawPost> = posts
        .into_iter()
        .filter(|p| p.created_at >= start && p.created_at <= end)
        .take(max_posts)
        .collect();
    tracing::debug!(
        read = before,
        selected = selected.len(),
        max_posts,
        "selected posts in window"
    );
    selected
}
