//! Post types shared between the post source and the sentiment pipeline.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Bounds on how many posts a single analysis may consider.
pub const MAX_POSTS_RANGE: RangeInclusive<usize> = 10..=100;

/// A post as delivered by the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    pub text: String,
    /// Publication time, RFC 3339 on the wire.
    pub created_at: DateTime<Utc>,
}

impl RawPost {
    #[must_use]
    pub fn new(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            created_at,
        }
    }
}

/// Look-back window for posts under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "3d")]
    Last3Days,
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
}

impl Period {
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Period::Last24Hours => Duration::hours(24),
            Period::Last3Days => Duration::days(3),
            Period::Last7Days => Duration::days(7),
        }
    }

    /// Returns `(start, end)` for a window ending one minute before `now`.
    ///
    /// The one-minute margin keeps the window clear of posts the upstream
    /// search index has not settled yet.
    #[must_use]
    pub fn window(self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let end = now - Duration::minutes(1);
        (end - self.duration(), end)
    }

    /// Human-readable label, e.g. `"Last 3 days"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Period::Last24Hours => "Last 24 hours",
            Period::Last3Days => "Last 3 days",
            Period::Last7Days => "Last 7 days",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Last24Hours => write!(f, "24h"),
            Period::Last3Days => write!(f, "3d"),
            Period::Last7Days => write!(f, "7d"),
        }
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" => Ok(Period::Last24Hours),
            "3d" => Ok(Period::Last3Days),
            "7d" => Ok(Period::Last7Days),
            other => Err(CoreError::InvalidPeriod(other.to_string())),
        }
    }
}
