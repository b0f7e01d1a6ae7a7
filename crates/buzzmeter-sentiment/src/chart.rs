//! Bar chart model for the sentiment distribution.
//!
//! Rendering is left to the caller; this module only decides which bars
//! exist, their order, colors and annotations.

use serde::Serialize;

use crate::types::{AggregateSummary, Sentiment};

pub const CHART_TITLE: &str = "Sentiment Distribution";
pub const X_AXIS_LABEL: &str = "Sentiment";
pub const Y_AXIS_LABEL: &str = "Number of Posts";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: Sentiment,
    pub count: usize,
    pub percentage: f64,
    /// Hex color, e.g. `"#2ecc71"`.
    pub color: &'static str,
    /// Text placed above the bar: count, then percentage on a second line.
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<ChartBar>,
}

/// Bars for every label with a non-zero count, most frequent first.
///
/// Equal counts keep canonical label order.
#[must_use]
pub fn chart_bars(summary: &AggregateSummary) -> Vec<ChartBar> {
    let mut bars: Vec<ChartBar> = Sentiment::ALL
        .iter()
        .filter_map(|&label| {
            let count = summary.count(label);
            (count > 0).then(|| {
                let percentage = summary.percentage(label);
                ChartBar {
                    label,
                    count,
                    percentage,
                    color: label.color_hex(),
                    annotation: format!("{count}\n({percentage:.1}%)"),
                }
            })
        })
        .collect();
    bars.sort_by(|a, b| b.count.cmp(&a.count));
    bars
}

#[must_use]
pub fn chart_model(summary: &AggregateSummary) -> ChartModel {
    ChartModel {
        title: CHART_TITLE,
        x_label: X_AXIS_LABEL,
        y_label: Y_AXIS_LABEL,
        bars: chart_bars(summary),
    }
}
