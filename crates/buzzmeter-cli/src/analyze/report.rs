//! Text and JSON rendering of an analysis.

use std::fmt::{self, Write};

use buzzmeter_core::Period;
use buzzmeter_sentiment::{chart_model, ChartModel, PostRecord, ScoredPost, SentimentAnalysis};
use chrono::{DateTime, Utc};

/// Width of the longest bar in the text chart.
const BAR_WIDTH: usize = 40;

/// Sample post text is cut to this many characters.
const SAMPLE_TEXT_CHARS: usize = 80;

pub(crate) struct ReportContext<'a> {
    pub subject: &'a str,
    pub period: Period,
    pub window: (DateTime<Utc>, DateTime<Utc>),
}

/// Render the human-readable report.
///
/// # Errors
///
/// Returns `fmt::Error` only if writing to the buffer fails.
pub(crate) fn render_text(
    ctx: &ReportContext<'_>,
    analysis: &SentimentAnalysis,
    sample: &[&ScoredPost],
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let (start, end) = ctx.window;
    let summary = &analysis.summary;
    let chart = chart_model(summary);

    writeln!(out, "Analysis Results")?;
    writeln!(
        out,
        "Analyzed {} posts about {} from {} to {} ({})",
        summary.total,
        ctx.subject,
        start.format("%Y-%m-%d %H:%M"),
        end.format("%Y-%m-%d %H:%M"),
        ctx.period.label()
    )?;
    if analysis.filtered > 0 || analysis.failed > 0 {
        writeln!(
            out,
            "({} filtered as news or too short, {} failed to score)",
            analysis.filtered, analysis.failed
        )?;
    }

    writeln!(out)?;
    write_chart(&mut out, &chart)?;

    if !sample.is_empty() {
        writeln!(out)?;
        writeln!(out, "Sample Posts with Analysis")?;
        writeln!(out, "{:<18}{:<10}{:<6}TEXT", "CREATED", "LABEL", "CONF")?;
        for record in sample {
            writeln!(
                out,
                "{:<18}{:<10}{:<6.2}{}",
                record.post.created_at.format("%Y-%m-%d %H:%M"),
                record.label(),
                record.confidence(),
                truncate(&record.post.text, SAMPLE_TEXT_CHARS)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Analysis Statistics")?;
    writeln!(out, "Average Confidence: {:.2}", summary.average_confidence)?;
    writeln!(out, "Most Common Sentiment: {}", summary.mode_label)?;

    writeln!(out)?;
    writeln!(out, "Sentiment Distribution:")?;
    for bar in &chart.bars {
        writeln!(
            out,
            "{}: {} posts ({:.1}%)",
            bar.label.title(),
            bar.count,
            bar.percentage
        )?;
    }

    Ok(out)
}

fn write_chart(out: &mut String, chart: &ChartModel) -> fmt::Result {
    writeln!(out, "{}", chart.title)?;
    let max = chart.bars.iter().map(|b| b.count).max().unwrap_or(0);
    for bar in &chart.bars {
        let width = if max == 0 {
            0
        } else {
            (bar.count * BAR_WIDTH).div_ceil(max)
        };
        writeln!(
            out,
            "{:<9}{} {} ({:.1}%) [{}]",
            bar.label.as_str(),
            "█".repeat(width),
            bar.count,
            bar.percentage,
            bar.label.color_name()
        )?;
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Build the machine-readable report.
pub(crate) fn render_json(
    ctx: &ReportContext<'_>,
    analysis: &SentimentAnalysis,
) -> serde_json::Value {
    let records: Vec<PostRecord<'_>> = analysis.records.iter().map(PostRecord::from).collect();
    serde_json::json!({
        "subject": ctx.subject,
        "period": ctx.period,
        "window": { "start": ctx.window.0, "end": ctx.window.1 },
        "filtered": analysis.filtered,
        "failed": analysis.failed,
        "records": records,
        "summary": analysis.summary,
        "chart": chart_model(&analysis.summary),
    })
}

#[cfg(test)]
mod tests {
    use buzzmeter_core::RawPost;
    use buzzmeter_sentiment::{analyze_posts, PolarityEngine, SentimentError, SentimentScorer};
    use chrono::TimeZone;

    use super::*;

    struct FixedEngine(f64);

    impl PolarityEngine for FixedEngine {
        fn compound(&self, _text: &str) -> Result<f64, SentimentError> {
            Ok(self.0)
        }
    }

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, 0, 0).unwrap()
    }

    fn analysis() -> SentimentAnalysis {
        let scorer = SentimentScorer::new(FixedEngine(0.6));
        let posts = vec![
            RawPost::new("I love her new single", ts(9)),
            RawPost::new("the show is at nine", ts(10)),
            RawPost::new("BREAKING: show moved to ten", ts(11)),
        ];
        analyze_posts(&scorer, posts).unwrap()
    }

    fn ctx() -> ReportContext<'static> {
        ReportContext {
            subject: "Taylor Swift",
            period: Period::Last24Hours,
            window: (ts(0), ts(12)),
        }
    }

    #[test]
    fn text_report_has_header_and_statistics() {
        let analysis = analysis();
        let text = render_text(&ctx(), &analysis, &[]).unwrap();
        assert!(text.contains(
            "Analyzed 2 posts about Taylor Swift from 2025-03-10 00:00 to 2025-03-10 12:00 (Last 24 hours)"
        ));
        assert!(text.contains("(1 filtered as news or too short, 0 failed to score)"));
        assert!(text.contains("Average Confidence: 0.66"));
        assert!(text.contains("Most Common Sentiment: positive"));
        assert!(text.contains("Positive: 2 posts (100.0%)"));
        assert!(!text.contains("Sample Posts"));
    }

    #[test]
    fn text_report_lists_sample_posts() {
        let analysis = analysis();
        let sample: Vec<&ScoredPost> = analysis.records.iter().collect();
        let text = render_text(&ctx(), &analysis, &sample).unwrap();
        assert!(text.contains("Sample Posts with Analysis"));
        assert!(text.contains("I love her new single"));
    }

    #[test]
    fn sample_table_pads_label_column() {
        let analysis = analysis();
        let sample: Vec<&ScoredPost> = analysis.records.iter().take(1).collect();
        let text = render_text(&ctx(), &analysis, &sample).unwrap();
        assert!(
            text.contains("2025-03-10 09:00  positive  0.72  I love her new single"),
            "got:\n{text}"
        );
    }

    #[test]
    fn chart_bar_scales_to_width() {
        let analysis = analysis();
        let text = render_text(&ctx(), &analysis, &[]).unwrap();
        let bar_line = text
            .lines()
            .find(|l| l.starts_with("positive"))
            .expect("positive bar line");
        assert_eq!(bar_line.matches('█').count(), BAR_WIDTH);
        assert!(bar_line.ends_with("[green]"));
    }

    #[test]
    fn truncate_flattens_and_cuts_long_text() {
        assert_eq!(truncate("a\nb  c", 10), "a b c");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn json_report_carries_records_and_summary() {
        let analysis = analysis();
        let json = render_json(&ctx(), &analysis);
        assert_eq!(json["subject"], "Taylor Swift");
        assert_eq!(json["period"], "24h");
        assert_eq!(json["records"].as_array().unwrap().len(), 2);
        assert_eq!(json["records"][0]["sentiment_label"], "positive");
        assert_eq!(json["summary"]["counts"]["positive"], 2);
        assert_eq!(json["chart"]["bars"][0]["color"], "#2ecc71");
    }
}
