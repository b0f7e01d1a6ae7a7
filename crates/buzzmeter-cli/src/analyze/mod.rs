//! `analyze` command: read posts, run the sentiment pipeline, print a report.

mod input;
mod report;

use std::path::PathBuf;

use buzzmeter_core::{Period, MAX_POSTS_RANGE};
use buzzmeter_sentiment::{analyze_posts, sample_records, SentimentError, SentimentScorer};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use self::input::{parse_posts, read_input, select_posts};
use self::report::{render_json, render_text, ReportContext};

#[derive(Debug)]
pub(crate) struct AnalyzeOptions {
    pub subject: String,
    pub input: PathBuf,
    pub period: Period,
    pub max_posts: usize,
    pub sample_size: usize,
    pub json: bool,
    pub seed: Option<u64>,
}

/// Validate the subject and post cap before any input is read.
///
/// # Errors
///
/// Returns an error if the subject is blank or `max_posts` is outside
/// [`MAX_POSTS_RANGE`].
pub(crate) fn validate_options(subject: &str, max_posts: usize) -> anyhow::Result<()> {
    if subject.trim().is_empty() {
        anyhow::bail!("subject must not be empty");
    }
    if !MAX_POSTS_RANGE.contains(&max_posts) {
        anyhow::bail!(
            "max posts must be between {} and {}, got {max_posts}",
            MAX_POSTS_RANGE.start(),
            MAX_POSTS_RANGE.end()
        );
    }
    Ok(())
}

/// Run the full analysis for one subject.
///
/// An empty window or a batch where nothing survives cleaning is reported to
/// the user and is not treated as a failure.
///
/// # Errors
///
/// Returns an error if the options are invalid, the input cannot be read or
/// parsed, or the report cannot be rendered.
pub(crate) async fn run_analyze(options: AnalyzeOptions) -> anyhow::Result<()> {
    validate_options(&options.subject, options.max_posts)?;
    let subject = options.subject.trim();

    let raw = read_input(&options.input).await?;
    let posts = parse_posts(&raw)?;

    let window = options.period.window(Utc::now());
    let posts = select_posts(posts, window, options.max_posts);

    let scorer = SentimentScorer::default();
    let analysis = match analyze_posts(&scorer, posts) {
        Ok(analysis) => analysis,
        Err(SentimentError::NoPosts) => {
            println!(
                "no posts found mentioning {subject} in the selected window ({})",
                options.period.label()
            );
            return Ok(());
        }
        Err(SentimentError::NoAnalyzablePosts) => {
            println!("no valid posts remained after cleaning");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let ctx = ReportContext {
        subject,
        period: options.period,
        window,
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&ctx, &analysis))?);
        return Ok(());
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let sample = sample_records(&analysis.records, options.sample_size, &mut rng);

    print!("{}", render_text(&ctx, &analysis, &sample)?);
    Ok(())
}
