mod analyze;
mod score;

use std::path::PathBuf;

use buzzmeter_core::Period;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "buzzmeter")]
#[command(about = "Estimate public sentiment toward a subject from social posts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Clean, score and summarize a file of posts about a subject
    Analyze {
        /// Name of the person or topic the posts mention
        #[arg(long)]
        subject: String,

        /// JSON array or JSON-lines file of `{text, created_at}` posts; `-` reads stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Look-back window: 24h, 3d or 7d (defaults to `BUZZMETER_PERIOD`)
        #[arg(long)]
        period: Option<Period>,

        /// Maximum posts to analyze, 10 to 100 (defaults to `BUZZMETER_MAX_POSTS`)
        #[arg(long)]
        max_posts: Option<usize>,

        /// Print a JSON document instead of the text report
        #[arg(long)]
        json: bool,

        /// Seed for choosing sample posts
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a single piece of text and explain the result
    Score {
        /// Text to score
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = buzzmeter_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            subject,
            input,
            period,
            max_posts,
            json,
            seed,
        }) => {
            let options = analyze::AnalyzeOptions {
                subject,
                input,
                period: period.unwrap_or(config.period),
                max_posts: max_posts.unwrap_or(config.max_posts),
                sample_size: config.sample_size,
                json,
                seed,
            };
            analyze::run_analyze(options).await?;
        }
        Some(Commands::Score { text }) => score::run_score(&text)?,
        None => println!("buzzmeter: run `buzzmeter analyze --help` to get started"),
    }

    Ok(())
}
