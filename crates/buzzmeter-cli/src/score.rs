//! Single-text scoring for quick checks from the terminal.

use buzzmeter_sentiment::{has_opinion, normalize, SentimentScorer};

/// Clean and score `text`, printing each step.
///
/// # Errors
///
/// Returns an error if the polarity engine fails.
pub(crate) fn run_score(text: &str) -> anyhow::Result<()> {
    let scorer = SentimentScorer::default();

    let Some(cleaned) = normalize(text) else {
        println!("rejected: announcement-style or fewer than 3 words after cleaning");
        let result = scorer.score(None)?;
        println!(
            "sentiment: {} (confidence {:.2}, compound {:.2})",
            result.sentiment(),
            result.confidence(),
            result.compound()
        );
        return Ok(());
    };

    let result = scorer.score(Some(&cleaned))?;
    println!("cleaned:   {cleaned}");
    println!("opinion:   {}", has_opinion(cleaned.as_str()));
    println!(
        "sentiment: {} (confidence {:.2}, compound {:.2})",
        result.sentiment(),
        result.confidence(),
        result.compound()
    );
    Ok(())
}
