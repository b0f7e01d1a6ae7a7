use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("polarity engine error: {0}")]
    Engine(String),

    #[error("no posts found")]
    NoPosts,

    #[error("no analyzable posts remained after cleaning")]
    NoAnalyzablePosts,
}
