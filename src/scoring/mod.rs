//! Candidate evaluation: the external text-generation service and the
//! parser that turns its answer into a [`crate::domain::score::Score`].

use async_trait::async_trait;
use thiserror::Error;

pub mod openai;
pub mod parser;
pub mod prompts;

pub use parser::{ScoreParser, parse_score};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("failed to build evaluation client: {0}")]
    Build(String),

    #[error("evaluation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("evaluation service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("evaluation service returned no text")]
    EmptyResponse,
}

pub type ScoringResult<T> = Result<T, ScoringError>;

/// A text-generation service able to judge a candidate.
#[async_trait]
pub trait EvaluationService: Send + Sync {
    /// Sends one system/user prompt pair and returns the generated text.
    async fn evaluate(&self, system_prompt: &str, user_prompt: &str) -> ScoringResult<String>;
}
