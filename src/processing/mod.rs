use thiserror::Error;

use crate::crawlers::CrawlerError;
use crate::domain::document::{DocumentKind, NormalizedDocument};
use crate::domain::score::Score;
use crate::scoring::ScoringError;

pub mod evaluation;

pub use evaluation::{evaluate_documents, evaluate_urls};

/// Result of scoring one resume against one job posting.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub job_posting: NormalizedDocument,
    pub resume: NormalizedDocument,
    /// Raw text returned by the evaluation service.
    pub response: String,
    pub score: Score,
}

/// Failures that stop an evaluation. Extraction problems are not among
/// them: those degrade to placeholders.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to fetch {kind}: {source}")]
    Fetch {
        kind: DocumentKind,
        #[source]
        source: CrawlerError,
    },

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

pub type ProcessingResult<T> = Result<T, ProcessingError>;
