pub mod crawlers;
pub mod domain;
pub mod extractors;
pub mod models;
pub mod processing;
pub mod report;
pub mod scoring;

/// Upper bound of the score scale the evaluation service is asked to use.
pub const MAX_SCORE: i64 = 10;
