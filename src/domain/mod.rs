//! Plain data types produced by extraction and scoring.

pub mod document;
pub mod posting;
pub mod resume;
pub mod score;
