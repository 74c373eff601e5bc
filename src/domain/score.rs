use std::fmt;

use serde::Serialize;

/// Candidate fit score as stated by the evaluation service.
///
/// The expected range is 1 to 10 but the value is kept exactly as parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(i64);

impl Score {
    /// Neutral score used when the response states none.
    pub const DEFAULT: Score = Score(5);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
