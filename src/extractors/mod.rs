//! HTML to [`NormalizedDocument`] extraction.
//!
//! Extraction never fails: `scraper` parses any input, and every lookup that
//! misses degrades to a placeholder value.

use scraper::{ElementRef, Selector};

use crate::domain::document::{DocumentKind, NormalizedDocument, RawDocument};

pub mod posting;
pub mod resume;

pub use posting::extract_job_posting;
pub use resume::extract_resume;

/// Extracts a fetched page according to its kind.
pub fn extract(raw: &RawDocument) -> NormalizedDocument {
    match raw.kind() {
        DocumentKind::JobPosting => extract_job_posting(raw.html()),
        DocumentKind::Resume => extract_resume(raw.html()),
    }
}

/// Parses a selector literal from this module.
fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("selector literal must be valid CSS")
}

/// All descendant text of `element`, concatenated and trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant of `scope` matching `selector`.
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}
