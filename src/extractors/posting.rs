use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::domain::document::NormalizedDocument;
use crate::domain::posting::JobPosting;
use crate::extractors::{css, first_text};

static TITLE: LazyLock<Selector> = LazyLock::new(|| css("h1"));
static SALARY: LazyLock<Selector> = LazyLock::new(|| css("span[data-qa='vacancy-salary']"));
static COMPANY: LazyLock<Selector> =
    LazyLock::new(|| css("a[data-qa='vacancy-company-name']"));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| css("div[data-qa='vacancy-description']"));

/// Reads the posting fields out of a parsed page.
pub fn parse_job_posting(document: &Html) -> JobPosting {
    let root = document.root_element();

    // Description keeps one line per text node
    let description = root.select(&DESCRIPTION).next().map(|el| {
        el.text()
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    });

    JobPosting {
        title: first_text(root, &TITLE).into(),
        company: first_text(root, &COMPANY).into(),
        salary: first_text(root, &SALARY).into(),
        description,
    }
}

/// Converts a job posting page into its normalized text form.
pub fn extract_job_posting(html: &str) -> NormalizedDocument {
    let document = Html::parse_document(html);
    let posting = parse_job_posting(&document);
    if !posting.title.is_found() {
        log::warn!("Job posting has no title");
    }
    posting.into()
}
