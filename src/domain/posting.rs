use crate::domain::document::{DocumentKind, ExtractedField, NormalizedDocument, Section};

/// Placeholder used when the posting has no description block.
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found";

/// Fields scraped from a job posting page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobPosting {
    pub title: ExtractedField,
    pub company: ExtractedField,
    pub salary: ExtractedField,
    pub description: Option<String>,
}

impl From<JobPosting> for NormalizedDocument {
    fn from(posting: JobPosting) -> Self {
        NormalizedDocument::new(
            DocumentKind::JobPosting,
            vec![
                Section::Title(posting.title.to_string()),
                Section::Field {
                    label: "Company",
                    value: posting.company.to_string(),
                },
                Section::Field {
                    label: "Salary",
                    value: posting.salary.to_string(),
                },
                Section::Heading("Description"),
                Section::Text(
                    posting
                        .description
                        .unwrap_or_else(|| DESCRIPTION_NOT_FOUND.to_string()),
                ),
            ],
        )
    }
}
