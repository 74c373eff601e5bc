//! Normalized, Markdown-like representation of a scraped page.
//!
//! A [`NormalizedDocument`] is an ordered list of [`Section`]s. Section order
//! is decided by the builder (see [`crate::domain::posting`] and
//! [`crate::domain::resume`]) and never depends on which fields were found:
//! a missing value is rendered as a placeholder instead of being dropped.
//! The transform is one-way; nothing parses the rendered text back.

use std::fmt;

use crate::domain::resume::{ExperienceEntry, NO_EXPERIENCE, SkillList};

/// Placeholder rendered for any field that could not be located.
pub const NOT_FOUND: &str = "Not found";

/// Which kind of page a piece of HTML came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    JobPosting,
    Resume,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::JobPosting => f.write_str("job posting"),
            DocumentKind::Resume => f.write_str("resume"),
        }
    }
}

/// Fetched page body tagged with the kind of page it is.
#[derive(Clone, Debug)]
pub struct RawDocument {
    kind: DocumentKind,
    html: String,
}

impl RawDocument {
    pub fn new(kind: DocumentKind, html: impl Into<String>) -> Self {
        Self {
            kind,
            html: html.into(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// A single looked-up value: either the located text or the sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractedField {
    Found(String),
    NotFound,
}

impl ExtractedField {
    /// Returns the located text, or [`NOT_FOUND`] for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractedField::Found(value) => value.as_str(),
            ExtractedField::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ExtractedField::Found(_))
    }
}

impl From<Option<String>> for ExtractedField {
    fn from(value: Option<String>) -> Self {
        value.map_or(ExtractedField::NotFound, ExtractedField::Found)
    }
}

impl fmt::Display for ExtractedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled block of a [`NormalizedDocument`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    /// Level-1 heading.
    Title(String),
    /// A line rendered in bold.
    Emphasis(String),
    /// `**label:** value`
    Field { label: &'static str, value: String },
    /// Level-2 heading.
    Heading(&'static str),
    /// Free text, rendered verbatim.
    Text(String),
    Experience(Vec<ExperienceEntry>),
    Skills(SkillList),
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Title(text) => write!(f, "# {text}"),
            Section::Emphasis(text) => write!(f, "**{text}**"),
            Section::Field { label, value } => write!(f, "**{label}:** {value}"),
            Section::Heading(text) => write!(f, "## {text}"),
            Section::Text(text) => f.write_str(text),
            Section::Experience(entries) if entries.is_empty() => f.write_str(NO_EXPERIENCE),
            Section::Experience(entries) => {
                let rendered = entries
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n\n");
                f.write_str(&rendered)
            }
            Section::Skills(skills) => write!(f, "{skills}"),
        }
    }
}

/// Deterministic text rendering of a posting or a resume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedDocument {
    kind: DocumentKind,
    sections: Vec<Section>,
}

impl NormalizedDocument {
    pub fn new(kind: DocumentKind, sections: Vec<Section>) -> Self {
        Self { kind, sections }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Renders every section separated by a blank line, trimmed.
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim()
            .to_string()
    }
}

impl fmt::Display for NormalizedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
