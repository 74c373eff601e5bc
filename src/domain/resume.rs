use std::fmt;

use crate::domain::document::{DocumentKind, ExtractedField, NormalizedDocument, Section};

/// Rendered in place of the work history when no entry survived extraction.
pub const NO_EXPERIENCE: &str = "No experience found";
/// Rendered in place of the skill list when it is empty.
pub const NO_SKILLS: &str = "Skills not specified";

/// One complete block of work history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub period: String,
    pub company: String,
    pub position: String,
    pub description: String,
}

impl ExperienceEntry {
    /// Builds an entry, folding `duration` into `period`.
    pub fn new(
        period: &str,
        duration: &str,
        company: impl Into<String>,
        position: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            period: fold_duration(period, duration),
            company: company.into(),
            position: position.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ExperienceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}**\n\n*{}*\n\n**{}**\n\n{}",
            self.period, self.company, self.position, self.description
        )
    }
}

/// Rewrites every occurrence of `duration` inside `period` as ` (duration)`.
///
/// Resume pages render the duration inside the period cell, so the period
/// text already contains it verbatim. When it does not, the period is
/// returned unchanged.
pub fn fold_duration(period: &str, duration: &str) -> String {
    period.replace(duration, &format!(" ({duration})"))
}

/// Skill labels in document order. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillList(Vec<String>);

impl SkillList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for SkillList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SkillList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str(NO_SKILLS)
        } else {
            f.write_str(&self.0.join(", "))
        }
    }
}

/// Fields scraped from a resume page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resume {
    pub name: ExtractedField,
    pub gender_age: ExtractedField,
    pub location: ExtractedField,
    pub desired_position: ExtractedField,
    pub status: ExtractedField,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillList,
}

impl From<Resume> for NormalizedDocument {
    fn from(resume: Resume) -> Self {
        NormalizedDocument::new(
            DocumentKind::Resume,
            vec![
                Section::Title(resume.name.to_string()),
                Section::Emphasis(resume.gender_age.to_string()),
                Section::Field {
                    label: "Location",
                    value: resume.location.to_string(),
                },
                Section::Field {
                    label: "Position",
                    value: resume.desired_position.to_string(),
                },
                Section::Field {
                    label: "Status",
                    value: resume.status.to_string(),
                },
                Section::Heading("Work Experience"),
                Section::Experience(resume.experience),
                Section::Heading("Key Skills"),
                Section::Skills(resume.skills),
            ],
        )
    }
}
