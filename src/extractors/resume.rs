use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::domain::document::NormalizedDocument;
use crate::domain::resume::{ExperienceEntry, Resume, SkillList};
use crate::extractors::{css, element_text, first_text};

static NAME: LazyLock<Selector> = LazyLock::new(|| css("h2[data-qa='bloko-header-1']"));
static GENDER_AGE: LazyLock<Selector> = LazyLock::new(|| css("p"));
static LOCATION: LazyLock<Selector> =
    LazyLock::new(|| css("span[data-qa='resume-personal-address']"));
static DESIRED_POSITION: LazyLock<Selector> =
    LazyLock::new(|| css("span[data-qa='resume-block-title-position']"));
static STATUS: LazyLock<Selector> = LazyLock::new(|| css("span[data-qa='job-search-status']"));

static EXPERIENCE: LazyLock<Selector> =
    LazyLock::new(|| css("div[data-qa='resume-block-experience']"));
static EXPERIENCE_ITEM: LazyLock<Selector> = LazyLock::new(|| css("div.resume-block-item-gap"));
static PERIOD: LazyLock<Selector> = LazyLock::new(|| css("div.bloko-column_s-2"));
static DURATION: LazyLock<Selector> = LazyLock::new(|| css("div.bloko-text"));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| css("div.bloko-text_strong"));
static POSITION: LazyLock<Selector> =
    LazyLock::new(|| css("div[data-qa='resume-block-experience-position']"));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| css("div[data-qa='resume-block-experience-description']"));

static SKILLS: LazyLock<Selector> = LazyLock::new(|| css("div[data-qa='skills-table']"));
static SKILL_TAG: LazyLock<Selector> = LazyLock::new(|| css("span[data-qa='bloko-tag__text']"));

/// Reads one work-history block. Returns `None` unless all five parts exist.
fn parse_experience_item(item: ElementRef<'_>) -> Option<ExperienceEntry> {
    let period = first_text(item, &PERIOD)?;
    let duration = first_text(item, &DURATION)?;
    let company = first_text(item, &COMPANY)?;
    let position = first_text(item, &POSITION)?;
    let description = first_text(item, &DESCRIPTION)?;

    Some(ExperienceEntry::new(
        &period,
        &duration,
        company,
        position,
        description,
    ))
}

fn parse_experience(root: ElementRef<'_>) -> Vec<ExperienceEntry> {
    let Some(section) = root.select(&EXPERIENCE).next() else {
        return vec![];
    };

    let items = section.select(&EXPERIENCE_ITEM).collect::<Vec<_>>();
    let entries = items
        .iter()
        .filter_map(|item| parse_experience_item(*item))
        .collect::<Vec<_>>();

    let skipped = items.len() - entries.len();
    if skipped > 0 {
        log::debug!("Skipped {skipped} incomplete experience entries");
    }
    entries
}

fn parse_skills(root: ElementRef<'_>) -> SkillList {
    root.select(&SKILLS)
        .next()
        .map(|section| section.select(&SKILL_TAG).map(element_text).collect())
        .unwrap_or_default()
}

/// Reads the resume fields out of a parsed page.
pub fn parse_resume(document: &Html) -> Resume {
    let root = document.root_element();

    Resume {
        name: first_text(root, &NAME).into(),
        gender_age: first_text(root, &GENDER_AGE).into(),
        location: first_text(root, &LOCATION).into(),
        desired_position: first_text(root, &DESIRED_POSITION).into(),
        status: first_text(root, &STATUS).into(),
        experience: parse_experience(root),
        skills: parse_skills(root),
    }
}

/// Converts a resume page into its normalized text form.
pub fn extract_resume(html: &str) -> NormalizedDocument {
    let document = Html::parse_document(html);
    let resume = parse_resume(&document);
    if !resume.name.is_found() {
        log::warn!("Resume has no candidate name");
    }
    resume.into()
}
