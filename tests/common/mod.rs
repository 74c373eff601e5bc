//! Helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cv_scoring::crawlers::{CrawlerError, CrawlerResult, PageFetcher};
use cv_scoring::scoring::{EvaluationService, ScoringError, ScoringResult};

pub const JOB_URL: &str = "https://jobs.example.com/vacancy/1";
pub const RESUME_URL: &str = "https://jobs.example.com/resume/1";

pub fn posting_html() -> String {
    r#"<html><body>
         <h1>Backend Engineer</h1>
         <span data-qa="vacancy-salary">$100k</span>
         <a data-qa="vacancy-company-name">Acme</a>
         <div data-qa="vacancy-description"><p>Build APIs</p></div>
       </body></html>"#
        .to_string()
}

pub fn resume_html() -> String {
    r#"<html><body>
         <h2 data-qa="bloko-header-1">Jane Doe</h2>
         <p>Female, 30 years</p>
         <div data-qa="resume-block-experience">
           <div class="resume-block-item-gap">
             <div class="bloko-column_s-2">Jan 2020 – Mar 20222 yrs 2 mo</div>
             <div class="bloko-text">2 yrs 2 mo</div>
             <div class="bloko-text_strong">Acme</div>
             <div data-qa="resume-block-experience-position">Backend Developer</div>
             <div data-qa="resume-block-experience-description">Built billing services</div>
           </div>
         </div>
         <div data-qa="skills-table">
           <span data-qa="bloko-tag__text">Go</span>
           <span data-qa="bloko-tag__text">SQL</span>
         </div>
       </body></html>"#
        .to_string()
}

/// Serves pages from memory; unknown URLs fail like a missing page.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> CrawlerResult<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or(CrawlerError::Status {
            url: url.to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        })
    }
}

/// Returns a canned answer and records the prompts it was given.
pub struct StubService {
    answer: Option<String>,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl StubService {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl EvaluationService for StubService {
    async fn evaluate(&self, system_prompt: &str, user_prompt: &str) -> ScoringResult<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        self.answer.clone().ok_or(ScoringError::Api {
            status: 500,
            message: "stub failure".to_string(),
        })
    }
}
