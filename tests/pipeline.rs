mod common;

use common::{JOB_URL, RESUME_URL, StubFetcher, StubService, posting_html, resume_html};
use cv_scoring::domain::document::{DocumentKind, RawDocument};
use cv_scoring::processing::{ProcessingError, evaluate_documents, evaluate_urls};
use cv_scoring::scoring::ScoreParser;
use cv_scoring::scoring::prompts::SYSTEM_PROMPT;

fn fetcher() -> StubFetcher {
    StubFetcher::default()
        .with_page(JOB_URL, posting_html())
        .with_page(RESUME_URL, resume_html())
}

#[tokio::test]
async fn scores_candidate_end_to_end() {
    let fetcher = fetcher();
    let service = StubService::answering("Analysis ... Оценка 8");

    let evaluation = evaluate_urls(
        JOB_URL,
        RESUME_URL,
        &fetcher,
        &service,
        &ScoreParser::default(),
    )
    .await
    .unwrap();

    assert_eq!(evaluation.score.get(), 8);
    assert_eq!(evaluation.response, "Analysis ... Оценка 8");
    assert!(!evaluation.job_posting.render().is_empty());
    assert!(!evaluation.resume.render().is_empty());
    assert_eq!(
        *fetcher.requested.lock().unwrap(),
        vec![JOB_URL.to_string(), RESUME_URL.to_string()]
    );

    let prompts = service.prompts.lock().unwrap();
    let (system, user) = &prompts[0];
    assert_eq!(system, SYSTEM_PROMPT);
    assert!(user.starts_with("# JOB POSTING\n# Backend Engineer\n"));
    assert!(user.contains("**Company:** Acme"));
    assert!(user.contains("**Salary:** $100k"));
    assert!(user.contains("## Description\n\nBuild APIs"));
    assert!(user.contains("\n\n# RESUME\n# Jane Doe\n"));
    assert!(user.contains("**Jan 2020 – Mar 2022 (2 yrs 2 mo)**"));
    assert!(user.ends_with("## Key Skills\n\nGo, SQL"));
}

#[tokio::test]
async fn missing_score_defaults_to_neutral() {
    let evaluation = evaluate_urls(
        JOB_URL,
        RESUME_URL,
        &fetcher(),
        &StubService::answering("no score mentioned"),
        &ScoreParser::default(),
    )
    .await
    .unwrap();

    assert_eq!(evaluation.score.get(), 5);
}

#[tokio::test]
async fn failed_job_fetch_stops_before_resume_and_service() {
    let fetcher = StubFetcher::default().with_page(RESUME_URL, resume_html());
    let service = StubService::answering("оценка 9");

    let err = evaluate_urls(
        JOB_URL,
        RESUME_URL,
        &fetcher,
        &service,
        &ScoreParser::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ProcessingError::Fetch {
            kind: DocumentKind::JobPosting,
            ..
        }
    ));
    assert_eq!(fetcher.requested.lock().unwrap().len(), 1);
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn failed_resume_fetch_is_reported_as_resume() {
    let fetcher = StubFetcher::default().with_page(JOB_URL, posting_html());
    let service = StubService::answering("оценка 9");

    let err = evaluate_urls(
        JOB_URL,
        RESUME_URL,
        &fetcher,
        &service,
        &ScoreParser::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ProcessingError::Fetch {
            kind: DocumentKind::Resume,
            ..
        }
    ));
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn service_failure_is_fatal_and_not_retried() {
    let service = StubService::failing();

    let err = evaluate_urls(
        JOB_URL,
        RESUME_URL,
        &fetcher(),
        &service,
        &ScoreParser::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ProcessingError::Scoring(_)));
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn blank_pages_still_produce_full_documents() {
    let job = RawDocument::new(DocumentKind::JobPosting, "");
    let resume = RawDocument::new(DocumentKind::Resume, "<html></html>");
    let service = StubService::answering("Итоговая оценка 3");

    let evaluation = evaluate_documents(&job, &resume, &service, &ScoreParser::default())
        .await
        .unwrap();

    assert_eq!(evaluation.score.get(), 3);
    assert_eq!(evaluation.job_posting.sections().len(), 5);
    assert_eq!(evaluation.resume.sections().len(), 9);
    assert!(evaluation.resume.render().contains("No experience found"));
    assert!(evaluation.resume.render().ends_with("Skills not specified"));
}
