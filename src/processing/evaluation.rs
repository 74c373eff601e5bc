use crate::crawlers::PageFetcher;
use crate::domain::document::{DocumentKind, RawDocument};
use crate::extractors::extract;
use crate::processing::{Evaluation, ProcessingError, ProcessingResult};
use crate::scoring::prompts::{SYSTEM_PROMPT, build_user_prompt};
use crate::scoring::{EvaluationService, ScoreParser};

/// Extracts both pages, asks the service for a verdict and parses the score.
pub async fn evaluate_documents<S>(
    job_posting: &RawDocument,
    resume: &RawDocument,
    service: &S,
    parser: &ScoreParser,
) -> ProcessingResult<Evaluation>
where
    S: EvaluationService + ?Sized,
{
    let job_posting = extract(job_posting);
    let resume = extract(resume);

    let user_prompt = build_user_prompt(&job_posting, &resume);
    log::debug!("User prompt is {} bytes", user_prompt.len());

    let response = service.evaluate(SYSTEM_PROMPT, &user_prompt).await?;
    let score = parser.parse(&response);
    log::info!("Candidate scored {score}/{}", crate::MAX_SCORE);

    Ok(Evaluation {
        job_posting,
        resume,
        response,
        score,
    })
}

/// Runs the whole pipeline for a job posting URL and a resume URL.
///
/// Steps run strictly in sequence. The first fetch or service failure ends
/// the run; nothing is retried.
pub async fn evaluate_urls<F, S>(
    job_url: &str,
    resume_url: &str,
    fetcher: &F,
    service: &S,
    parser: &ScoreParser,
) -> ProcessingResult<Evaluation>
where
    F: PageFetcher + ?Sized,
    S: EvaluationService + ?Sized,
{
    log::info!("Received evaluation: job={job_url} resume={resume_url}");

    let job_posting = fetch(fetcher, job_url, DocumentKind::JobPosting).await?;
    let resume = fetch(fetcher, resume_url, DocumentKind::Resume).await?;

    let evaluation = evaluate_documents(&job_posting, &resume, service, parser).await?;

    log::info!("Finished processing evaluation: {resume_url}");
    Ok(evaluation)
}

async fn fetch<F>(fetcher: &F, url: &str, kind: DocumentKind) -> ProcessingResult<RawDocument>
where
    F: PageFetcher + ?Sized,
{
    fetcher
        .fetch_document(url, kind)
        .await
        .map_err(|source| ProcessingError::Fetch { kind, source })
}
