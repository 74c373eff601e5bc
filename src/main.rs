use std::fmt::Display;
use std::path::PathBuf;

use clap::Parser;

use cv_scoring::crawlers::HttpFetcher;
use cv_scoring::models::config::{ApiKey, AppConfig};
use cv_scoring::processing::evaluate_urls;
use cv_scoring::report::{render_json, render_text};
use cv_scoring::scoring::ScoreParser;
use cv_scoring::scoring::openai::OpenAiClient;

/// Scores how well a resume fits a job posting.
#[derive(Debug, Parser)]
#[command(name = "cv-scoring", version)]
struct Cli {
    /// Link to the job posting page.
    job_url: String,

    /// Link to the candidate's resume page.
    resume_url: String,

    /// Optional YAML configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,

    /// Include both normalized documents in the text report.
    #[arg(long)]
    show_documents: bool,
}

fn exit_with(context: &str, error: impl Display) -> ! {
    log::error!("{context}: {error}");
    eprintln!("{context}: {error}");
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let api_key = match ApiKey::from_env() {
        Ok(key) => key,
        Err(e) => exit_with("Configuration error", e),
    };
    let config = match AppConfig::load(Some(cli.config.as_path())) {
        Ok(config) => config,
        Err(e) => exit_with("Configuration error", e),
    };

    let fetcher = match HttpFetcher::new(&config.fetch.user_agent, config.fetch.timeout()) {
        Ok(fetcher) => fetcher,
        Err(e) => exit_with("Failed to create page fetcher", e),
    };
    let service = match OpenAiClient::new(api_key, &config.service) {
        Ok(service) => service,
        Err(e) => exit_with("Failed to create evaluation client", e),
    };
    let parser = ScoreParser::default();

    let evaluation =
        match evaluate_urls(&cli.job_url, &cli.resume_url, &fetcher, &service, &parser).await {
            Ok(evaluation) => evaluation,
            Err(e) => exit_with("Evaluation failed", e),
        };

    if cli.json {
        match render_json(&evaluation) {
            Ok(json) => println!("{json}"),
            Err(e) => exit_with("Failed to serialize report", e),
        }
    } else {
        print!("{}", render_text(&evaluation, cli.show_documents));
    }
}
