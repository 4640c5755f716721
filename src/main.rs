//! CLI entry point for the feedback rater.
//!
//! Provides subcommands for running the full load/score/aggregate/summarize
//! pipeline over a feedback CSV and for scoring a single ad-hoc feedback
//! text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use feedback_rater::analyzers::aggregate::aggregate_by_provider;
use feedback_rater::analyzers::summary::summarize_providers;
use feedback_rater::infra::openai::{CompletionConfig, OpenAiClient};
use feedback_rater::loader::load_records;
use feedback_rater::output::{write_scored_records, write_summaries};
use feedback_rater::record::{FeedbackRecord, UNKNOWN};
use feedback_rater::scorer::{AspectScorer, GenerativeScorer, LexicalScorer, score_records};

#[derive(Parser)]
#[command(name = "feedback_rater")]
#[command(about = "A tool to rate service providers from customer feedback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Engine {
    /// Local keyword gating and polarity lexicon
    Lexical,
    /// External completion service
    Generative,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline over a feedback CSV
    Analyze {
        /// Path to the input CSV
        #[arg(value_name = "FILE")]
        input: String,

        /// Scoring engine to use
        #[arg(short, long, value_enum, default_value_t = Engine::Lexical)]
        engine: Engine,

        /// CSV file for the per-record score table
        #[arg(long, default_value = "scored.csv")]
        scored_output: String,

        /// CSV file for the per-provider summary table
        #[arg(long, default_value = "summaries.csv")]
        summary_output: String,

        /// Completion model (generative engine only)
        #[arg(long)]
        model: Option<String>,

        /// Completion endpoint base URL (generative engine only)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Score a single feedback text and log the analysis
    Score {
        /// The feedback text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Scoring engine to use
        #[arg(short, long, value_enum, default_value_t = Engine::Lexical)]
        engine: Engine,

        /// Completion model (generative engine only)
        #[arg(long)]
        model: Option<String>,

        /// Completion endpoint base URL (generative engine only)
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/feedback_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("feedback_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            engine,
            scored_output,
            summary_output,
            model,
            base_url,
        } => match engine {
            Engine::Lexical => {
                run_pipeline(&LexicalScorer::new(), &input, &scored_output, &summary_output)
                    .await?
            }
            Engine::Generative => {
                let scorer = GenerativeScorer::new(completion_client(model, base_url)?);
                run_pipeline(&scorer, &input, &scored_output, &summary_output).await?
            }
        },
        Commands::Score {
            text,
            engine,
            model,
            base_url,
        } => {
            let record = ad_hoc_record(text);
            match engine {
                Engine::Lexical => score_one(&LexicalScorer::new(), record).await?,
                Engine::Generative => {
                    let scorer = GenerativeScorer::new(completion_client(model, base_url)?);
                    score_one(&scorer, record).await?
                }
            }
        }
    }

    Ok(())
}

/// Builds the completion client from the environment credential plus any
/// CLI overrides.
fn completion_client(model: Option<String>, base_url: Option<String>) -> Result<OpenAiClient> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY must be set for the generative engine")?;

    let mut config = CompletionConfig::new(api_key);
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }

    Ok(OpenAiClient::new(config)?)
}

fn ad_hoc_record(text: String) -> FeedbackRecord {
    FeedbackRecord {
        reviewer_name: "User 1".to_string(),
        provider_name: UNKNOWN.to_string(),
        location: None,
        feedback_text: text,
        rating: 0.0,
    }
}

/// Runs the load, score, aggregate, and summarize stages strictly in
/// sequence and writes both result tables.
#[tracing::instrument(skip(scorer))]
async fn run_pipeline<S: AspectScorer>(
    scorer: &S,
    input: &str,
    scored_output: &str,
    summary_output: &str,
) -> Result<()> {
    let records = load_records(input)?;
    info!(record_count = records.len(), "Dataset loaded");

    let scored = score_records(scorer, &records).await?;
    write_scored_records(scored_output, &scored)?;

    let aggregates = aggregate_by_provider(&scored);
    info!(
        provider_count = aggregates.len(),
        "Records aggregated by provider"
    );

    let summaries = summarize_providers(scorer, &aggregates, &scored).await?;
    write_summaries(summary_output, &summaries)?;

    for summary in &summaries {
        info!(
            provider = %summary.provider_name,
            locations = %summary.locations,
            average_rating = %format!("{:.2}", summary.average_rating),
            "{}",
            summary.summary
        );
    }

    info!(scored_output, summary_output, "Pipeline complete");
    Ok(())
}

async fn score_one<S: AspectScorer>(scorer: &S, record: FeedbackRecord) -> Result<()> {
    let scored = score_records(scorer, &[record]).await?;
    if let Some(entry) = scored.first() {
        info!("{}", entry.analysis_text());
    }
    Ok(())
}
