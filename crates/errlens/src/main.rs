use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use errlens::{AnalysisRequest, AnalyzerConfig, ErrorAnalyzer};

/// Explain a code error with a locally-running language model.
#[derive(Debug, Parser)]
#[command(name = "errlens", version, about)]
struct Cli {
    /// Language of the offending source (e.g. "python", "rust").
    #[arg(short, long)]
    language: String,

    /// Error text to analyze.
    #[arg(long, conflicts_with = "error_file")]
    error: Option<String>,

    /// Read the error text from a file instead.
    #[arg(long)]
    error_file: Option<PathBuf>,

    /// Source file to analyze; "-" or omitted reads from stdin.
    code_file: Option<PathBuf>,

    /// Model identifier handed to the runner.
    #[arg(short, long)]
    model: Option<String>,

    /// Model runner executable.
    #[arg(long)]
    runner: Option<String>,

    /// Wall-clock bound for the runner, in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Emit a machine-readable JSON envelope instead of plain text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AnalyzerConfig::default();
    if let Some(runner) = cli.runner {
        config.runner_program = runner;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }

    let error_text = match (cli.error, &cli.error_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read error text from {}", path.display()))?,
        (None, None) => anyhow::bail!("one of --error or --error-file is required"),
    };

    let code = read_code(cli.code_file.as_deref())?;

    let mut request = AnalysisRequest::new(cli.language, error_text, code);
    if let Some(model) = cli.model {
        request = request.with_model(model);
    }

    let model = request
        .model
        .clone()
        .unwrap_or_else(|| config.default_model.clone());
    info!(model = %model, runner = %config.runner_program, "errlens starting");

    let analyzer = ErrorAnalyzer::new(config);

    if cli.json {
        let started = Instant::now();
        let outcome = analyzer.analyze(&request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let envelope = match &outcome {
            Ok(analysis) => serde_json::json!({
                "outcome": "success",
                "language": request.language,
                "model": model,
                "elapsed_ms": elapsed_ms,
                "analysis": analysis,
            }),
            Err(err) => serde_json::json!({
                "outcome": err.kind(),
                "language": request.language,
                "model": model,
                "elapsed_ms": elapsed_ms,
                "detail": err.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("{}", analyzer.analyze_to_text(&request).await);
    }

    Ok(())
}

/// Read the source under analysis from `path`, or stdin when omitted or
/// given as "-".
fn read_code(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read source from {}", p.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read source from stdin")?;
            Ok(buffer)
        }
    }
}
