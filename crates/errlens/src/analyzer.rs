//! The analysis operation: render the prompt, invoke the runner, map the
//! outcome.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::prompt;
use crate::runner::ModelRunner;

/// A single analysis request. Built per call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Language of the offending source (e.g. "python", "rust").
    pub language: String,
    /// The error/exception output to explain.
    pub error: String,
    /// The offending source code.
    pub code: String,
    /// Model to load; `None` uses the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl AnalysisRequest {
    pub fn new(
        language: impl Into<String>,
        error: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            error: error.into(),
            code: code.into(),
            model: None,
        }
    }

    /// Select a specific model instead of the configured default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Formats the analysis prompt and delegates to the model runner.
///
/// Every call is independent: one child process, no caching, no retries.
pub struct ErrorAnalyzer {
    config: AnalyzerConfig,
    runner: ModelRunner,
}

impl ErrorAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let runner = ModelRunner::new(&config.runner_program, config.timeout);
        Self { config, runner }
    }

    /// Build an analyzer from environment overrides and defaults.
    pub fn from_env() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    /// Model that will serve `request`.
    pub fn model_for<'a>(&'a self, request: &'a AnalysisRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }

    /// Analyze a code error, returning the model's raw response.
    ///
    /// The response text is passed through unmodified; failures carry their
    /// kind and diagnostics. See [`Self::analyze_to_text`] for the
    /// string-collapsing variant.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalyzerError> {
        let model = self.model_for(request);
        let rendered = prompt::build_prompt(&request.language, &request.code, &request.error);

        info!(
            model,
            language = %request.language,
            prompt_bytes = rendered.len(),
            "running error analysis"
        );
        let started = std::time::Instant::now();

        match self.runner.invoke(model, &rendered).await {
            Ok(response) => {
                info!(
                    model,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    response_bytes = response.len(),
                    "analysis complete"
                );
                Ok(response)
            }
            Err(err) => {
                warn!(model, kind = err.kind(), "analysis failed: {err}");
                Err(err)
            }
        }
    }

    /// Analyze a code error, collapsing every outcome into a single
    /// displayable string.
    ///
    /// Successful responses come back unmodified; failures render as the
    /// classic fixed messages. This path never returns an error, so
    /// user-facing tools can call it without surrounding handling.
    pub async fn analyze_to_text(&self, request: &AnalysisRequest) -> String {
        match self.analyze(request).await {
            Ok(response) => response,
            Err(err) => err.legacy_message(),
        }
    }
}
