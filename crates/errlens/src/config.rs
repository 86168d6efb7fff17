//! Analyzer configuration, resolved from environment overrides with fixed
//! defaults.

use std::time::Duration;

/// Default model runner executable.
const DEFAULT_RUNNER: &str = "ollama";

/// Default model identifier handed to the runner.
const DEFAULT_MODEL: &str = "phi";

/// Default wall-clock bound for a single analysis.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration for the analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Executable name or path of the model runner CLI.
    pub runner_program: String,
    /// Model loaded when a request does not name one.
    pub default_model: String,
    /// Upper bound on a single runner invocation.
    pub timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            runner_program: std::env::var("ERRLENS_RUNNER")
                .unwrap_or_else(|_| DEFAULT_RUNNER.into()),
            default_model: std::env::var("ERRLENS_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.into()),
            timeout: Duration::from_secs(timeout_secs_from(
                std::env::var("ERRLENS_TIMEOUT_SECS").ok(),
            )),
        }
    }
}

/// Parse a timeout override in whole seconds. Absent, unparseable, or zero
/// values fall back to the default.
fn timeout_secs_from(raw: Option<String>) -> u64 {
    raw.and_then(|value| value.trim().parse().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.runner_program, "ollama");
        assert_eq!(config.default_model, "phi");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn timeout_override_parses_whole_seconds() {
        assert_eq!(timeout_secs_from(Some("30".into())), 30);
        assert_eq!(timeout_secs_from(Some(" 45 ".into())), 45);
    }

    #[test]
    fn timeout_override_is_total() {
        assert_eq!(timeout_secs_from(None), 120);
        assert_eq!(timeout_secs_from(Some("".into())), 120);
        assert_eq!(timeout_secs_from(Some("soon".into())), 120);
        assert_eq!(timeout_secs_from(Some("0".into())), 120);
        assert_eq!(timeout_secs_from(Some("-5".into())), 120);
    }
}
