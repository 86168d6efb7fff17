//! Failure taxonomy for a model-runner invocation.
//!
//! Every failure is one of three kinds: the runner ran out of time, the
//! runner itself reported an error, or the process could not be launched
//! at all. Callers that want the classic user-facing strings render them
//! through [`AnalyzerError::legacy_message`].

use thiserror::Error;

/// Errors produced while invoking the external model runner.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The runner did not finish within the configured wall-clock bound.
    /// The child process has already been killed; partial output is
    /// discarded.
    #[error("analysis timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The runner ran and exited non-zero. `stderr` carries its diagnostic
    /// output verbatim.
    #[error("model runner failed (exit {code}): {stderr}")]
    Runner { code: i32, stderr: String },

    /// The runner process could not be prepared or awaited (missing
    /// executable, I/O fault). The `io::ErrorKind` is preserved, so a
    /// missing installation stays distinguishable from a missing model
    /// (the latter surfaces as [`AnalyzerError::Runner`]).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// Render this failure as the fixed user-facing string of the original
    /// string-returning contract.
    pub fn legacy_message(&self) -> String {
        match self {
            Self::Timeout { .. } => {
                "⚠️ Analysis timed out. Try simplifying your code.".to_string()
            }
            Self::Runner { stderr, .. } => format!("❌ LLM Error: {stderr}"),
            Self::Io(err) => format!("⚠️ Unexpected error: {err}"),
        }
    }

    /// Short machine-readable tag for this failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Runner { .. } => "runner_failure",
            Self::Io(_) => "unexpected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_legacy_message_is_fixed() {
        let err = AnalyzerError::Timeout { seconds: 120 };
        assert_eq!(
            err.legacy_message(),
            "⚠️ Analysis timed out. Try simplifying your code."
        );
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn runner_legacy_message_carries_stderr_verbatim() {
        let err = AnalyzerError::Runner {
            code: 1,
            stderr: "model not found".into(),
        };
        assert_eq!(err.legacy_message(), "❌ LLM Error: model not found");
        assert_eq!(err.kind(), "runner_failure");
    }

    #[test]
    fn io_legacy_message_embeds_description() {
        let err = AnalyzerError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such runner",
        ));
        let message = err.legacy_message();
        assert!(message.starts_with("⚠️ Unexpected error: "));
        assert!(message.contains("no such runner"));
        assert_eq!(err.kind(), "unexpected");
    }

    #[test]
    fn display_names_the_failure() {
        let err = AnalyzerError::Runner {
            code: 2,
            stderr: "out of memory".into(),
        };
        assert_eq!(
            err.to_string(),
            "model runner failed (exit 2): out of memory"
        );
    }
}
