//! Explain code errors with a locally-running language model.
//!
//! `errlens` renders a fixed analysis prompt from a language name, an error
//! message, and the offending source, then shells out to a local model
//! runner (the `ollama` CLI by default) and hands back the model's reply.
//! The flow is strictly linear: build prompt → invoke runner → map the
//! outcome.
//!
//! Two call surfaces:
//! - [`ErrorAnalyzer::analyze`] — typed: the model's text or an
//!   [`AnalyzerError`] naming the failure kind.
//! - [`ErrorAnalyzer::analyze_to_text`] — total: every outcome collapsed
//!   into one displayable string, safe to call without surrounding error
//!   handling.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod prompt;
pub mod runner;

pub use analyzer::{AnalysisRequest, ErrorAnalyzer};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
