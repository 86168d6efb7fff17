//! Subprocess invocation of the external model runner.
//!
//! One child process per call: `{program} run {model} {prompt}` with
//! captured stdout/stderr, raced against a wall-clock bound. On expiry the
//! child is killed and its output discarded.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::AnalyzerError;

/// Handle for invoking the model runner CLI.
#[derive(Debug, Clone)]
pub struct ModelRunner {
    program: String,
    timeout: Duration,
}

impl ModelRunner {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Run `model` against `prompt`, returning the runner's stdout
    /// unmodified.
    ///
    /// Cancellation is the timeout only: the future returned by
    /// `wait_with_output` owns the child, so dropping it on the timer
    /// branch kills the process (`kill_on_drop`) and the handle never
    /// outlives the call.
    pub async fn invoke(&self, model: &str, prompt: &str) -> Result<String, AnalyzerError> {
        let mut command = Command::new(&self.program);
        command
            .arg("run")
            .arg(model)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(program = %self.program, model, "spawning model runner");
        let child = command.spawn()?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                let seconds = self.timeout.as_secs();
                warn!(model, seconds, "model runner timed out; child killed");
                return Err(AnalyzerError::Timeout { seconds });
            }
        };

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(model, code, "model runner reported failure");
            Err(AnalyzerError::Runner { code, stderr })
        }
    }
}
