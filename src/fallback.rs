use crate::process::{Invocation, ProcessRunner};
use crate::ui;

/// Result of running an external tool with at most one fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    Succeeded,
    FailedWithFallback,
    FailedTerminally,
}

impl ToolOutcome {
    /// Classifies one attempt given whether another alias remains to try.
    pub fn after_attempt(succeeded: bool, fallback_left: bool) -> Self {
        match (succeeded, fallback_left) {
            (true, _) => ToolOutcome::Succeeded,
            (false, true) => ToolOutcome::FailedWithFallback,
            (false, false) => ToolOutcome::FailedTerminally,
        }
    }

    pub fn is_success(self) -> bool {
        self == ToolOutcome::Succeeded
    }
}

/// User-facing messages for a fallback-aware step.
pub struct Step<'a> {
    pub progress: &'a str,
    pub success: Option<&'a str>,
    pub warning: &'a str,
}

/// Runs `primary`, then `fallback` if it fails.
///
/// A terminal failure is reported as a warning, never as an error.
pub fn attempt_with_fallback(
    runner: &dyn ProcessRunner,
    primary: &Invocation,
    fallback: &Invocation,
    step: &Step<'_>,
) -> ToolOutcome {
    let spinner = ui::spinner(step.progress);
    let attempts = [primary, fallback];
    let mut outcome = ToolOutcome::FailedTerminally;

    for (idx, invocation) in attempts.iter().enumerate() {
        let fallback_left = idx + 1 < attempts.len();
        let result = runner.run(invocation);
        if let Err(err) = &result {
            tracing::debug!(command = %invocation.display(), error = %err, "attempt failed");
        }
        outcome = ToolOutcome::after_attempt(result.is_ok(), fallback_left);
        if outcome != ToolOutcome::FailedWithFallback {
            break;
        }
        tracing::debug!(fallback = %fallback.display(), "retrying with fallback");
    }

    match outcome {
        ToolOutcome::Succeeded => match step.success {
            Some(message) => ui::spinner_success(&spinner, message),
            None => spinner.finish_and_clear(),
        },
        _ => ui::spinner_warn(&spinner, step.warning),
    }
    outcome
}
