//! Failure policies and step outcomes.

use std::fmt;

use crate::error::{Result, SetupError};

use super::StepReport;

/// What a step failure means for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The failure stops the run and the process exits non-zero.
    Fatal,
    /// The failure is reported as a warning and the run continues.
    Advisory,
}

impl FailurePolicy {
    /// Tag a step result according to this policy.
    pub fn classify(self, result: Result<StepReport>) -> StepStatus {
        match (result, self) {
            (Ok(report), _) => StepStatus::Success(report),
            (Err(error), FailurePolicy::Advisory) => StepStatus::Advisory(error),
            (Err(error), FailurePolicy::Fatal) => StepStatus::Fatal(error),
        }
    }

    /// Lowercase label used in plans.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fatal => "required",
            Self::Advisory => "best-effort",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tagged outcome of one step.
#[derive(Debug)]
pub enum StepStatus {
    /// The step completed.
    Success(StepReport),
    /// The step failed under an advisory policy; the run continues.
    Advisory(SetupError),
    /// The step failed under a fatal policy; the run stops.
    Fatal(SetupError),
    /// The step was left out on request.
    Skipped,
    /// The step was never reached because an earlier step was fatal.
    NotRun,
}

impl StepStatus {
    /// Whether this outcome stops the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    /// Whether the step actually executed.
    pub fn ran(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Advisory(_) | Self::Fatal(_))
    }

    /// The step's error, if it failed.
    pub fn error(&self) -> Option<&SetupError> {
        match self {
            Self::Advisory(e) | Self::Fatal(e) => Some(e),
            _ => None,
        }
    }
}
