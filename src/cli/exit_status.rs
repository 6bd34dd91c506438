use std::process::ExitCode;

use crate::validate::Outcome;

/// Exit status for a validation run.
///
/// - `Success` (0): all methods are dispatched and available
/// - `Failure` (1): a cross-reference check failed, or the invocation was invalid
/// - `Error` (2): a source or config file could not be read or parsed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All checks passed.
    Success,
    /// A check failed or the usage was invalid.
    Failure,
    /// Run aborted on an I/O or configuration error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl From<&Outcome> for ExitStatus {
    fn from(outcome: &Outcome) -> Self {
        if outcome.is_valid() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}
