use std::process::ExitCode;

use crate::audit::AuditOutcome;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, no discrepancies found
/// - `Error` (1): Missing or malformed input, or any other failure
/// - `Missing` (2): Keys missing in a language, or used ids missing from the table
/// - `Unused` (3): Only unused translation keys were found
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
    Missing,
    Unused,
}

impl From<AuditOutcome> for ExitStatus {
    fn from(outcome: AuditOutcome) -> Self {
        match outcome {
            AuditOutcome::Clean => ExitStatus::Success,
            AuditOutcome::Missing => ExitStatus::Missing,
            AuditOutcome::Unused => ExitStatus::Unused,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
            ExitStatus::Missing => ExitCode::from(2),
            ExitStatus::Unused => ExitCode::from(3),
        }
    }
}
