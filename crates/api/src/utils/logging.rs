use std::time::Duration;

use ficbridge_core::DispatchError;
use ficbridge_domain::BridgeError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"batch::run"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - Stable error label when the command failed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Errors that can be reduced to a stable label for logging.
pub trait ErrorLabel {
    fn error_label(&self) -> &'static str;
}

impl ErrorLabel for BridgeError {
    fn error_label(&self) -> &'static str {
        self.label()
    }
}

impl ErrorLabel for DispatchError {
    fn error_label(&self) -> &'static str {
        match self {
            Self::Rejected(error) => error.label(),
            Self::Aborted { .. } => "batch_aborted",
        }
    }
}

#[cfg(test)]
mod tests {
    use ficbridge_domain::BridgeError;

    use super::*;

    #[test]
    fn labels_follow_the_error_kind() {
        let rejected = DispatchError::Rejected(BridgeError::MissingToken("gone".into()));
        let aborted = DispatchError::Aborted {
            index: 3,
            error: BridgeError::Validation("bad".into()),
            completed: Vec::new(),
        };

        assert_eq!(rejected.error_label(), "missing_token");
        assert_eq!(aborted.error_label(), "batch_aborted");
        assert_eq!(BridgeError::Network("down".into()).error_label(), "network");
    }
}
