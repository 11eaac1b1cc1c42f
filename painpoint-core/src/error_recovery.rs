//! Error recovery strategies for different types of errors.
//!
//! Analysis never fails on data content. The only recoverable failures are
//! missing language resources, which are replaced by a minimal fallback.

use crate::{CoreError, ErrorExt, ErrorReporter};
use tracing::debug;

/// Recovery strategy for handling errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// Substitute a fallback value and keep going
    Fallback,
    /// Skip the operation and continue
    Skip,
    /// Fail immediately
    Fail,
}

/// Result of an error recovery attempt
#[derive(Debug)]
pub enum RecoveryResult<T> {
    /// The operation succeeded, no recovery needed
    Recovered(T),
    /// The operation failed and a fallback value was substituted
    Degraded(T),
    /// The operation failed and should be skipped
    Skipped,
    /// Recovery failed, error should be propagated
    Failed(CoreError),
}

impl<T> RecoveryResult<T> {
    /// Returns true if the operation succeeded without a fallback
    pub fn is_recovered(&self) -> bool {
        matches!(self, RecoveryResult::Recovered(_))
    }

    /// Returns true if a fallback value was substituted
    pub fn is_degraded(&self) -> bool {
        matches!(self, RecoveryResult::Degraded(_))
    }

    /// Returns true if the operation should be skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, RecoveryResult::Skipped)
    }

    /// Returns true if the operation failed and error should be propagated
    pub fn is_failed(&self) -> bool {
        matches!(self, RecoveryResult::Failed(_))
    }

    /// Returns the value if recovered or degraded
    pub fn value(self) -> Option<T> {
        match self {
            RecoveryResult::Recovered(value) | RecoveryResult::Degraded(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into a `Result`, treating a skip as an internal error
    pub fn into_result(self) -> Result<T, CoreError> {
        match self {
            RecoveryResult::Recovered(value) | RecoveryResult::Degraded(value) => Ok(value),
            RecoveryResult::Skipped => Err(CoreError::Internal {
                message: "operation skipped during recovery".to_string(),
            }),
            RecoveryResult::Failed(error) => Err(error),
        }
    }

    /// Returns the error if failed, None otherwise
    pub fn err(self) -> Option<CoreError> {
        match self {
            RecoveryResult::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Error recovery handler that provides strategies for different error types
pub struct ErrorRecovery;

impl ErrorRecovery {
    /// Determine the appropriate recovery strategy for a given error
    pub fn determine_strategy(error: &CoreError) -> RecoveryStrategy {
        match error {
            // Missing tokenizer or stopwords - continue with the minimal fallback
            CoreError::Resource(_) => RecoveryStrategy::Fallback,

            // Configuration errors - fail immediately as they need user intervention
            CoreError::Config(_) => RecoveryStrategy::Fail,

            // Invalid input - skip as it's likely a permanent error
            CoreError::InvalidInput { .. } => RecoveryStrategy::Skip,

            CoreError::Io(_) | CoreError::Serialization(_) | CoreError::Internal { .. } => {
                RecoveryStrategy::Fail
            }
        }
    }

    /// Resolve a fallible operation, substituting `fallback` when the
    /// error's strategy allows it. Degradations are reported as warnings.
    pub fn recover<T, E, F>(result: Result<T, E>, fallback: F) -> RecoveryResult<T>
    where
        E: Into<CoreError>,
        F: FnOnce() -> T,
    {
        let error = match result {
            Ok(value) => return RecoveryResult::Recovered(value),
            Err(error) => error.into(),
        };

        match Self::determine_strategy(&error) {
            RecoveryStrategy::Fallback => {
                ErrorReporter::new().report_warning(&error);
                RecoveryResult::Degraded(fallback())
            }
            RecoveryStrategy::Skip => {
                debug!("Skipping after error [{}]: {}", error.error_code(), error);
                RecoveryResult::Skipped
            }
            RecoveryStrategy::Fail => RecoveryResult::Failed(error),
        }
    }
}
