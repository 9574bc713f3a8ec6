//! Error types for the deferqueue crate.
//!
//! Draining a queue never fails: every callback failure is caught at the
//! invocation site, logged, and absorbed into an [`Outcome`] record. The
//! only error type here is the default carried by failed callbacks.
//!
//! [`Outcome`]: crate::outcome::Outcome

use thiserror::Error;

/// Default error type for deferred callbacks.
///
/// Callbacks may use any error type; this is the convenient default for
/// `DeferQueue<T>` when the caller has no richer taxonomy of its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeferError {
    /// A deferred callback reported a failure.
    #[error("deferred callback failed: {0}")]
    Callback(String),
}

impl DeferError {
    /// Creates a callback failure from any message.
    #[must_use]
    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback(message.into())
    }
}

impl From<&str> for DeferError {
    fn from(message: &str) -> Self {
        Self::Callback(message.to_string())
    }
}

impl From<String> for DeferError {
    fn from(message: String) -> Self {
        Self::Callback(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_error_display() {
        let error = DeferError::callback("boom");
        assert_eq!(error.to_string(), "deferred callback failed: boom");
    }

    #[test]
    fn test_from_str() {
        let error: DeferError = "boom".into();
        assert_eq!(error, DeferError::Callback("boom".to_string()));
    }
}
