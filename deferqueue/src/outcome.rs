//! Per-callback outcome records.

/// The recorded result of one deferred-callback invocation.
///
/// Exactly one outcome is produced per callback execution when the queue is
/// configured to report outcomes. A drain returns outcomes in the order the
/// individual invocations settled: deterministic within the sync unit (its
/// removal policy), unordered between the two units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The callback completed and returned a value.
    Success(T),
    /// The callback failed with an error value.
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns true if the callback succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if the callback failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the success value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Returns the error value, if any.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Converts the outcome back into a plain `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome: Outcome<u32, String> = Outcome::Success(7);
        assert!(outcome.is_success());
        assert!(!outcome.is_failed());
        assert_eq!(outcome.success(), Some(&7));
        assert_eq!(outcome.failure(), None);
    }

    #[test]
    fn test_failed_accessors() {
        let outcome: Outcome<u32, String> = Outcome::Failed("boom".to_string());
        assert!(outcome.is_failed());
        assert_eq!(outcome.failure(), Some(&"boom".to_string()));
    }

    #[test]
    fn test_from_result() {
        let ok: Outcome<u32, String> = Ok(1).into();
        let err: Outcome<u32, String> = Err("no".to_string()).into();
        assert_eq!(ok.into_result(), Ok(1));
        assert_eq!(err.into_result(), Err("no".to_string()));
    }
}
