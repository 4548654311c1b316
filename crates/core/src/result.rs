//! Result type definition and a small extension trait for logging failures
//! on their way through.

use crate::error::Error;

/// The standard Result type for Plantventory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logging combinators for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Operation failed: {}", e);
                None
            }
        }
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_option_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_result_into_option_err() {
        let result: Result<i32> = Err(Error::UnknownTheme("neon".to_string()));
        assert_eq!(result.into_option_logged(), None);
    }

    #[test]
    fn test_inspect_error_sees_error_and_keeps_it() {
        let mut seen = None;
        let result: Result<i32> = Err(Error::session_lookup_failed("down"));
        let result = result.inspect_error(|e| seen = Some(e.clone()));

        assert_eq!(seen, Some(Error::session_lookup_failed("down")));
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_error_skips_ok() {
        let mut called = false;
        let result: Result<i32> = Ok(1);
        let _ = result.inspect_error(|_| called = true);
        assert!(!called);
    }
}
