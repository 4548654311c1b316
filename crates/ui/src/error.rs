//! Error types for the Plantventory UI
//!
//! Every fallible browser call returns one of these instead of panicking.
//! Errors are `Clone` so they can live inside signals and render through an
//! `ErrorBoundary`.

/// Errors that can occur in UI components
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No `window` (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// No `document` on the window
    #[error("document is not available")]
    DocumentNotAvailable,

    /// The request never produced a response
    #[error("request to {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("request to {url} returned status {status}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The response body did not match the expected shape
    #[error("could not decode response from {url}: {reason}")]
    DecodeFailed { url: String, reason: String },

    /// requestAnimationFrame or its cancellation failed
    #[error("animation frame error: {0}")]
    AnimationFrame(String),

    /// localStorage or document class manipulation failed
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Write an error to the browser console.
pub fn log_error(context: &str, error: &UiError) {
    web_sys::console::error_1(&format!("{context}: {error}").into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::UnexpectedStatus {
            url: "/api/session".to_string(),
            status: 502,
        };
        assert_eq!(error.to_string(), "request to /api/session returned status 502");

        let error = UiError::FetchFailed {
            url: "/api/config".to_string(),
            reason: "offline".to_string(),
        };
        assert_eq!(error.to_string(), "request to /api/config failed: offline");
    }

    #[test]
    fn test_error_clone() {
        let error = UiError::Storage("quota".to_string());
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
