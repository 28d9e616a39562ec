//! Error types for geometry calculations.
//!
//! The geometric operations in this crate have exactly one failure mode:
//! asking for the direction of a vector that has none. Everything else
//! (cross products, matrix algebra, point transforms) is total arithmetic
//! and never fails.
//!
//! Most fallible functions return [`GeomResult<T>`], which is
//! `Result<T, GeomError>`. Errors are never caught or retried inside the
//! crate; they propagate to the caller with `?`.

use thiserror::Error;

/// Convenience alias for `Result<T, GeomError>`.
pub type GeomResult<T> = Result<T, GeomError>;

/// Error type for geometry calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A vector with zero magnitude was used where a direction is required.
    ///
    /// Raised only for a magnitude of exactly `0.0`. Near-zero vectors pass
    /// and normalize to very large component ratios; callers that need a
    /// tolerance band must apply their own check first.
    #[error("Degenerate vector in {operation}: {message}")]
    DegenerateVector { operation: String, message: String },
}

impl GeomError {
    /// Creates a [`DegenerateVector`](Self::DegenerateVector) error.
    pub fn degenerate_vector(operation: &str, message: &str) -> Self {
        Self::DegenerateVector {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_vector_display() {
        let err = GeomError::degenerate_vector("Vector3::normalize", "magnitude is zero");
        assert_eq!(
            err.to_string(),
            "Degenerate vector in Vector3::normalize: magnitude is zero"
        );
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<GeomError>();
        _assert_sync::<GeomError>();
    }
}
