//! # Error Types
//!
//! Structured error types for bearing_core. The formulas themselves never
//! fail: an angle that drives a trigonometric term to infinity simply yields a
//! non-finite factor. The only failure a caller can hit is asking for a method
//! that does not exist.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::errors::{CalcError, CalcResult};
//! use bearing_core::BearingMethod;
//!
//! fn parse(name: &str) -> CalcResult<BearingMethod> {
//!     name.parse()
//! }
//!
//! let err = parse("Prandtl").unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_METHOD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bearing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for bearing capacity calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The method identifier is not one of the registered methods
    #[error("Unknown method: '{method}' (expected one of: {expected})")]
    UnknownMethod { method: String, expected: String },
}

impl CalcError {
    /// Create an UnknownMethod error, listing the accepted names
    pub fn unknown_method(method: impl Into<String>) -> Self {
        CalcError::UnknownMethod {
            method: method.into(),
            expected: crate::methods::METHOD_NAMES.join(", "),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownMethod { .. } => "UNKNOWN_METHOD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_method("Prandtl");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownMethod\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_message_lists_methods() {
        let msg = CalcError::unknown_method("terzaghi").to_string();
        assert!(msg.contains("'terzaghi'"));
        assert!(msg.contains("Terzaghi, Meyerhof, Vesic, Hansen, EC7"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_method("x").error_code(), "UNKNOWN_METHOD");
    }
}
