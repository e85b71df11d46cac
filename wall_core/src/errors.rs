//! # Error Types
//!
//! Structured error types for wall_core. Every failure is a deterministic
//! function of the input - there is no I/O in the engine - so each variant
//! carries enough context to identify the offending field or location
//! without re-running the calculation.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::errors::{WallError, WallResult};
//!
//! fn validate_diameter(d_o_m: f64) -> WallResult<()> {
//!     if d_o_m <= 0.0 {
//!         return Err(WallError::invalid_input(
//!             "outside_diameter_m",
//!             d_o_m.to_string(),
//!             "Outside diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wall_core operations
pub type WallResult<T> = Result<T, WallError>;

/// Structured error type for wall thickness calculations.
///
/// `InvalidInput` and `LengthMismatch` abort a route calculation before
/// any sizing runs; `NonConvergence` aborts it mid-route with the index
/// of the offending location (no partial results are returned).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WallError {
    /// An input value is invalid (out of range, unknown tag, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Parallel per-location columns have unequal lengths
    #[error("Length mismatch for '{field}': expected {expected} entries, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// The collapse root search exhausted its iteration budget
    #[error(
        "Collapse thickness search failed to converge at location index {location_index} \
         after {iterations} iterations (residual {residual:e})"
    )]
    NonConvergence {
        location_index: usize,
        iterations: usize,
        residual: f64,
    },
}

impl WallError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WallError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a LengthMismatch error
    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        WallError::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create a NonConvergence error
    pub fn non_convergence(location_index: usize, iterations: usize, residual: f64) -> Self {
        WallError::NonConvergence {
            location_index,
            iterations,
            residual,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WallError::InvalidInput { .. } => "INVALID_INPUT",
            WallError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            WallError::NonConvergence { .. } => "NON_CONVERGENCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = WallError::invalid_input(
            "outside_diameter_m",
            "-0.2731",
            "Outside diameter must be positive",
        );
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: WallError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            WallError::invalid_input("ovality", "-0.01", "Ovality cannot be negative")
                .error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            WallError::length_mismatch("water_depth_m", 4, 3).error_code(),
            "LENGTH_MISMATCH"
        );
        assert_eq!(
            WallError::non_convergence(2, 50, 1.3).error_code(),
            "NON_CONVERGENCE"
        );
    }

    #[test]
    fn test_non_convergence_names_location() {
        let error = WallError::non_convergence(7, 50, 0.42);
        assert!(error.to_string().contains("location index 7"));
    }
}
