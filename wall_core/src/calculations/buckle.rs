//! # Buckle Propagation Check
//!
//! Nominal wall thickness to arrest a propagating buckle, per PD 8010-2
//! Equation G.21. Closed form, no iteration:
//!
//! ```text
//! t_nom = D_o * (P_p / (10.7 * sigma_y)) ^ (4/9)
//! ```
//!
//! where `P_p` is the propagation pressure, taken as the external
//! pressure at the location.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::buckle::{BuckleInput, calculate};
//!
//! let input = BuckleInput {
//!     outside_diameter_m: 0.2731,
//!     propagation_pressure_pa: 973_348.2,
//!     yield_strength_pa: 427.0e6,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.t_nom_m - 0.006376).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{WallError, WallResult};

/// Propagation pressure exponent in equation G.21
const PROPAGATION_EXPONENT: f64 = 4.0 / 9.0;

/// Input parameters for the buckle propagation check at one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuckleInput {
    /// Outside diameter D_o [m]
    pub outside_diameter_m: f64,

    /// Propagation pressure P_p [Pa]
    pub propagation_pressure_pa: f64,

    /// Derated yield strength sigma_y [Pa]
    pub yield_strength_pa: f64,
}

/// Results of the buckle propagation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuckleResult {
    /// Nominal wall thickness t_nom [m]
    pub t_nom_m: f64,
}

impl BuckleInput {
    /// Validate input parameters.
    pub fn validate(&self) -> WallResult<()> {
        if self.outside_diameter_m <= 0.0 {
            return Err(WallError::invalid_input(
                "outside_diameter_m",
                self.outside_diameter_m.to_string(),
                "Outside diameter must be positive",
            ));
        }
        if self.yield_strength_pa <= 0.0 {
            return Err(WallError::invalid_input(
                "yield_strength_pa",
                self.yield_strength_pa.to_string(),
                "Yield strength must be positive",
            ));
        }
        if self.propagation_pressure_pa < 0.0 {
            return Err(WallError::invalid_input(
                "propagation_pressure_pa",
                self.propagation_pressure_pa.to_string(),
                "Propagation pressure cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Nominal wall thickness to arrest buckle propagation
/// (PD 8010-2 equation G.21).
pub fn buckle_thickness(d_o_m: f64, p_p_pa: f64, sigma_y_pa: f64) -> f64 {
    d_o_m * (p_p_pa / (10.7 * sigma_y_pa)).powf(PROPAGATION_EXPONENT)
}

/// Run the buckle propagation check for one location.
pub fn calculate(input: &BuckleInput) -> WallResult<BuckleResult> {
    input.validate()?;
    Ok(BuckleResult {
        t_nom_m: buckle_thickness(
            input.outside_diameter_m,
            input.propagation_pressure_pa,
            input.yield_strength_pa,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pressure;

    #[test]
    fn test_reference_buckle_thickness() {
        let p_e = pressure::external_pressure(96.8, pressure::RHO_SEAWATER);
        let t_nom = buckle_thickness(0.2731, p_e, 427.0e6);
        assert!((t_nom - 0.006376).abs() < 1e-6);
    }

    #[test]
    fn test_published_dataset_values() {
        let p_e_1 = pressure::external_pressure(95.0, pressure::RHO_SEAWATER);
        let p_e_2 = pressure::external_pressure(94.0, pressure::RHO_SEAWATER);
        assert!((buckle_thickness(0.1683, p_e_1, 508.4e6) - 0.003606).abs() < 1e-6);
        assert!((buckle_thickness(0.2731, p_e_2, 475.0e6) - 0.006002).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_in_pressure_and_diameter() {
        let base = buckle_thickness(0.2731, 1.0e6, 427.0e6);
        assert!(buckle_thickness(0.2731, 2.0e6, 427.0e6) > base);
        assert!(buckle_thickness(0.3239, 1.0e6, 427.0e6) > base);
    }

    #[test]
    fn test_decreasing_in_yield_strength() {
        let base = buckle_thickness(0.2731, 1.0e6, 427.0e6);
        assert!(buckle_thickness(0.2731, 1.0e6, 508.4e6) < base);
    }

    #[test]
    fn test_invalid_yield_rejected() {
        let input = BuckleInput {
            outside_diameter_m: 0.2731,
            propagation_pressure_pa: 1.0e6,
            yield_strength_pa: 0.0,
        };
        assert!(calculate(&input).is_err());
    }
}
