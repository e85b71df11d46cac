//! # External Pressure Collapse Check
//!
//! Nominal wall thickness to resist local buckling (collapse) of the pipe
//! section under external pressure, per PD 8010-2 Clause G.1.2.
//!
//! ## Algorithm Overview
//!
//! The characteristic resistance of an imperfect (oval) tube is an
//! implicit function of trial thickness `t`:
//!
//! ```text
//! P_cr(t) = 2E / (1 - v^2) * (t/D_o)^3        (equation G.2)
//! P_y(t)  = 2 * sigma_y * (t/D_o)             (equation G.3)
//! R(t) = (P_char/P_cr - 1)(( P_char/P_y)^2 - 1)
//!        - (P_char/P_y) * f_0 * (D_o/t)       (equation G.1)
//! ```
//!
//! with `P_char = f_s * P_e`. The required thickness is the root of
//! `R(t) = 0`, found by secant iteration from a fixed 1 mm starting
//! guess. `R` is not monotonic near very small `t`, so the starting
//! point is part of the numerical contract.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::collapse::{CollapseInput, calculate};
//!
//! let input = CollapseInput {
//!     external_pressure_pa: 973_348.2,
//!     yield_strength_pa: 427.0e6,
//!     youngs_modulus_pa: 207.0e9,
//!     poisson_ratio: 0.3,
//!     outside_diameter_m: 0.2731,
//!     ovality: 0.001,
//!     safety_factor: 2.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.t_nom_m - 0.004447).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{WallError, WallResult};
use crate::solver;

/// Starting guess for the thickness root search [m]
const INITIAL_GUESS_M: f64 = 1.0e-3;

/// Default factor of safety on external pressure
pub const DEFAULT_SAFETY_FACTOR: f64 = 2.0;

/// Input parameters for the collapse check at one route location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollapseInput {
    /// External (hydrostatic) pressure P_e [Pa]
    pub external_pressure_pa: f64,

    /// Derated yield strength sigma_y [Pa]
    pub yield_strength_pa: f64,

    /// Young's modulus E [Pa]
    pub youngs_modulus_pa: f64,

    /// Poisson's ratio v [-]
    pub poisson_ratio: f64,

    /// Outside diameter D_o [m]
    pub outside_diameter_m: f64,

    /// Pipe ovality f_0 [-]
    pub ovality: f64,

    /// Factor of safety f_s on external pressure [-]
    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,
}

fn default_safety_factor() -> f64 {
    DEFAULT_SAFETY_FACTOR
}

/// Results of the collapse check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollapseResult {
    /// Nominal wall thickness t_nom [m]
    pub t_nom_m: f64,

    /// Secant iterations consumed by the root search
    pub iterations: usize,

    /// Characteristic resistance residual at the returned thickness
    pub residual: f64,
}

impl CollapseInput {
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
        if self.youngs_modulus_pa <= 0.0 {
            return Err(WallError::invalid_input(
                "youngs_modulus_pa",
                self.youngs_modulus_pa.to_string(),
                "Young's modulus must be positive",
            ));
        }
        if self.poisson_ratio.abs() >= 1.0 {
            return Err(WallError::invalid_input(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson's ratio must satisfy |v| < 1",
            ));
        }
        if self.ovality < 0.0 {
            return Err(WallError::invalid_input(
                "ovality",
                self.ovality.to_string(),
                "Ovality cannot be negative",
            ));
        }
        if self.safety_factor <= 0.0 {
            return Err(WallError::invalid_input(
                "safety_factor",
                self.safety_factor.to_string(),
                "Safety factor must be positive",
            ));
        }
        Ok(())
    }

    /// Characteristic resistance R(t) at a trial thickness
    /// (PD 8010-2 equation G.1).
    pub fn characteristic_resistance(&self, t_m: f64) -> f64 {
        let p_char = self.safety_factor * self.external_pressure_pa;
        let d_o = self.outside_diameter_m;

        // Elastic critical pressure (equation G.2)
        let p_cr = 2.0 * self.youngs_modulus_pa / (1.0 - self.poisson_ratio * self.poisson_ratio)
            * (t_m / d_o).powi(3);

        // Yield pressure (equation G.3)
        let p_y = 2.0 * self.yield_strength_pa * (t_m / d_o);

        let term_1 = (p_char / p_cr) - 1.0;
        let term_2 = (p_char / p_y).powi(2) - 1.0;
        term_1 * term_2 - (p_char / p_y) * self.ovality * (d_o / t_m)
    }
}

/// Run the collapse check for one location.
///
/// Fails with `NonConvergence` (location index 0; route-level callers
/// rewrite it with the true index) when the root search exhausts its
/// budget.
pub fn calculate(input: &CollapseInput) -> WallResult<CollapseResult> {
    input.validate()?;

    let root = solver::find_root(|t| input.characteristic_resistance(t), INITIAL_GUESS_M)
        .map_err(|failure| {
            WallError::non_convergence(0, failure.iterations, failure.residual)
        })?;

    Ok(CollapseResult {
        t_nom_m: root.value,
        iterations: root.iterations,
        residual: root.residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pressure;

    /// Reference case: 273.1 mm pipe at 96.8 m water depth
    fn reference_input() -> CollapseInput {
        CollapseInput {
            external_pressure_pa: pressure::external_pressure(96.8, pressure::RHO_SEAWATER),
            yield_strength_pa: 427.0e6,
            youngs_modulus_pa: 207.0e9,
            poisson_ratio: 0.3,
            outside_diameter_m: 0.2731,
            ovality: 0.001,
            safety_factor: 2.0,
        }
    }

    #[test]
    fn test_reference_collapse_thickness() {
        let result = calculate(&reference_input()).unwrap();
        assert!((result.t_nom_m - 0.004447).abs() < 1e-6);
    }

    #[test]
    fn test_residual_vanishes_at_root() {
        let input = reference_input();
        let result = calculate(&input).unwrap();
        assert!(input.characteristic_resistance(result.t_nom_m).abs() < 1e-6);
        assert!(result.iterations <= solver::MAX_ITERATIONS);
    }

    #[test]
    fn test_published_dataset_values() {
        // Two-location dataset with mixed steel grades
        let cases = [
            // (D_o, h, sigma_y, E, f_0, expected t_nom)
            (0.1683, 95.0, 508.4e6, 207.0e9, 0.025, 0.00288),
            (0.2731, 94.0, 475.0e6, 199.0e9, 0.025, 0.00473),
        ];
        for (d_o, h, sigma_y, e, f_0, expected) in cases {
            let input = CollapseInput {
                external_pressure_pa: pressure::external_pressure(h, pressure::RHO_SEAWATER),
                yield_strength_pa: sigma_y,
                youngs_modulus_pa: e,
                poisson_ratio: 0.3,
                outside_diameter_m: d_o,
                ovality: f_0,
                safety_factor: 2.0,
            };
            let result = calculate(&input).unwrap();
            assert!(
                (result.t_nom_m - expected).abs() / expected < 1e-2,
                "t_nom = {} (expected ~{})",
                result.t_nom_m,
                expected
            );
        }
    }

    #[test]
    fn test_deeper_water_needs_thicker_wall() {
        // Compared within the same solution branch of R(t); the search is
        // local and the branch reached from the fixed guess can change for
        // much larger pressures
        let mut shallow_input = reference_input();
        shallow_input.external_pressure_pa =
            pressure::external_pressure(50.0, pressure::RHO_SEAWATER);
        let shallow = calculate(&shallow_input).unwrap();
        let deep = calculate(&reference_input()).unwrap();
        assert!(deep.t_nom_m > shallow.t_nom_m);
    }

    #[test]
    fn test_invalid_modulus_rejected() {
        let mut input = reference_input();
        input.youngs_modulus_pa = -1.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_safety_factor_defaults_in_json() {
        // safety_factor omitted: serde default of 2.0 applies
        let json = r#"{
            "external_pressure_pa": 973348.2,
            "yield_strength_pa": 427.0e6,
            "youngs_modulus_pa": 207.0e9,
            "poisson_ratio": 0.3,
            "outside_diameter_m": 0.2731,
            "ovality": 0.001
        }"#;
        let input: CollapseInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.safety_factor, DEFAULT_SAFETY_FACTOR);
    }
}
