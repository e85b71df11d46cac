//! # Hoop Stress Check
//!
//! Minimum and nominal wall thickness to resist the pressure differential
//! across the pipe wall, per PD 8010-2 Section 6.4.2.
//!
//! ## Assumptions
//!
//! - The allowable stress is `f_d * sigma_y` (equation 2), with the design
//!   factor taken from the location category.
//! - Thin-wall sizing (equation 3) applies when `D_o / t > 20`; otherwise
//!   the thick-wall form (equation 5) governs. The regime is decided per
//!   location, so a single route may mix the two.
//! - Nominal thickness adds the corrosion allowance and scales for the
//!   fabrication tolerance (equation 4). A tolerance of exactly 1 has a
//!   zero denominator and is defined to yield a nominal thickness of 0
//!   rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::hoop::{HoopInput, calculate};
//! use wall_core::factors::LocationClass;
//!
//! let input = HoopInput {
//!     outside_diameter_m: 0.2731,
//!     pressure_differential_pa: 3.8191e7,
//!     yield_strength_pa: 427.0e6,
//!     location: LocationClass::Seabed,
//!     corrosion_allowance_m: 0.001,
//!     fabrication_tolerance: 0.025,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.t_min_m > 0.0);
//! assert!(result.t_nom_m > result.t_min_m);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{WallError, WallResult};
use crate::factors::LocationClass;

/// `D_o / t` ratio above which the thin-wall equation applies
const THIN_WALL_RATIO: f64 = 20.0;

/// Input parameters for the hoop stress check at one route location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoopInput {
    /// Outside diameter D_o [m]
    pub outside_diameter_m: f64,

    /// Absolute internal/external pressure differential [Pa]
    pub pressure_differential_pa: f64,

    /// Derated yield strength sigma_y [Pa]
    pub yield_strength_pa: f64,

    /// Location category (determines the design factor)
    pub location: LocationClass,

    /// Corrosion allowance t_corr [m]
    pub corrosion_allowance_m: f64,

    /// Fabrication tolerance f_tol [-], a fraction in `[0, 1]`
    pub fabrication_tolerance: f64,
}

/// Which closed-form hoop equation governed the sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallRegime {
    /// `D_o / t > 20`: thin-wall equation (PD 8010-2 equation 3)
    Thin,
    /// `D_o / t <= 20`: thick-wall equation (PD 8010-2 equation 5)
    Thick,
}

/// Results of the hoop stress check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoopResult {
    /// Minimum wall thickness t_min [m]
    pub t_min_m: f64,

    /// Diameter-to-thickness ratio `D_o / thin` used for regime selection
    pub diameter_ratio: f64,

    /// Governing hoop equation (thin or thick wall)
    pub regime: WallRegime,

    /// Nominal wall thickness t_nom [m], including mechanical allowances
    pub t_nom_m: f64,
}

impl HoopInput {
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
        if self.pressure_differential_pa < 0.0 {
            return Err(WallError::invalid_input(
                "pressure_differential_pa",
                self.pressure_differential_pa.to_string(),
                "Pressure differential is an absolute value and cannot be negative",
            ));
        }
        if self.corrosion_allowance_m < 0.0 {
            return Err(WallError::invalid_input(
                "corrosion_allowance_m",
                self.corrosion_allowance_m.to_string(),
                "Corrosion allowance cannot be negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.fabrication_tolerance) {
            return Err(WallError::invalid_input(
                "fabrication_tolerance",
                self.fabrication_tolerance.to_string(),
                "Fabrication tolerance must be a fraction in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Minimum wall thickness for hoop stress, selecting between the thin and
/// thick wall equations (PD 8010-2 Section 6.4.2).
///
/// Returns the minimum thickness, the `D_o / thin` ratio and the regime
/// that governed.
pub fn min_hoop_thickness(
    d_o_m: f64,
    delta_p_pa: f64,
    sigma_y_pa: f64,
    location: LocationClass,
) -> (f64, f64, WallRegime) {
    // Allowable stress (PD 8010-2 equation 2)
    let sigma_a = location.design_factor() * sigma_y_pa;

    // Thin wall equation (PD 8010-2 equation 3)
    let thin = delta_p_pa * d_o_m / (2.0 * sigma_a);

    let ratio = d_o_m / thin;
    if ratio > THIN_WALL_RATIO {
        (thin, ratio, WallRegime::Thin)
    } else {
        // Thick wall equation (PD 8010-2 equation 5)
        let abs_dp = delta_p_pa.abs();
        let thick = 0.5
            * (d_o_m - (((sigma_a - abs_dp) * d_o_m * d_o_m) / (sigma_a + abs_dp)).sqrt());
        (thick, ratio, WallRegime::Thick)
    }
}

/// Nominal wall thickness including mechanical allowances
/// (PD 8010-2 equation 4).
///
/// A fabrication tolerance of exactly 1 zeroes the denominator; the result
/// is defined as 0 in that case rather than an error.
pub fn nom_hoop_thickness(t_min_m: f64, t_corr_m: f64, f_tol: f64) -> f64 {
    let denominator = 1.0 - f_tol;
    if denominator == 0.0 {
        0.0
    } else {
        (t_min_m + t_corr_m) / denominator
    }
}

/// Run the hoop stress check for one location.
pub fn calculate(input: &HoopInput) -> WallResult<HoopResult> {
    input.validate()?;

    let (t_min_m, diameter_ratio, regime) = min_hoop_thickness(
        input.outside_diameter_m,
        input.pressure_differential_pa,
        input.yield_strength_pa,
        input.location,
    );
    let t_nom_m = nom_hoop_thickness(
        t_min_m,
        input.corrosion_allowance_m,
        input.fabrication_tolerance,
    );

    Ok(HoopResult {
        t_min_m,
        diameter_ratio,
        regime,
        t_nom_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pressure;

    /// Reference case: 273.1 mm seabed pipe at 96.8 m, 380 bar design
    fn reference_input() -> HoopInput {
        let p_i = pressure::internal_pressure(380.0e5, 96.8, 982.7, 24.0);
        let p_e = pressure::external_pressure(96.8, pressure::RHO_SEAWATER);
        HoopInput {
            outside_diameter_m: 0.2731,
            pressure_differential_pa: pressure::differential(p_i, p_e),
            yield_strength_pa: 427.0e6,
            location: LocationClass::Seabed,
            corrosion_allowance_m: 0.001,
            fabrication_tolerance: 0.025,
        }
    }

    #[test]
    fn test_reference_min_thickness() {
        let result = calculate(&reference_input()).unwrap();
        assert!((result.t_min_m - 0.016029).abs() < 1e-6);
    }

    #[test]
    fn test_reference_nominal_thickness() {
        let result = calculate(&reference_input()).unwrap();
        assert!((result.t_nom_m - 0.017466).abs() < 1e-6);
    }

    #[test]
    fn test_reference_case_is_thick_walled() {
        // D_o / thin comes out around 16, below the regime threshold
        let result = calculate(&reference_input()).unwrap();
        assert_eq!(result.regime, WallRegime::Thick);
        assert!(result.diameter_ratio <= THIN_WALL_RATIO);
    }

    #[test]
    fn test_low_pressure_case_is_thin_walled() {
        // 168.3 mm pipe at modest differential: ratio ~21, thin wall governs
        let (t_min, ratio, regime) =
            min_hoop_thickness(0.1683, 3.4243714e7, 508.4e6, LocationClass::Seabed);
        assert_eq!(regime, WallRegime::Thin);
        assert!(ratio > THIN_WALL_RATIO);
        assert!((t_min - 0.007872).abs() < 1e-6);
    }

    #[test]
    fn test_thin_value_matches_closed_form() {
        let d_o = 0.2731;
        let delta_p = 1.0e6;
        let sigma_a = 0.72 * 427.0e6;
        let (t_min, _, regime) =
            min_hoop_thickness(d_o, delta_p, 427.0e6, LocationClass::Seabed);
        assert_eq!(regime, WallRegime::Thin);
        assert!((t_min - delta_p * d_o / (2.0 * sigma_a)).abs() < 1e-15);
    }

    #[test]
    fn test_riser_factor_gives_thicker_wall() {
        let (seabed, _, _) =
            min_hoop_thickness(0.2731, 3.8e7, 427.0e6, LocationClass::Seabed);
        let (riser, _, _) = min_hoop_thickness(0.2731, 3.8e7, 427.0e6, LocationClass::Riser);
        assert!(riser > seabed);
    }

    #[test]
    fn test_full_tolerance_saturates_to_zero() {
        // f_tol == 1 zeroes the denominator; defined result is 0
        assert_eq!(nom_hoop_thickness(0.016, 0.001, 1.0), 0.0);
        assert_eq!(nom_hoop_thickness(0.0, 0.0, 1.0), 0.0);

        let mut input = reference_input();
        input.fabrication_tolerance = 1.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.t_nom_m, 0.0);
    }

    #[test]
    fn test_nominal_applies_allowances() {
        let t_nom = nom_hoop_thickness(0.008, 0.001, 0.125);
        assert!((t_nom - 0.009 / 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_diameter_rejected() {
        let mut input = reference_input();
        input.outside_diameter_m = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_tolerance_above_one_rejected() {
        let mut input = reference_input();
        input.fabrication_tolerance = 1.5;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = reference_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: HoopInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.location, roundtrip.location);
        assert_eq!(input.fabrication_tolerance, roundtrip.fabrication_tolerance);
    }
}
