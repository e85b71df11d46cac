//! # Route Wall Thickness Envelope
//!
//! Orchestrates the pressure model and the three sizing checks across an
//! ordered set of route locations, then takes the elementwise maximum as
//! the governing required thickness.
//!
//! Locations are mutually independent: each is sized from its own record
//! plus the dataset-wide scalars, and output order matches input order.
//! Validation runs over the whole dataset before any sizing, so an
//! invalid record aborts the calculation with no partial results.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::route::{RouteInput, RouteLocation, calculate};
//! use wall_core::factors::LocationClass;
//!
//! let input = RouteInput {
//!     design_pressure_pa: 380.0e5,
//!     reference_height_m: 24.0,
//!     contents_density_kgm3: 982.7,
//!     seawater_density_kgm3: 1025.0,
//!     safety_factor: 2.0,
//!     locations: vec![RouteLocation {
//!         kp_m: 0.0,
//!         location: LocationClass::Seabed,
//!         outside_diameter_m: 0.2731,
//!         water_depth_m: 96.8,
//!         yield_strength_pa: 427.0e6,
//!         corrosion_allowance_m: 0.001,
//!         fabrication_tolerance: 0.025,
//!         youngs_modulus_pa: 207.0e9,
//!         poisson_ratio: 0.3,
//!         ovality: 0.001,
//!     }],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.locations.len(), 1);
//! assert!(result.locations[0].required_m >= result.locations[0].hoop_nom_m);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{buckle, collapse, hoop};
use crate::errors::{WallError, WallResult};
use crate::factors::LocationClass;
use crate::pressure;

/// Per-location input record: physical and material parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLocation {
    /// Route position KP [m] - reporting only, not used in sizing
    pub kp_m: f64,

    /// Location category (seabed or riser)
    pub location: LocationClass,

    /// Outside diameter D_o [m]
    pub outside_diameter_m: f64,

    /// Water depth h [m]
    pub water_depth_m: f64,

    /// Derated yield strength sigma_y [Pa]
    pub yield_strength_pa: f64,

    /// Corrosion allowance t_corr [m]
    pub corrosion_allowance_m: f64,

    /// Fabrication tolerance f_tol [-], a fraction in `[0, 1]`
    pub fabrication_tolerance: f64,

    /// Young's modulus E [Pa]
    pub youngs_modulus_pa: f64,

    /// Poisson's ratio v [-]
    pub poisson_ratio: f64,

    /// Pipe ovality f_0 [-]
    pub ovality: f64,
}

/// Whole-route input: dataset-wide scalars plus the ordered location
/// records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteInput {
    /// Design pressure P_d [Pa]
    pub design_pressure_pa: f64,

    /// Reference height h_ref shifting the contents column [m]
    #[serde(default)]
    pub reference_height_m: f64,

    /// Contents density rho_c [kg/m^3]
    pub contents_density_kgm3: f64,

    /// Seawater density rho_sw [kg/m^3]
    #[serde(default = "default_seawater_density")]
    pub seawater_density_kgm3: f64,

    /// Collapse factor of safety f_s [-]
    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,

    /// Ordered per-location records
    pub locations: Vec<RouteLocation>,
}

fn default_seawater_density() -> f64 {
    pressure::RHO_SEAWATER
}

fn default_safety_factor() -> f64 {
    collapse::DEFAULT_SAFETY_FACTOR
}

/// Parallel-column form of the per-location inputs, as loaded from
/// tabular sources. All columns must have equal length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteColumns {
    pub kp_m: Vec<f64>,
    pub location: Vec<LocationClass>,
    pub outside_diameter_m: Vec<f64>,
    pub water_depth_m: Vec<f64>,
    pub yield_strength_pa: Vec<f64>,
    pub corrosion_allowance_m: Vec<f64>,
    pub fabrication_tolerance: Vec<f64>,
    pub youngs_modulus_pa: Vec<f64>,
    pub poisson_ratio: Vec<f64>,
    pub ovality: Vec<f64>,
}

impl RouteColumns {
    /// Check that every column matches the KP column's length.
    fn validate_lengths(&self) -> WallResult<()> {
        let expected = self.kp_m.len();
        let columns: [(&str, usize); 9] = [
            ("location", self.location.len()),
            ("outside_diameter_m", self.outside_diameter_m.len()),
            ("water_depth_m", self.water_depth_m.len()),
            ("yield_strength_pa", self.yield_strength_pa.len()),
            ("corrosion_allowance_m", self.corrosion_allowance_m.len()),
            ("fabrication_tolerance", self.fabrication_tolerance.len()),
            ("youngs_modulus_pa", self.youngs_modulus_pa.len()),
            ("poisson_ratio", self.poisson_ratio.len()),
            ("ovality", self.ovality.len()),
        ];
        for (field, actual) in columns {
            if actual != expected {
                return Err(WallError::length_mismatch(field, expected, actual));
            }
        }
        Ok(())
    }
}

impl RouteInput {
    /// Build a route from parallel columns, enforcing the equal-length
    /// invariant. Seawater density and safety factor take their default
    /// values; override with [`with_seawater_density`] /
    /// [`with_safety_factor`].
    ///
    /// [`with_seawater_density`]: RouteInput::with_seawater_density
    /// [`with_safety_factor`]: RouteInput::with_safety_factor
    pub fn from_columns(
        design_pressure_pa: f64,
        reference_height_m: f64,
        contents_density_kgm3: f64,
        columns: RouteColumns,
    ) -> WallResult<Self> {
        columns.validate_lengths()?;

        let locations = (0..columns.kp_m.len())
            .map(|i| RouteLocation {
                kp_m: columns.kp_m[i],
                location: columns.location[i],
                outside_diameter_m: columns.outside_diameter_m[i],
                water_depth_m: columns.water_depth_m[i],
                yield_strength_pa: columns.yield_strength_pa[i],
                corrosion_allowance_m: columns.corrosion_allowance_m[i],
                fabrication_tolerance: columns.fabrication_tolerance[i],
                youngs_modulus_pa: columns.youngs_modulus_pa[i],
                poisson_ratio: columns.poisson_ratio[i],
                ovality: columns.ovality[i],
            })
            .collect();

        Ok(RouteInput {
            design_pressure_pa,
            reference_height_m,
            contents_density_kgm3,
            seawater_density_kgm3: default_seawater_density(),
            safety_factor: default_safety_factor(),
            locations,
        })
    }

    /// Override the seawater density used for external pressure.
    pub fn with_seawater_density(mut self, rho_sw_kgm3: f64) -> Self {
        self.seawater_density_kgm3 = rho_sw_kgm3;
        self
    }

    /// Override the collapse factor of safety.
    pub fn with_safety_factor(mut self, f_s: f64) -> Self {
        self.safety_factor = f_s;
        self
    }

    /// Validate the dataset scalars and every location record.
    pub fn validate(&self) -> WallResult<()> {
        if self.safety_factor <= 0.0 {
            return Err(WallError::invalid_input(
                "safety_factor",
                self.safety_factor.to_string(),
                "Safety factor must be positive",
            ));
        }
        for loc in &self.locations {
            self.hoop_input(loc, 0.0).validate()?;
            self.collapse_input(loc, 0.0).validate()?;
            self.buckle_input(loc, 0.0).validate()?;
        }
        Ok(())
    }

    fn hoop_input(&self, loc: &RouteLocation, delta_p_pa: f64) -> hoop::HoopInput {
        hoop::HoopInput {
            outside_diameter_m: loc.outside_diameter_m,
            pressure_differential_pa: delta_p_pa,
            yield_strength_pa: loc.yield_strength_pa,
            location: loc.location,
            corrosion_allowance_m: loc.corrosion_allowance_m,
            fabrication_tolerance: loc.fabrication_tolerance,
        }
    }

    fn collapse_input(&self, loc: &RouteLocation, p_e_pa: f64) -> collapse::CollapseInput {
        collapse::CollapseInput {
            external_pressure_pa: p_e_pa,
            yield_strength_pa: loc.yield_strength_pa,
            youngs_modulus_pa: loc.youngs_modulus_pa,
            poisson_ratio: loc.poisson_ratio,
            outside_diameter_m: loc.outside_diameter_m,
            ovality: loc.ovality,
            safety_factor: self.safety_factor,
        }
    }

    fn buckle_input(&self, loc: &RouteLocation, p_p_pa: f64) -> buckle::BuckleInput {
        buckle::BuckleInput {
            outside_diameter_m: loc.outside_diameter_m,
            propagation_pressure_pa: p_p_pa,
            yield_strength_pa: loc.yield_strength_pa,
        }
    }
}

/// Sizing results at one route location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationResult {
    /// Route position KP [m], copied from the input record
    pub kp_m: f64,

    /// Internal pressure P_i [Pa]
    pub internal_pressure_pa: f64,

    /// External pressure P_e [Pa]
    pub external_pressure_pa: f64,

    /// Minimum hoop thickness t_min [m]
    pub hoop_min_m: f64,

    /// Governing hoop equation (thin or thick wall)
    pub hoop_regime: hoop::WallRegime,

    /// Nominal thickness for hoop stress [m]
    pub hoop_nom_m: f64,

    /// Nominal thickness for external-pressure collapse [m]
    pub collapse_nom_m: f64,

    /// Nominal thickness for buckle propagation arrest [m]
    pub buckle_nom_m: f64,

    /// Governing required thickness: max of the three nominals [m]
    pub required_m: f64,
}

impl LocationResult {
    /// Name of the failure mode that governs this location.
    pub fn governing_mode(&self) -> &'static str {
        if self.hoop_nom_m >= self.collapse_nom_m && self.hoop_nom_m >= self.buckle_nom_m {
            "hoop"
        } else if self.collapse_nom_m >= self.buckle_nom_m {
            "collapse"
        } else {
            "buckle"
        }
    }
}

/// Results for the whole route, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    pub locations: Vec<LocationResult>,
}

impl RouteResult {
    /// Largest required thickness anywhere on the route [m].
    pub fn max_required_m(&self) -> f64 {
        self.locations
            .iter()
            .map(|loc| loc.required_m)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Calculate nominal and required wall thicknesses along the route.
///
/// Validates every location up front, then runs the three sizing checks
/// per location independently. A collapse search that fails to converge
/// aborts the whole calculation with the offending location's index.
pub fn calculate(input: &RouteInput) -> WallResult<RouteResult> {
    input.validate()?;

    let mut locations = Vec::with_capacity(input.locations.len());

    for (index, loc) in input.locations.iter().enumerate() {
        let p_i = pressure::internal_pressure(
            input.design_pressure_pa,
            loc.water_depth_m,
            input.contents_density_kgm3,
            input.reference_height_m,
        );
        let p_e = pressure::external_pressure(loc.water_depth_m, input.seawater_density_kgm3);
        let delta_p = pressure::differential(p_i, p_e);

        let hoop_result = hoop::calculate(&input.hoop_input(loc, delta_p))?;
        let collapse_result =
            collapse::calculate(&input.collapse_input(loc, p_e)).map_err(|err| match err {
                WallError::NonConvergence {
                    iterations,
                    residual,
                    ..
                } => WallError::non_convergence(index, iterations, residual),
                other => other,
            })?;
        let buckle_result = buckle::calculate(&input.buckle_input(loc, p_e))?;

        let required_m = hoop_result
            .t_nom_m
            .max(collapse_result.t_nom_m)
            .max(buckle_result.t_nom_m);

        locations.push(LocationResult {
            kp_m: loc.kp_m,
            internal_pressure_pa: p_i,
            external_pressure_pa: p_e,
            hoop_min_m: hoop_result.t_min_m,
            hoop_regime: hoop_result.regime,
            hoop_nom_m: hoop_result.t_nom_m,
            collapse_nom_m: collapse_result.t_nom_m,
            buckle_nom_m: buckle_result.t_nom_m,
            required_m,
        });
    }

    Ok(RouteResult { locations })
}
