//! # wall_core - Subsea Pipeline Wall Thickness Engine
//!
//! `wall_core` computes required pipeline wall thickness along a route
//! per the PD 8010-2 offshore design code. Three independent failure-mode
//! checks - hoop stress, external-pressure collapse and buckle
//! propagation - are sized per location and reduced to a single governing
//! envelope.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **SI throughout**: metres, pascals, kg/m^3; display conversion is
//!   the front-end's job
//!
//! ## Quick Start
//!
//! ```rust
//! use wall_core::calculations::route::{self, RouteInput, RouteLocation};
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
//! let result = route::calculate(&input).unwrap();
//! println!("required = {:.1} mm", 1000.0 * result.locations[0].required_m);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The three sizing checks and the route envelope
//! - [`pressure`] - Pressure head, internal/external pressure
//! - [`factors`] - Location categories and hoop design factors
//! - [`solver`] - Scalar root finder for the collapse check
//! - [`units`] - Type-safe unit wrappers for display conversion
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod factors;
pub mod pressure;
pub mod solver;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::route::{RouteInput, RouteLocation, RouteResult};
pub use errors::{WallError, WallResult};
pub use factors::LocationClass;
