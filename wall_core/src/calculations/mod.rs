//! # Wall Thickness Calculations
//!
//! This module contains the three failure-mode checks and the route
//! envelope that combines them. Each check follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, WallError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`hoop`] - Hoop stress sizing (thin/thick wall selection)
//! - [`collapse`] - External-pressure collapse (local buckling)
//! - [`buckle`] - Buckle propagation arrest
//! - [`route`] - Whole-route envelope (governing thickness per location)

pub mod buckle;
pub mod collapse;
pub mod hoop;
pub mod route;

// Re-export commonly used types
pub use buckle::{BuckleInput, BuckleResult};
pub use collapse::{CollapseInput, CollapseResult};
pub use hoop::{HoopInput, HoopResult, WallRegime};
pub use route::{LocationResult, RouteColumns, RouteInput, RouteLocation, RouteResult};
