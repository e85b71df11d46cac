//! # Pressure Model
//!
//! Fluid pressure head and the internal/external pressures acting on the
//! pipe wall at a route location. These are the inputs every sizing check
//! consumes; they involve no failure modes of their own.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::pressure;
//!
//! // External pressure on the seabed at 96.8 m water depth
//! let p_e = pressure::external_pressure(96.8, pressure::RHO_SEAWATER);
//!
//! // Internal pressure: 380 bar design pressure, contents head measured
//! // from a reference 24 m above the waterline
//! let p_i = pressure::internal_pressure(380.0e5, 96.8, 982.7, 24.0);
//!
//! assert!((p_i - 3.91645e7).abs() < 100.0);
//! assert!(pressure::differential(p_i, p_e) > 0.0);
//! ```

/// Standard acceleration of gravity [m/s^2]
pub const G: f64 = 9.81;

/// Default seawater density [kg/m^3]
pub const RHO_SEAWATER: f64 = 1025.0;

/// Fluid pressure head `rho * g * h` [Pa].
///
/// Gravity is an explicit argument; pass [`G`] unless modelling a
/// non-standard value. Negative depth is mathematically valid but
/// degenerate; callers are expected to supply depths measured positive
/// downwards.
pub fn pressure_head(depth_m: f64, density_kgm3: f64, g_ms2: f64) -> f64 {
    density_kgm3 * g_ms2 * depth_m
}

/// Internal pressure at the seabed: design pressure plus the contents
/// head over the effective column height `depth + reference height`.
///
/// `ref_height_m` shifts the column for e.g. riser elevation; pass 0.0
/// when the design pressure is referenced at the waterline.
pub fn internal_pressure(
    design_pressure_pa: f64,
    depth_m: f64,
    contents_density_kgm3: f64,
    ref_height_m: f64,
) -> f64 {
    design_pressure_pa + pressure_head(depth_m + ref_height_m, contents_density_kgm3, G)
}

/// External (hydrostatic) pressure at the given water depth.
pub fn external_pressure(depth_m: f64, seawater_density_kgm3: f64) -> f64 {
    pressure_head(depth_m, seawater_density_kgm3, G)
}

/// Pressure differential across the wall, as used by the hoop check.
pub fn differential(internal_pa: f64, external_pa: f64) -> f64 {
    (internal_pa - external_pa).abs()
}
