//! # Unit Types
//!
//! Type-safe wrappers for the units the engine reports in. These are
//! simple newtype wrappers rather than a full units library:
//!
//! - the engine computes everywhere in SI (metres, pascals),
//! - JSON serialization stays clean (just numbers),
//! - front-ends display thickness in millimetres and pressure in bar.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::units::{Bar, Metres, Millimetres, Pascals};
//!
//! let t = Metres(0.016029);
//! let t_mm: Millimetres = t.into();
//! assert!((t_mm.0 - 16.029).abs() < 1e-9);
//!
//! let p = Bar(380.0);
//! let p_pa: Pascals = p.into();
//! assert_eq!(p_pa.0, 380.0e5);
//! ```

use serde::{Deserialize, Serialize};

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

/// Pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in bar (1 bar = 1e5 Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bar(pub f64);

impl From<Pascals> for Bar {
    fn from(pa: Pascals) -> Self {
        Bar(pa.0 / 1.0e5)
    }
}

impl From<Bar> for Pascals {
    fn from(bar: Bar) -> Self {
        Pascals(bar.0 * 1.0e5)
    }
}
