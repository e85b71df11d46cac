//! # Hoop Stress Design Factors
//!
//! Allowable-stress design factors per PD 8010-2.
//!
//! ## Overview
//!
//! The allowable hoop stress is a fixed fraction of the derated yield
//! strength, dependent on where along the route the pipe section sits:
//!
//! ```text
//! sigma_a = f_d * sigma_y        (PD 8010-2 equation 2)
//! ```
//!
//! | Location | f_d  |
//! |----------|------|
//! | seabed   | 0.72 |
//! | riser    | 0.60 |
//!
//! The set of locations is closed, so it is modelled as an enum with an
//! associated constant rather than an open lookup table: an unrecognised
//! tag is rejected when the input is deserialized, not at factor-lookup
//! time.
//!
//! ## Reference
//!
//! PD 8010-2:2015, Section 6.4.2 and Table 2.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::WallError;

/// Pipeline location category, determining the hoop stress design factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationClass {
    /// Pipeline resting on or trenched into the seabed
    Seabed,
    /// Riser section (seabed to topsides)
    Riser,
}

impl LocationClass {
    /// Hoop stress design factor f_d (PD 8010-2 Table 2)
    pub fn design_factor(self) -> f64 {
        match self {
            LocationClass::Seabed => 0.72,
            LocationClass::Riser => 0.60,
        }
    }

    /// Lowercase tag used in serialized inputs and reports
    pub fn as_str(self) -> &'static str {
        match self {
            LocationClass::Seabed => "seabed",
            LocationClass::Riser => "riser",
        }
    }
}

impl fmt::Display for LocationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationClass {
    type Err = WallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seabed" => Ok(LocationClass::Seabed),
            "riser" => Ok(LocationClass::Riser),
            other => Err(WallError::invalid_input(
                "location",
                other,
                "Unknown location category (expected 'seabed' or 'riser')",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_factors() {
        assert_eq!(LocationClass::Seabed.design_factor(), 0.72);
        assert_eq!(LocationClass::Riser.design_factor(), 0.60);
    }

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("seabed".parse::<LocationClass>().unwrap(), LocationClass::Seabed);
        assert_eq!("riser".parse::<LocationClass>().unwrap(), LocationClass::Riser);
    }

    #[test]
    fn test_parse_unknown_tag_rejected() {
        let err = "shore".parse::<LocationClass>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serde_tags_are_lowercase() {
        let json = serde_json::to_string(&LocationClass::Riser).unwrap();
        assert_eq!(json, "\"riser\"");
        let back: LocationClass = serde_json::from_str("\"seabed\"").unwrap();
        assert_eq!(back, LocationClass::Seabed);
    }

    #[test]
    fn test_serde_unknown_tag_rejected() {
        let result: Result<LocationClass, _> = serde_json::from_str("\"shoreline\"");
        assert!(result.is_err());
    }
}
