//! # Pipewall CLI Application
//!
//! Console front-end for the wall thickness engine. Loads a route from a
//! JSON file when a path is given, otherwise runs the built-in demo
//! route, and prints the per-location thickness table.
//!
//! ```text
//! wall_cli [route.json]
//! ```

use std::env;
use std::fs;
use std::process;

use wall_core::calculations::route::{self, RouteInput, RouteLocation, RouteResult};
use wall_core::factors::LocationClass;
use wall_core::units::{Bar, Metres, Millimetres, Pascals};

/// Display conversion: engine thickness [m] to table thickness [mm].
fn to_mm(value_m: f64) -> f64 {
    Millimetres::from(Metres(value_m)).0
}

/// Demo route: the worked example from the PD 8010-2 sizing notes
/// (273.1 mm seabed line, 380 bar design pressure)
fn demo_route() -> RouteInput {
    let template = RouteLocation {
        kp_m: 0.0,
        location: LocationClass::Seabed,
        outside_diameter_m: 0.2731,
        water_depth_m: 200.0,
        yield_strength_pa: 427.0e6,
        corrosion_allowance_m: 0.001,
        fabrication_tolerance: 0.125,
        youngs_modulus_pa: 207.0e9,
        poisson_ratio: 0.3,
        ovality: 0.01,
    };

    RouteInput {
        design_pressure_pa: Pascals::from(Bar(380.0)).0,
        reference_height_m: 24.0,
        contents_density_kgm3: 10.0,
        seawater_density_kgm3: 1025.0,
        safety_factor: 2.0,
        locations: vec![
            template.clone(),
            RouteLocation {
                kp_m: 1000.0,
                water_depth_m: 50.0,
                ..template
            },
        ],
    }
}

fn load_route(path: &str) -> Result<RouteInput, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("cannot parse '{}': {}", path, e))
}

/// Print the result as a psql-style table, thickness in millimetres.
fn print_table(result: &RouteResult) {
    let headers = ["KP [m]", "Hoop [mm]", "Collapse [mm]", "Buckle [mm]", "Required [mm]"];
    let widths = [10, 11, 13, 11, 13];

    let rule: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+";

    println!("{}", rule);
    for (header, width) in headers.iter().zip(widths) {
        print!("| {:>width$} ", header, width = width);
    }
    println!("|");
    println!("{}", rule);

    for loc in &result.locations {
        println!(
            "| {:>10.1} | {:>11.3} | {:>13.3} | {:>11.3} | {:>13.3} |",
            loc.kp_m,
            to_mm(loc.hoop_nom_m),
            to_mm(loc.collapse_nom_m),
            to_mm(loc.buckle_nom_m),
            to_mm(loc.required_m),
        );
    }
    println!("{}", rule);
}

fn main() {
    println!("Pipewall CLI - PD 8010-2 Wall Thickness Calculator");
    println!("==================================================");
    println!();

    let input = match env::args().nth(1) {
        Some(path) => match load_route(&path) {
            Ok(input) => input,
            Err(reason) => {
                eprintln!("error: {}", reason);
                process::exit(1);
            }
        },
        None => {
            println!("No route file given - running built-in demo route.");
            println!();
            demo_route()
        }
    };

    match route::calculate(&input) {
        Ok(result) => {
            print_table(&result);
            println!();
            println!(
                "Governing wall thickness over route: {:.3} mm",
                to_mm(result.max_required_m())
            );
        }
        Err(err) => {
            eprintln!("error [{}]: {}", err.error_code(), err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_conversion_goes_through_unit_types() {
        assert!((to_mm(0.016029) - 16.029).abs() < 1e-9);
        assert_eq!(to_mm(0.0), 0.0);
    }

    #[test]
    fn test_demo_route_matches_worked_example() {
        let input = demo_route();
        assert_eq!(input.design_pressure_pa, 380.0e5);
        assert_eq!(input.reference_height_m, 24.0);
        assert_eq!(input.locations[0].water_depth_m, 200.0);
        assert_eq!(input.locations[1].water_depth_m, 50.0);
        for loc in &input.locations {
            assert_eq!(loc.ovality, 0.01);
            assert_eq!(loc.fabrication_tolerance, 0.125);
        }
    }

    #[test]
    fn test_demo_route_calculates() {
        let result = route::calculate(&demo_route()).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.max_required_m() > 0.0);
    }
}
