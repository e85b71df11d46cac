//! # Scalar Root Finder
//!
//! Bounded secant iteration for the collapse check's characteristic
//! resistance equation. The search is local: the collapse resistance is
//! not monotonic near very small trial thicknesses, so the fixed starting
//! guess of 1 mm is part of the numerical contract and must not be
//! altered if results are to reproduce published values.

/// Maximum iterations for the secant search
pub const MAX_ITERATIONS: usize = 50;

/// Absolute convergence tolerance on the step size [m]
pub const TOLERANCE: f64 = 1.48e-8;

/// Offset used to derive the second secant point from the starting guess
const SECOND_POINT_EPS: f64 = 1.0e-4;

/// A converged root, with diagnostics retained for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Abscissa at which the function vanishes
    pub value: f64,
    /// Iterations consumed
    pub iterations: usize,
    /// Function value at the root
    pub residual: f64,
}

/// Diagnostics for a search that exhausted its budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonConvergence {
    /// Iterations consumed (the full budget)
    pub iterations: usize,
    /// Function value at the last iterate
    pub residual: f64,
}

/// Find a root of `f` by secant iteration from the fixed starting guess.
///
/// The second point is seeded at `x0 * (1 + 1e-4) + 1e-4`, and the search
/// stops when the step falls below [`TOLERANCE`] or the budget of
/// [`MAX_ITERATIONS`] runs out.
pub fn find_root<F>(f: F, x0: f64) -> Result<Root, NonConvergence>
where
    F: Fn(f64) -> f64,
{
    let eps = if x0 >= 0.0 {
        SECOND_POINT_EPS
    } else {
        -SECOND_POINT_EPS
    };
    let mut p0 = x0;
    let mut p1 = x0 * (1.0 + SECOND_POINT_EPS) + eps;
    let mut q0 = f(p0);
    let mut q1 = f(p1);

    for iteration in 1..=MAX_ITERATIONS {
        if q1 == q0 {
            // Flat secant: accept the midpoint if the bracket has shrunk
            // to nothing, otherwise report failure
            let mid = 0.5 * (p0 + p1);
            if (p1 - p0).abs() < TOLERANCE {
                return Ok(Root {
                    value: mid,
                    iterations: iteration,
                    residual: f(mid),
                });
            }
            return Err(NonConvergence {
                iterations: iteration,
                residual: q1,
            });
        }

        let p = p1 - q1 * (p1 - p0) / (q1 - q0);
        if (p - p1).abs() < TOLERANCE {
            return Ok(Root {
                value: p,
                iterations: iteration,
                residual: f(p),
            });
        }

        p0 = p1;
        q0 = q1;
        p1 = p;
        q1 = f(p1);
    }

    Err(NonConvergence {
        iterations: MAX_ITERATIONS,
        residual: q1,
    })
}
