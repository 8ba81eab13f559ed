//! Bounded Newton-Raphson iteration on horizontal tension.

use crate::support::catenary::CatenaryError;
use tracing::{debug, trace};
use uom::si::{
    f64::{Force, Length},
    force::newton,
};

use super::{Divergence, TensionError, TensionSolver};

/// Configuration shared by the initial and final tension solvers.
#[derive(Debug, Clone, Copy)]
pub struct NewtonConfig {
    /// Maximum number of Newton steps before giving up.
    pub max_iters: usize,

    /// The solve converges once a step is no larger than this.
    pub step_tol: Force,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            step_tol: Force::new::<newton>(0.001),
        }
    }
}

/// A converged horizontal tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvedTension {
    /// Horizontal tension in the wire.
    pub tension: Force,

    /// Newton steps taken to converge.
    pub iters: usize,
}

/// Seeds a tension solve from the parabolic approximation.
///
/// A shallow wire of length `S` over a chord `l` sags by about
/// `√(3·l·|S − l| / 8)`, and carries `load·l² / (8·sag)`.
/// The seed is infinite when the wire is exactly as long as the chord.
pub(super) fn parabolic_seed(span_length: f64, elevation: f64, load: f64, wire_length: f64) -> f64 {
    let chord = span_length.hypot(elevation);
    let sag = (3.0 * chord * (wire_length - chord).abs() / 8.0).sqrt();
    load * chord * chord / (8.0 * sag)
}

/// Iterates `tension -= step(tension)` from `seed` until the step is within tolerance.
///
/// Every estimate, including the seed, must be finite and strictly positive.
///
/// # Errors
///
/// Returns [`TensionError::NonConvergent`] if an estimate leaves the valid
/// domain, the step cannot be evaluated, or the iteration limit is reached.
pub(super) fn solve<F>(
    solver: TensionSolver,
    span_length: Length,
    seed: f64,
    config: &NewtonConfig,
    mut step: F,
) -> Result<SolvedTension, TensionError>
where
    F: FnMut(f64) -> Result<f64, CatenaryError>,
{
    let fail = |tension: f64, iters: usize, reason: Divergence| TensionError::NonConvergent {
        solver,
        span_length,
        seed: Force::new::<newton>(seed),
        tension: Force::new::<newton>(tension),
        iters,
        reason,
    };

    debug!(%solver, seed, "starting tension solve");
    check_estimate(seed, 0.0).map_err(|reason| fail(seed, 0, reason))?;

    let tol = config.step_tol.get::<newton>();
    let mut tension = seed;

    for iter in 1..=config.max_iters {
        let delta = step(tension).map_err(|err| fail(tension, iter - 1, err.into()))?;
        tension -= delta;
        trace!(%solver, iter, tension, delta, "newton step");

        check_estimate(tension, delta).map_err(|reason| fail(tension, iter, reason))?;

        if delta.abs() <= tol {
            debug!(%solver, tension, iters = iter, "tension solve converged");
            return Ok(SolvedTension {
                tension: Force::new::<newton>(tension),
                iters: iter,
            });
        }
    }

    Err(fail(tension, config.max_iters, Divergence::IterationLimit))
}

fn check_estimate(tension: f64, delta: f64) -> Result<(), Divergence> {
    if !(tension.is_finite() && delta.is_finite()) {
        Err(Divergence::NonFinite)
    } else if tension <= 0.0 {
        Err(Divergence::NonPositiveTension)
    } else {
        Ok(())
    }
}
