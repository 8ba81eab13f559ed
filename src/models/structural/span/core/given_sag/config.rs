use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

/// Solver configuration for finding the tension that produces a target sag.
#[derive(Debug, Clone, Copy)]
pub struct GivenSagConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the tension search variable.
    pub tension_tol: Force,

    /// Absolute tolerance on the sag residual (achieved - target).
    pub sag_tol: Length,
}

impl Default for GivenSagConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tension_tol: Force::new::<newton>(1e-6),
            sag_tol: Length::new::<meter>(1e-9),
        }
    }
}

impl GivenSagConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.tension_tol.get::<newton>(),
            x_rel_tol: 0.0,
            residual_tol: self.sag_tol.get::<meter>(),
        }
    }
}
