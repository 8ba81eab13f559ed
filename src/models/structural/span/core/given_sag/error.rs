use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Length;

use crate::{models::structural::span::core::LoadError, support::catenary::CatenaryError};

/// Errors that can occur while solving for the tension at a target sag.
#[derive(Debug, Error)]
pub enum GivenSagError {
    /// The combined transverse load is degenerate.
    #[error("degenerate load")]
    Load(#[from] LoadError),

    /// The span cannot carry a catenary.
    #[error("invalid span geometry")]
    Geometry(#[from] CatenaryError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best sag residual achieved.
        residual: Length,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
