use std::fmt;

use crate::support::catenary::CatenaryError;
use thiserror::Error;
use uom::si::f64::{Force, Length};

use super::LoadError;

/// Identifies which tension solver produced a result or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensionSolver {
    /// Stringing tension from the initial stress-strain curve.
    Initial,

    /// Post-creep tension from the linear-elastic model.
    Final,
}

impl fmt::Display for TensionSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Final => f.write_str("final"),
        }
    }
}

/// Why a Newton iteration stopped without converging.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Divergence {
    /// The step never fell below tolerance within the iteration limit.
    #[error("iteration limit reached")]
    IterationLimit,

    /// A tension estimate was zero or negative.
    #[error("tension estimate is not strictly positive")]
    NonPositiveTension,

    /// A tension estimate or Newton step was not finite.
    #[error("tension estimate is not finite")]
    NonFinite,

    /// The catenary could not be evaluated at a tension estimate.
    #[error(transparent)]
    Geometry(#[from] CatenaryError),
}

/// Errors that can occur while solving for horizontal tension.
#[derive(Debug, Error)]
pub enum TensionError {
    /// The span cannot carry a catenary.
    #[error("{solver} tension solve rejected the span geometry")]
    Geometry {
        /// Solver that rejected the input.
        solver: TensionSolver,

        /// Underlying geometry error.
        #[source]
        source: CatenaryError,
    },

    /// The combined transverse load is degenerate.
    #[error("{solver} tension solve rejected the load")]
    Load {
        /// Solver that rejected the input.
        solver: TensionSolver,

        /// Underlying load error.
        #[source]
        source: LoadError,
    },

    /// A Newton iteration failed to converge.
    ///
    /// This is distinct from bad input: the inputs were valid but the
    /// iteration was numerically unstable from the parabolic seed.
    #[error("{solver} tension solve did not converge after {iters} iterations")]
    NonConvergent {
        /// Solver that failed.
        solver: TensionSolver,

        /// Span length of the weather case.
        span_length: Length,

        /// Parabolic seed the iteration started from.
        seed: Force,

        /// Last tension estimate.
        tension: Force,

        /// Iterations performed.
        iters: usize,

        /// Reason the iteration stopped.
        #[source]
        reason: Divergence,
    },

    /// A conductor material property could not be evaluated.
    #[error("conductor material failed: {context}")]
    MaterialFailed {
        /// Property being evaluated.
        context: String,

        /// Underlying material error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl TensionError {
    /// Creates a geometry error for a solver.
    pub(super) fn geometry(solver: TensionSolver) -> impl Fn(CatenaryError) -> Self {
        move |source| Self::Geometry { solver, source }
    }

    /// Creates a load error for a solver.
    pub(super) fn load(solver: TensionSolver) -> impl Fn(LoadError) -> Self {
        move |source| Self::Load { solver, source }
    }

    /// Creates a material failure error with context.
    pub(super) fn material_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MaterialFailed {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
