//! Sag-tension computation for a single conductor span.
//!
//! A conductor hangs as a catenary between two supports. Its horizontal
//! tension is found by matching the catenary arc length to the length the
//! wire stretches to under that tension, either on the initial stress-strain
//! curve or on a linear-elastic post-creep model.

mod analysis;
mod blown;
mod elastic;
mod error;
mod given_sag;
mod initial;
mod input;
mod load;
mod material;
mod newton;

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis::{AnalysisError, SpanResults};
pub use blown::{BlownSpan, StructureForces};
pub use error::{Divergence, TensionError, TensionSolver};
pub use given_sag::{GivenSagConfig, GivenSagError};
pub use input::{StressStrain, StressStrainError, Weather, Wire};
pub use load::{
    GRAVITY, ICE_DENSITY, LinearLoads, LoadError, final_linear_force, weight_linear_force,
    wind_linear_force,
};
pub use material::ConductorMaterial;
pub use newton::{NewtonConfig, SolvedTension};

use crate::support::constraint::{Constrained, StrictlyPositive};
use uom::si::f64::{Force, Length};

/// Entry point for sag-tension calculations.
///
/// Every calculation is a pure function of its inputs, so weather cases and
/// wires can be evaluated from independent threads.
pub struct SagTension;

impl SagTension {
    /// Solves for the stringing tension on the initial stress-strain curve.
    ///
    /// # Errors
    ///
    /// Returns a [`TensionError`] for invalid geometry, a degenerate load, a
    /// material failure, or a Newton iteration that does not converge.
    pub fn initial_tension<M: ConductorMaterial>(
        weather: &Weather,
        wire: &Wire,
        material: &M,
        creep: &M::Creep,
        config: &NewtonConfig,
    ) -> Result<SolvedTension, TensionError> {
        initial::initial_tension(weather, wire, material, creep, config)
    }

    /// Solves for the post-creep tension with a linear-elastic wire.
    ///
    /// # Errors
    ///
    /// Returns a [`TensionError`] for invalid geometry, a degenerate load, a
    /// material failure, or a Newton iteration that does not converge.
    pub fn final_tension<M: ConductorMaterial>(
        weather: &Weather,
        wire: &Wire,
        material: &M,
        creep: &M::Creep,
        config: &NewtonConfig,
    ) -> Result<SolvedTension, TensionError> {
        elastic::final_tension(weather, wire, material, creep, config)
    }

    /// Finds the horizontal tension at which the span sags by `target_sag`.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenSagError`] for invalid geometry, a degenerate load, or
    /// if the solver fails to converge.
    pub fn given_sag(
        weather: &Weather,
        wire: &Wire,
        target_sag: Constrained<Length, StrictlyPositive>,
        config: GivenSagConfig,
    ) -> Result<SpanResults, GivenSagError> {
        given_sag::given_sag(weather, wire, target_sag, config)
    }

    /// Evaluates sag, arc length, blown geometry, and structure forces for a
    /// wire at a known horizontal tension.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisError`] if the load is degenerate or the span
    /// cannot carry a catenary at this tension.
    pub fn analyze(
        weather: &Weather,
        wire: &Wire,
        tension: Force,
    ) -> Result<SpanResults, AnalysisError> {
        analysis::analyze(weather, wire, tension)
    }
}
