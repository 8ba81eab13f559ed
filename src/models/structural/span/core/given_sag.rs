//! Iterative solver for the tension that produces a target sag.
//!
//! Sag falls monotonically as horizontal tension rises, so bisection on
//! `sag(H) - target` converges once the root is bracketed. The bracket spans
//! half to ten times the parabolic estimate `w·L² / (8·sag)`.

mod config;
mod error;
mod problem;

pub use config::GivenSagConfig;
pub use error::GivenSagError;

use crate::support::{
    catenary,
    constraint::{Constrained, StrictlyPositive},
};
use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use super::{LinearLoads, SpanResults, Weather, Wire, analysis::span_results};

use problem::{SagModel, SagProblem};

/// Solves for the horizontal tension at which the span sags by `target_sag`.
///
/// # Errors
///
/// Returns [`GivenSagError`] on a degenerate load or span, or if the solver
/// fails to converge.
pub(super) fn given_sag(
    weather: &Weather,
    wire: &Wire,
    target_sag: Constrained<Length, StrictlyPositive>,
    config: GivenSagConfig,
) -> Result<SpanResults, GivenSagError> {
    let target_sag = target_sag.into_inner();

    let loads = LinearLoads::new(weather, wire)?;
    let span = weather.span_length().get::<meter>();
    let elevation = weather.elevation().get::<meter>();
    catenary::check_span(span, elevation)?;

    let load = loads.resultant().value;
    let estimate = load * span * span / (8.0 * target_sag.get::<meter>());
    debug!(
        estimate,
        target_sag = target_sag.get::<meter>(),
        "starting tension-given-sag solve"
    );

    let model = SagModel::new(span, elevation, load);
    let problem = SagProblem::new(target_sag);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.5 * estimate, 10.0 * estimate],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Hyperbolic terms overflow only when the wire is very slack,
            // where sag exceeds any reasonable target.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenSagError::MaxIters {
            residual: Length::new::<meter>(solution.residual),
            iters: solution.iters,
        });
    }

    let tension = solution.snapshot.output.tension;
    debug!(
        tension = tension.value,
        iters = solution.iters,
        "tension-given-sag solve converged"
    );

    Ok(span_results(weather, loads, tension)?)
}
