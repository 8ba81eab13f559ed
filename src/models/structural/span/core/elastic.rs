//! Final tension after creep, from a linear-elastic wire model.

use crate::support::catenary;
use uom::si::{area::square_meter, length::meter, pressure::pascal, ratio::ratio};

use super::{
    ConductorMaterial, LinearLoads, NewtonConfig, SolvedTension, TensionError, TensionSolver,
    Weather, Wire, material::at_weather_temperature, newton,
};

/// Solves for the horizontal tension of a crept wire with linear-elastic stretch.
///
/// With `ψ` the crept length at the weather temperature and
/// `β = length / (E·A)` the elastic compliance, the wire length under
/// tension is `ψ + H·β`, and Newton steps drive `ψ + H·β − S(H)` to zero.
pub(super) fn final_tension<M: ConductorMaterial>(
    weather: &Weather,
    wire: &Wire,
    material: &M,
    creep: &M::Creep,
    config: &NewtonConfig,
) -> Result<SolvedTension, TensionError> {
    let span = weather.span_length().get::<meter>();
    let elevation = weather.elevation().get::<meter>();
    let solver = TensionSolver::Final;
    catenary::check_span(span, elevation).map_err(TensionError::geometry(solver))?;
    let load = LinearLoads::new(weather, wire)
        .map_err(TensionError::load(solver))?
        .resultant()
        .value;

    let original = material
        .original_length(wire, creep)
        .map_err(|err| TensionError::material_failed("original length", err))?
        .get::<meter>();
    let creep_strain = material
        .creep_strain(creep, wire)
        .map_err(|err| TensionError::material_failed("creep strain", err))?
        .get::<ratio>();
    let modulus = material
        .elasticity(wire)
        .map_err(|err| TensionError::material_failed("elasticity", err))?
        .get::<pascal>();

    let crept = original * (1.0 + creep_strain);
    let psi = at_weather_temperature(material, wire, weather, crept)?;
    let beta = crept / (modulus * wire.cross_section().get::<square_meter>());
    let seed = newton::parabolic_seed(span, elevation, load, psi);

    newton::solve(solver, weather.span_length(), seed, config, |tension| {
        let arc = catenary::arc_length(span, elevation, tension / load)?;
        let arc_prime = catenary::arc_length_prime(tension, span, load, elevation)?;
        Ok((psi + tension * beta - arc) / (beta - arc_prime))
    })
}
