//! Stringing tension from the initial (no-creep) stress-strain curve.

use crate::support::catenary;
use uom::si::{area::square_meter, length::meter, pressure::pascal};

use super::{
    ConductorMaterial, LinearLoads, NewtonConfig, SolvedTension, TensionError, TensionSolver,
    Weather, Wire, material::at_weather_temperature, newton,
};

/// Solves for the horizontal tension where catenary stretch matches the
/// initial stress-strain curve.
///
/// The residual is the curve stress at the wire's percent elongation minus
/// the tension stress on the cross-section. Its slope chains
/// [`catenary::arc_length_prime`] through the curve slope.
pub(super) fn initial_tension<M: ConductorMaterial>(
    weather: &Weather,
    wire: &Wire,
    material: &M,
    creep: &M::Creep,
    config: &NewtonConfig,
) -> Result<SolvedTension, TensionError> {
    let span = weather.span_length().get::<meter>();
    let elevation = weather.elevation().get::<meter>();
    let solver = TensionSolver::Initial;
    catenary::check_span(span, elevation).map_err(TensionError::geometry(solver))?;
    let load = LinearLoads::new(weather, wire)
        .map_err(TensionError::load(solver))?
        .resultant()
        .value;

    let original = material
        .original_length(wire, creep)
        .map_err(|err| TensionError::material_failed("original length", err))?
        .get::<meter>();
    let length = at_weather_temperature(material, wire, weather, original)?;

    let area = wire.cross_section().get::<square_meter>();
    let curve = wire.stress_strain();
    let seed = newton::parabolic_seed(span, elevation, load, length);

    newton::solve(solver, weather.span_length(), seed, config, |tension| {
        let arc = catenary::arc_length(span, elevation, tension / load)?;
        let arc_prime = catenary::arc_length_prime(tension, span, load, elevation)?;

        let strain = (arc / length - 1.0) * 100.0;
        let residual = curve.stress(strain).get::<pascal>() - tension / area;
        let stretch = curve.slope(strain).get::<pascal>() * 100.0 * arc_prime / length;

        Ok(residual / (stretch - 1.0 / area))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::force::newton;

    use crate::models::structural::span::core::{
        Divergence,
        test_support::{TestCreep, TestMaterial, drake, weather},
    };

    fn solve(
        temperature: f64,
        elevation: f64,
        ice: f64,
        wind: f64,
    ) -> Result<SolvedTension, TensionError> {
        initial_tension(
            &weather(temperature, 300.0, elevation, ice, wind),
            &drake(),
            &TestMaterial::new(),
            &TestCreep(0.0),
            &NewtonConfig::default(),
        )
    }

    #[test]
    fn bare_level_span() {
        let solved = solve(15.0, 0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(
            solved.tension.get::<newton>(),
            25_515.690_586_874_196,
            max_relative = 1e-6
        );
        assert_eq!(solved.iters, 7);
    }

    #[test]
    fn iced_level_span() {
        let solved = solve(15.0, 0.0, 12.7, 0.0).unwrap();
        assert_relative_eq!(
            solved.tension.get::<newton>(),
            40_913.801_737_537_99,
            max_relative = 1e-6
        );
    }

    #[test]
    fn iced_inclined_span_in_wind() {
        let solved = solve(-10.0, 30.0, 12.7, 400.0).unwrap();
        assert_relative_eq!(
            solved.tension.get::<newton>(),
            107_201.335_528_141_47,
            max_relative = 1e-6
        );
    }

    #[test]
    fn converged_tension_satisfies_the_curve() {
        let case = weather(15.0, 300.0, 0.0, 12.7, 0.0);
        let wire = drake();
        let tension = solve(15.0, 0.0, 12.7, 0.0).unwrap().tension.get::<newton>();

        let load = LinearLoads::new(&case, &wire).unwrap().resultant().value;
        let arc = catenary::arc_length(300.0, 0.0, tension / load).unwrap();
        let strain = (arc / 300.1 - 1.0) * 100.0;
        let area = wire.cross_section().get::<square_meter>();

        assert_relative_eq!(
            wire.stress_strain().stress(strain).get::<pascal>(),
            tension / area,
            max_relative = 1e-6
        );
    }

    #[test]
    fn cold_iced_wire_overshoots_to_negative_tension() {
        // The seed lands far above the answer and the first step overshoots zero.
        let err = solve(0.0, 0.0, 12.7, 0.0).unwrap_err();
        assert!(
            matches!(
                err,
                TensionError::NonConvergent {
                    solver: TensionSolver::Initial,
                    iters: 1,
                    reason: Divergence::NonPositiveTension,
                    ..
                }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn taut_wire_has_no_seed() {
        // 300 m of wire at its stringing temperature on a 300 m span.
        let err = initial_tension(
            &weather(15.0, 300.0, 0.0, 0.0, 0.0),
            &drake(),
            &TestMaterial::with_original_length(300.0),
            &TestCreep(0.0),
            &NewtonConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TensionError::NonConvergent {
                iters: 0,
                reason: Divergence::NonFinite,
                ..
            }
        ));
    }

    #[test]
    fn respects_iteration_limit() {
        let config = NewtonConfig {
            max_iters: 3,
            ..NewtonConfig::default()
        };
        let err = initial_tension(
            &weather(15.0, 300.0, 0.0, 0.0, 0.0),
            &drake(),
            &TestMaterial::new(),
            &TestCreep(0.0),
            &config,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TensionError::NonConvergent {
                solver: TensionSolver::Initial,
                iters: 3,
                reason: Divergence::IterationLimit,
                ..
            }
        ));
    }

    #[test]
    fn names_the_initial_solver_on_bad_input() {
        use crate::models::structural::span::core::{LoadError, test_support::weightless};

        let err = initial_tension(
            &weather(15.0, 300.0, 0.0, 0.0, 0.0),
            &weightless(),
            &TestMaterial::new(),
            &TestCreep(0.0),
            &NewtonConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TensionError::Load {
                solver: TensionSolver::Initial,
                source: LoadError::Degenerate { .. },
            }
        ));
        assert_eq!(err.to_string(), "initial tension solve rejected the load");
    }
}
