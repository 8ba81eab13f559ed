use crate::support::catenary::{self, CatenaryError, CatenaryResult};
use thiserror::Error;
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

use super::{BlownSpan, LinearLoads, LoadError, StructureForces, Weather, Wire};

/// Errors that can occur while evaluating a span at a known tension.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The combined transverse load is degenerate.
    #[error("degenerate load")]
    Load(#[from] LoadError),

    /// The span cannot carry a catenary at this tension.
    #[error("invalid span geometry")]
    Geometry(#[from] CatenaryError),
}

/// Geometry and support forces of a span at a known horizontal tension.
///
/// Sag, arc length, and the low and sag points are evaluated in the same
/// frame the tension solvers use: the weather case's span length and
/// elevation under the resultant load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanResults {
    /// Horizontal tension in the wire.
    pub tension: Force,

    /// Per-unit-length loads for the weather case.
    pub loads: LinearLoads,

    /// Tension over resultant load.
    pub catenary_constant: Length,

    /// Horizontal position of the low point from the near support.
    ///
    /// Negative when the low point falls outside the span.
    pub low_point_x: Length,

    /// Height of the low point relative to the near support.
    pub low_point_y: Length,

    /// Horizontal position of the point of maximum sag.
    pub sag_point_x: Length,

    /// Largest vertical distance between wire and chord.
    pub sag: Length,

    /// Suspended wire length between supports.
    pub arc_length: Length,

    /// Geometry in the wind-deflected plane.
    pub blown: BlownSpan,

    /// Near-support forces in structure axes.
    pub structure: StructureForces,
}

/// Evaluates a wire in a weather case at a horizontal tension.
///
/// Loads are derived from the same weather case the geometry uses.
pub(super) fn analyze(
    weather: &Weather,
    wire: &Wire,
    tension: Force,
) -> Result<SpanResults, AnalysisError> {
    let loads = LinearLoads::new(weather, wire)?;
    Ok(span_results(weather, loads, tension)?)
}

/// Evaluates span geometry and structure forces from loads already built
/// for `weather`.
pub(super) fn span_results(
    weather: &Weather,
    loads: LinearLoads,
    tension: Force,
) -> CatenaryResult<SpanResults> {
    let span = weather.span_length().get::<meter>();
    let elevation = weather.elevation().get::<meter>();
    let c = tension.get::<newton>() / loads.resultant().value;

    let low_point_x = catenary::low_point_x(span, elevation, c)?;
    let sag_point_x = catenary::sag_point_x(low_point_x, c, elevation, span);

    let blown = BlownSpan::new(&loads, weather.span_length(), weather.elevation());
    let structure = StructureForces::new(&blown, &loads, tension)?;

    Ok(SpanResults {
        tension,
        loads,
        catenary_constant: Length::new::<meter>(c),
        low_point_x: Length::new::<meter>(low_point_x),
        low_point_y: Length::new::<meter>(catenary::low_point_y(c, low_point_x)),
        sag_point_x: Length::new::<meter>(sag_point_x),
        sag: Length::new::<meter>(catenary::sag(c, span, elevation)?),
        arc_length: Length::new::<meter>(catenary::arc_length(span, elevation, c)?),
        blown,
        structure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::structural::span::core::{
        NewtonConfig,
        elastic::final_tension,
        test_support::{TestCreep, TestMaterial, drake, weather, weightless},
    };

    #[test]
    fn iced_level_span_sag_is_nearly_parabolic() {
        let case = weather(15.0, 300.0, 0.0, 12.7, 0.0);
        let wire = drake();
        let solved = final_tension(
            &case,
            &wire,
            &TestMaterial::new(),
            &TestCreep(0.0),
            &NewtonConfig::default(),
        )
        .unwrap();

        let results = analyze(&case, &wire, solved.tension).unwrap();

        let w = results.loads.resultant().value;
        let h = solved.tension.get::<newton>();
        let parabolic = w * 300.0 * 300.0 / (8.0 * h);

        let sag = results.sag.get::<meter>();
        assert_relative_eq!(sag, 7.611_732_183_663_719, max_relative = 1e-6);
        assert_relative_eq!(sag, parabolic, max_relative = 0.02);
    }

    #[test]
    fn level_span_geometry_is_symmetric() {
        let case = weather(15.0, 300.0, 0.0, 0.0, 0.0);
        let results = analyze(&case, &drake(), Force::new::<newton>(25_000.0)).unwrap();

        assert_relative_eq!(results.low_point_x.get::<meter>(), 150.0);
        assert_relative_eq!(results.sag_point_x.get::<meter>(), 150.0);
        assert_relative_eq!(
            results.low_point_y.get::<meter>(),
            -results.sag.get::<meter>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.catenary_constant.get::<meter>(),
            25_000.0 / 15.97,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.structure.wire_vertical.get::<newton>(),
            results.arc_length.get::<meter>() * 15.97 / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn inclined_span_in_wind() {
        let case = weather(-10.0, 300.0, 30.0, 12.7, 400.0);
        let results = analyze(&case, &drake(), Force::new::<newton>(50_000.0)).unwrap();

        let xd = results.sag_point_x.get::<meter>();
        assert!(xd > results.low_point_x.get::<meter>());
        assert!(xd > 0.0 && xd < 300.0);
        assert!(results.arc_length.get::<meter>() > 300.0_f64.hypot(30.0));
        assert_relative_eq!(
            results.structure.longitudinal.get::<newton>(),
            49_918.079_326_200_896,
            max_relative = 1e-12
        );
    }

    #[test]
    fn loads_follow_the_weather_case() {
        let wire = drake();
        let windy = weather(-10.0, 300.0, 30.0, 12.7, 400.0);
        let calm = weather(-10.0, 300.0, 30.0, 0.0, 0.0);
        let tension = Force::new::<newton>(50_000.0);

        let results = analyze(&windy, &wire, tension).unwrap();
        assert_eq!(results.loads, LinearLoads::new(&windy, &wire).unwrap());
        assert_ne!(results.loads, LinearLoads::new(&calm, &wire).unwrap());

        let calm_results = analyze(&calm, &wire, tension).unwrap();
        assert!(results.blown.vertical_angle > calm_results.blown.vertical_angle);
    }

    #[test]
    fn rejects_degenerate_load() {
        let case = weather(15.0, 300.0, 0.0, 0.0, 0.0);
        let err = analyze(&case, &weightless(), Force::new::<newton>(25_000.0)).unwrap_err();
        assert!(matches!(err, AnalysisError::Load(LoadError::Degenerate { .. })));
    }
}
