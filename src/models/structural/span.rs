//! Single-span conductor sag-tension models.
//!
//! This module provides [`twine_core::Model`] implementations that take a
//! [`Weather`] case and return [`SpanResults`] for a fixed wire.
//! The computational core is in the internal `core` module and is entered
//! through [`SagTension`].
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//!
//! use twine_conductor::{
//!     models::structural::span::{
//!         ConductorMaterial, InitialTension, NewtonConfig, StressStrain, Weather, Wire,
//!     },
//!     support::units::newtons_per_meter,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     area::square_millimeter,
//!     f64::{Area, Length, Pressure, Ratio, TemperatureCoefficient, ThermodynamicTemperature},
//!     force::newton,
//!     length::{meter, millimeter},
//!     pressure::{gigapascal, megapascal, pascal},
//!     ratio::ratio,
//!     temperature_coefficient::per_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! struct Aluminum;
//!
//! impl ConductorMaterial for Aluminum {
//!     type Creep = ();
//!     type Error = Infallible;
//!
//!     fn original_length(&self, _: &Wire, _: &()) -> Result<Length, Infallible> {
//!         Ok(Length::new::<meter>(300.1))
//!     }
//!     fn creep_strain(&self, _: &(), _: &Wire) -> Result<Ratio, Infallible> {
//!         Ok(Ratio::new::<ratio>(0.0))
//!     }
//!     fn thermal_coefficient(&self, _: &Wire) -> Result<TemperatureCoefficient, Infallible> {
//!         Ok(TemperatureCoefficient::new::<per_kelvin>(2.3e-5))
//!     }
//!     fn elasticity(&self, _: &Wire) -> Result<Pressure, Infallible> {
//!         Ok(Pressure::new::<gigapascal>(69.0))
//!     }
//! }
//!
//! let mpa = |k: [f64; 5]| k.map(Pressure::new::<megapascal>);
//! let wire = Wire::new(
//!     ThermodynamicTemperature::new::<degree_celsius>(15.0),
//!     Area::new::<square_millimeter>(468.6),
//!     Length::new::<millimeter>(28.14),
//!     newtons_per_meter(15.97),
//!     StressStrain::new(mpa([-8.8, 571.8, -69.0, -574.6, 403.8]), mpa([0.0; 5])),
//! )
//! .unwrap();
//!
//! let model = InitialTension::new(wire, Aluminum, (), NewtonConfig::default());
//!
//! let weather = Weather::new(
//!     ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!     Length::new::<meter>(300.0),
//!     Length::new::<meter>(0.0),
//!     Length::new::<meter>(0.0),
//!     Pressure::new::<pascal>(0.0),
//! )
//! .unwrap();
//!
//! let results = model.call(&weather).unwrap();
//! assert!(results.tension.get::<newton>() > 0.0);
//! assert!(results.sag.get::<meter>() > 0.0);
//! ```

pub(crate) mod core;

pub use self::core::{
    AnalysisError, BlownSpan, ConductorMaterial, Divergence, GRAVITY, GivenSagConfig,
    GivenSagError, ICE_DENSITY, LinearLoads, LoadError, NewtonConfig, SagTension, SolvedTension,
    SpanResults, StressStrain, StressStrainError, StructureForces, TensionError, TensionSolver,
    Weather, Wire, final_linear_force, weight_linear_force, wind_linear_force,
};

use crate::support::constraint::{Constrained, StrictlyPositive};
use twine_core::Model;
use uom::si::f64::{Force, Length};

/// Evaluates a solved tension, attributing input errors to `solver`.
fn span_results(
    solver: TensionSolver,
    weather: &Weather,
    wire: &Wire,
    tension: Force,
) -> Result<SpanResults, TensionError> {
    SagTension::analyze(weather, wire, tension).map_err(|err| match err {
        AnalysisError::Load(source) => TensionError::Load { solver, source },
        AnalysisError::Geometry(source) => TensionError::Geometry { solver, source },
    })
}

/// Stringing tension for a fixed wire, from the initial stress-strain curve.
pub struct InitialTension<M: ConductorMaterial> {
    wire: Wire,
    material: M,
    creep: M::Creep,
    config: NewtonConfig,
}

impl<M: ConductorMaterial> InitialTension<M> {
    /// Creates the model for a wire with its material and creep state.
    #[must_use]
    pub fn new(wire: Wire, material: M, creep: M::Creep, config: NewtonConfig) -> Self {
        Self {
            wire,
            material,
            creep,
            config,
        }
    }
}

impl<M: ConductorMaterial> Model for InitialTension<M> {
    type Input = Weather;
    type Output = SpanResults;
    type Error = TensionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let solved = SagTension::initial_tension(
            input,
            &self.wire,
            &self.material,
            &self.creep,
            &self.config,
        )?;
        span_results(TensionSolver::Initial, input, &self.wire, solved.tension)
    }
}

/// Post-creep tension for a fixed wire, from a linear-elastic model.
pub struct FinalTension<M: ConductorMaterial> {
    wire: Wire,
    material: M,
    creep: M::Creep,
    config: NewtonConfig,
}

impl<M: ConductorMaterial> FinalTension<M> {
    /// Creates the model for a wire with its material and creep state.
    #[must_use]
    pub fn new(wire: Wire, material: M, creep: M::Creep, config: NewtonConfig) -> Self {
        Self {
            wire,
            material,
            creep,
            config,
        }
    }
}

impl<M: ConductorMaterial> Model for FinalTension<M> {
    type Input = Weather;
    type Output = SpanResults;
    type Error = TensionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let solved = SagTension::final_tension(
            input,
            &self.wire,
            &self.material,
            &self.creep,
            &self.config,
        )?;
        span_results(TensionSolver::Final, input, &self.wire, solved.tension)
    }
}

/// Tension that holds a fixed wire at a target sag.
pub struct TensionGivenSag {
    wire: Wire,
    target_sag: Constrained<Length, StrictlyPositive>,
    config: GivenSagConfig,
}

impl TensionGivenSag {
    /// Creates the model for a wire and the sag it should hang at.
    #[must_use]
    pub fn new(
        wire: Wire,
        target_sag: Constrained<Length, StrictlyPositive>,
        config: GivenSagConfig,
    ) -> Self {
        Self {
            wire,
            target_sag,
            config,
        }
    }
}

impl Model for TensionGivenSag {
    type Input = Weather;
    type Output = SpanResults;
    type Error = GivenSagError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        SagTension::given_sag(input, &self.wire, self.target_sag, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{force::newton, length::meter};

    use super::core::test_support::{TestCreep, TestMaterial, drake, weather, weightless};

    #[test]
    fn initial_model_reports_span_results() {
        let model = InitialTension::new(
            drake(),
            TestMaterial::new(),
            TestCreep(0.0),
            NewtonConfig::default(),
        );
        let results = model.call(&weather(15.0, 300.0, 0.0, 0.0, 0.0)).unwrap();

        assert_relative_eq!(
            results.tension.get::<newton>(),
            25_515.690_586_874_196,
            max_relative = 1e-6
        );
        assert_relative_eq!(results.low_point_x.get::<meter>(), 150.0);
        assert!(results.sag.get::<meter>() > 0.0);
    }

    #[test]
    fn final_model_reports_span_results() {
        let model = FinalTension::new(
            drake(),
            TestMaterial::new(),
            TestCreep(0.0),
            NewtonConfig::default(),
        );
        let results = model.call(&weather(15.0, 300.0, 0.0, 12.7, 0.0)).unwrap();

        assert_relative_eq!(
            results.tension.get::<newton>(),
            45_294.437_568_242_67,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            results.sag.get::<meter>(),
            7.611_732_183_663_719,
            max_relative = 1e-6
        );
    }

    #[test]
    fn given_sag_inverts_final_model() {
        let case = weather(-10.0, 300.0, 30.0, 12.7, 400.0);
        let solved = FinalTension::new(
            drake(),
            TestMaterial::new(),
            TestCreep(5.0e-4),
            NewtonConfig::default(),
        )
        .call(&case)
        .unwrap();

        let model = TensionGivenSag::new(
            drake(),
            StrictlyPositive::new(solved.sag).unwrap(),
            GivenSagConfig::default(),
        );
        let results = model.call(&case).unwrap();

        assert_relative_eq!(
            results.tension.get::<newton>(),
            solved.tension.get::<newton>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn analysis_errors_name_the_solver() {
        let case = weather(15.0, 300.0, 0.0, 0.0, 0.0);
        let tension = Force::new::<newton>(25_000.0);

        let err = span_results(TensionSolver::Final, &case, &weightless(), tension).unwrap_err();
        assert!(matches!(
            err,
            TensionError::Load {
                solver: TensionSolver::Final,
                source: LoadError::Degenerate { .. },
            }
        ));

        let results = span_results(TensionSolver::Initial, &case, &drake(), tension).unwrap();
        assert_eq!(results.loads, LinearLoads::new(&case, &drake()).unwrap());
    }

    #[test]
    fn weather_cases_are_independent() {
        let model = FinalTension::new(
            drake(),
            TestMaterial::new(),
            TestCreep(0.0),
            NewtonConfig::default(),
        );
        let cases = [
            weather(15.0, 300.0, 0.0, 0.0, 0.0),
            weather(15.0, 300.0, 0.0, 12.7, 0.0),
            weather(-10.0, 300.0, 30.0, 12.7, 400.0),
        ];

        let sequential: Vec<_> = cases.iter().map(|case| model.call(case).unwrap()).collect();
        let threaded: Vec<_> = std::thread::scope(|scope| {
            let model = &model;
            let handles: Vec<_> = cases
                .iter()
                .map(|case| scope.spawn(move || model.call(case).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, threaded);
    }
}
