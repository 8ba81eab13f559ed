use std::convert::Infallible;

use crate::support::units::newtons_per_meter;
use thiserror::Error;
use uom::si::{
    area::square_millimeter,
    f64::{Area, Length, Pressure, Ratio, TemperatureCoefficient, ThermodynamicTemperature},
    length::{meter, millimeter},
    pressure::{gigapascal, pascal, pound_force_per_square_inch},
    ratio::ratio,
    temperature_coefficient::per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{ConductorMaterial, StressStrain, Weather, Wire};

/// Creep strain handed to [`TestMaterial`], as a plain ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TestCreep(pub(crate) f64);

/// Constant-property material: 300.1 m of wire, 2e-5 /K, 70 GPa.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestMaterial {
    original_length: Length,
    alpha: TemperatureCoefficient,
    modulus: Pressure,
}

impl TestMaterial {
    pub(crate) fn new() -> Self {
        Self::with_original_length(300.1)
    }

    pub(crate) fn with_original_length(meters: f64) -> Self {
        Self {
            original_length: Length::new::<meter>(meters),
            alpha: TemperatureCoefficient::new::<per_kelvin>(2.0e-5),
            modulus: Pressure::new::<gigapascal>(70.0),
        }
    }
}

impl ConductorMaterial for TestMaterial {
    type Creep = TestCreep;
    type Error = Infallible;

    fn original_length(&self, _wire: &Wire, _creep: &TestCreep) -> Result<Length, Infallible> {
        Ok(self.original_length)
    }

    fn creep_strain(&self, creep: &TestCreep, _wire: &Wire) -> Result<Ratio, Infallible> {
        Ok(Ratio::new::<ratio>(creep.0))
    }

    fn thermal_coefficient(&self, _wire: &Wire) -> Result<TemperatureCoefficient, Infallible> {
        Ok(self.alpha)
    }

    fn elasticity(&self, _wire: &Wire) -> Result<Pressure, Infallible> {
        Ok(self.modulus)
    }
}

#[derive(Debug, Error)]
#[error("no modulus on file")]
pub(crate) struct MissingModulus;

/// Material whose elastic modulus is unavailable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingMaterial;

impl ConductorMaterial for FailingMaterial {
    type Creep = TestCreep;
    type Error = MissingModulus;

    fn original_length(&self, _wire: &Wire, _creep: &TestCreep) -> Result<Length, MissingModulus> {
        Ok(Length::new::<meter>(300.1))
    }

    fn creep_strain(&self, creep: &TestCreep, _wire: &Wire) -> Result<Ratio, MissingModulus> {
        Ok(Ratio::new::<ratio>(creep.0))
    }

    fn thermal_coefficient(&self, _wire: &Wire) -> Result<TemperatureCoefficient, MissingModulus> {
        Ok(TemperatureCoefficient::new::<per_kelvin>(2.0e-5))
    }

    fn elasticity(&self, _wire: &Wire) -> Result<Pressure, MissingModulus> {
        Err(MissingModulus)
    }
}

/// Drake-like 26/7 ACSR conductor strung at 15 °C.
pub(crate) fn drake() -> Wire {
    wire_weighing(15.97)
}

/// A wire with no weight of its own.
pub(crate) fn weightless() -> Wire {
    wire_weighing(0.0)
}

fn wire_weighing(newtons_per_meter_of_wire: f64) -> Wire {
    let psi = |k: [f64; 5]| k.map(Pressure::new::<pound_force_per_square_inch>);
    let curve = StressStrain::new(
        psi([-1213.0, 44_308.1, -14_004.4, -37_618.0, 30_676.0]),
        psi([-69.3, 38_629.0, 3_998.1, -45_713.0, 27_892.0]),
    );

    Wire::new(
        ThermodynamicTemperature::new::<degree_celsius>(15.0),
        Area::new::<square_millimeter>(468.6),
        Length::new::<millimeter>(28.14),
        newtons_per_meter(newtons_per_meter_of_wire),
        curve,
    )
    .unwrap()
}

/// Builds a weather case: temperature in °C, span and elevation in meters,
/// ice radius in millimeters, and wind pressure in pascals.
pub(crate) fn weather(
    temperature: f64,
    span_length: f64,
    elevation: f64,
    ice_radius: f64,
    wind_pressure: f64,
) -> Weather {
    Weather::new(
        ThermodynamicTemperature::new::<degree_celsius>(temperature),
        Length::new::<meter>(span_length),
        Length::new::<meter>(elevation),
        Length::new::<millimeter>(ice_radius),
        Pressure::new::<pascal>(wind_pressure),
    )
    .unwrap()
}
