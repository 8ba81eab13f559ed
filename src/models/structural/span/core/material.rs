//! Material collaborator contract for tension solves.

use crate::support::units::TemperatureDifference;
use uom::si::{
    f64::{Length, Pressure, Ratio, TemperatureCoefficient},
    temperature_coefficient::per_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use super::{TensionError, Weather, Wire};

/// Derived material properties of a conductor.
///
/// Creep and material modeling live outside this crate. Implementations
/// supply the four quantities the tension solvers consume, and should be
/// deterministic and free of side effects.
///
/// The creep state is opaque here and only ever passed back to the
/// implementation.
pub trait ConductorMaterial {
    /// Creep state consumed by [`original_length`](Self::original_length)
    /// and [`creep_strain`](Self::creep_strain).
    type Creep;

    /// Error produced when a property cannot be evaluated.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the unstretched wire length at the wire's starting temperature.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the length cannot be determined.
    fn original_length(&self, wire: &Wire, creep: &Self::Creep) -> Result<Length, Self::Error>;

    /// Returns the permanent creep strain.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the strain cannot be determined.
    fn creep_strain(&self, creep: &Self::Creep, wire: &Wire) -> Result<Ratio, Self::Error>;

    /// Returns the linear thermal expansion coefficient.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the coefficient cannot be determined.
    fn thermal_coefficient(&self, wire: &Wire) -> Result<TemperatureCoefficient, Self::Error>;

    /// Returns the final (linear-elastic) modulus.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the modulus cannot be determined.
    fn elasticity(&self, wire: &Wire) -> Result<Pressure, Self::Error>;
}

/// Expands a length measured at the wire's starting temperature to the
/// weather temperature, in meters.
pub(super) fn at_weather_temperature<M: ConductorMaterial>(
    material: &M,
    wire: &Wire,
    weather: &Weather,
    length: f64,
) -> Result<f64, TensionError> {
    let alpha = material
        .thermal_coefficient(wire)
        .map_err(|err| TensionError::material_failed("thermal coefficient", err))?
        .get::<per_kelvin>();
    let delta_t = weather
        .temperature()
        .minus(wire.starting_temperature())
        .get::<delta_kelvin>();

    Ok(length + alpha * length * delta_t)
}
