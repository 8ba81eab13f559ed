//! Transverse loads per unit length from wire weight, ice, and wind.

use std::f64::consts::PI;

use crate::support::units::{LinearForce, newtons_per_meter};
use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    angle::radian,
    f64::{Acceleration, Angle, MassDensity},
    mass_density::kilogram_per_cubic_meter,
};

use super::{Weather, Wire};

/// Density of glaze ice, kg/m³.
pub const ICE_DENSITY: f64 = 916.8;

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.806_65;

/// Errors from combining transverse loads.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LoadError {
    /// The combined load is zero or not finite, so no catenary exists.
    #[error("degenerate transverse load: wind={wind:?}, weight={weight:?}")]
    Degenerate {
        /// Wind load per unit length.
        wind: LinearForce,

        /// Weight per unit length (negative is downward).
        weight: LinearForce,
    },
}

/// Per-unit-length loads on a wire for one weather case.
///
/// The resultant is strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearLoads {
    weight: LinearForce,
    wind: LinearForce,
    resultant: LinearForce,
}

impl LinearLoads {
    /// Combines weight, ice, and wind for a weather case.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Degenerate`] when the resultant load is zero or
    /// not finite.
    pub fn new(weather: &Weather, wire: &Wire) -> Result<Self, LoadError> {
        let weight = weight_linear_force(weather, wire);
        let wind = wind_linear_force(weather, wire);

        let resultant = wind.value.hypot(weight.value);
        if !(resultant > 0.0 && resultant.is_finite()) {
            return Err(LoadError::Degenerate { wind, weight });
        }

        Ok(Self {
            weight,
            wind,
            resultant: newtons_per_meter(resultant),
        })
    }

    /// Returns the weight of wire and ice, negative (downward).
    #[must_use]
    pub fn weight(&self) -> LinearForce {
        self.weight
    }

    /// Returns the wind load on the iced diameter.
    #[must_use]
    pub fn wind(&self) -> LinearForce {
        self.wind
    }

    /// Returns the magnitude of the combined wind and weight load.
    ///
    /// This is the load that shapes the catenary.
    #[must_use]
    pub fn resultant(&self) -> LinearForce {
        self.resultant
    }

    /// Returns the angle between the loaded wire plane and vertical.
    ///
    /// Zero without wind.
    #[must_use]
    pub fn blown_vertical_angle(&self) -> Angle {
        // Rounding can push the ratio a hair past one.
        let cos = (-self.weight.value / self.resultant.value).min(1.0);
        Angle::new::<radian>(cos.acos())
    }
}

/// Returns the downward weight per unit length of wire and ice, as a negative value.
///
/// Ice is a cylindrical shell of [`ICE_DENSITY`] around the bare diameter.
#[must_use]
pub fn weight_linear_force(weather: &Weather, wire: &Wire) -> LinearForce {
    let bare = wire.diameter() / 2.0;
    let iced = bare + weather.ice_radius();

    let ice_density = MassDensity::new::<kilogram_per_cubic_meter>(ICE_DENSITY);
    let gravity = Acceleration::new::<meter_per_second_squared>(GRAVITY);
    let ice: LinearForce = (iced * iced - bare * bare) * PI * ice_density * gravity;

    -(ice + wire.linear_weight())
}

/// Returns the wind load per unit length on the iced diameter.
///
/// Wind is taken perpendicular to the span.
#[must_use]
pub fn wind_linear_force(weather: &Weather, wire: &Wire) -> LinearForce {
    (wire.diameter() + weather.ice_radius() * 2.0) * weather.wind_pressure()
}

/// Returns the resultant transverse load per unit length, `√(wind² + weight²)`.
///
/// # Errors
///
/// Returns [`LoadError::Degenerate`] when the resultant is zero or not finite.
pub fn final_linear_force(weather: &Weather, wire: &Wire) -> Result<LinearForce, LoadError> {
    LinearLoads::new(weather, wire).map(|loads| loads.resultant())
}
