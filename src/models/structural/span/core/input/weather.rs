use crate::support::constraint::{ConstraintResult, NonNegative, StrictlyPositive};
use uom::si::f64::{Length, Pressure, ThermodynamicTemperature};

/// One loading scenario for a single span.
///
/// The span geometry is the final geometry the wire hangs in: the horizontal
/// distance between supports and the height of the far support above the
/// near one.
///
/// Ice is a uniform radial shell around the wire, and wind acts perpendicular
/// to the span on the iced diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    temperature: ThermodynamicTemperature,
    span_length: Length,
    elevation: Length,
    ice_radius: Length,
    wind_pressure: Pressure,
}

impl Weather {
    /// Constructs a validated weather case.
    ///
    /// # Errors
    ///
    /// Returns an error if the span length is not strictly positive, or if the
    /// ice thickness or wind pressure is negative.
    pub fn new(
        temperature: ThermodynamicTemperature,
        span_length: Length,
        elevation: Length,
        ice_radius: Length,
        wind_pressure: Pressure,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            temperature,
            span_length: StrictlyPositive::new(span_length)?.into_inner(),
            elevation,
            ice_radius: NonNegative::new(ice_radius)?.into_inner(),
            wind_pressure: NonNegative::new(wind_pressure)?.into_inner(),
        })
    }

    /// Constructs a weather case without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the span length is strictly positive and that
    /// the ice thickness and wind pressure are non-negative.
    #[must_use]
    pub fn new_unchecked(
        temperature: ThermodynamicTemperature,
        span_length: Length,
        elevation: Length,
        ice_radius: Length,
        wind_pressure: Pressure,
    ) -> Self {
        Self {
            temperature,
            span_length,
            elevation,
            ice_radius,
            wind_pressure,
        }
    }

    /// Returns the wire temperature for this case.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the horizontal distance between supports.
    #[must_use]
    pub fn span_length(&self) -> Length {
        self.span_length
    }

    /// Returns the height of the far support above the near support.
    #[must_use]
    pub fn elevation(&self) -> Length {
        self.elevation
    }

    /// Returns the radial ice thickness.
    #[must_use]
    pub fn ice_radius(&self) -> Length {
        self.ice_radius
    }

    /// Returns the wind pressure.
    #[must_use]
    pub fn wind_pressure(&self) -> Pressure {
        self.wind_pressure
    }
}
