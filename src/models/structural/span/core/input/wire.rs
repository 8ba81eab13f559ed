use crate::support::{
    constraint::{ConstraintResult, NonNegative, StrictlyPositive},
    units::LinearForce,
};
use uom::si::f64::{Area, Length, ThermodynamicTemperature};

use super::StressStrain;

/// Physical description of a conductor.
///
/// Derived material properties (original length, creep strain, thermal
/// coefficient, elastic modulus) are not stored here. They come from a
/// [`ConductorMaterial`](crate::models::structural::span::ConductorMaterial)
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    starting_temperature: ThermodynamicTemperature,
    cross_section: Area,
    diameter: Length,
    linear_weight: LinearForce,
    stress_strain: StressStrain,
}

impl Wire {
    /// Constructs a validated wire.
    ///
    /// `starting_temperature` is the temperature at which the original length
    /// is known. `linear_weight` is the bare wire weight per unit length,
    /// given as a magnitude.
    ///
    /// # Errors
    ///
    /// Returns an error if the cross-section or diameter is not strictly
    /// positive, or if the linear weight is negative.
    pub fn new(
        starting_temperature: ThermodynamicTemperature,
        cross_section: Area,
        diameter: Length,
        linear_weight: LinearForce,
        stress_strain: StressStrain,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            starting_temperature,
            cross_section: StrictlyPositive::new(cross_section)?.into_inner(),
            diameter: StrictlyPositive::new(diameter)?.into_inner(),
            linear_weight: NonNegative::new(linear_weight)?.into_inner(),
            stress_strain,
        })
    }

    /// Returns the temperature at which the original length is known.
    #[must_use]
    pub fn starting_temperature(&self) -> ThermodynamicTemperature {
        self.starting_temperature
    }

    /// Returns the total load-bearing cross-section.
    #[must_use]
    pub fn cross_section(&self) -> Area {
        self.cross_section
    }

    /// Returns the bare outer diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Returns the bare weight per unit length, as a magnitude.
    #[must_use]
    pub fn linear_weight(&self) -> LinearForce {
        self.linear_weight
    }

    /// Returns the stress-strain curve.
    #[must_use]
    pub fn stress_strain(&self) -> &StressStrain {
        &self.stress_strain
    }
}
