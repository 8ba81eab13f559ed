//! Problem formulation for tension-given-sag solving.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

use crate::support::catenary::{self, CatenaryError};

/// Sag of a span at one trial tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SagPoint {
    pub(super) tension: Force,
    pub(super) sag: Length,
}

/// Model adapter exposing sag as a function of horizontal tension.
pub(super) struct SagModel {
    span_length: f64,
    elevation: f64,
    load: f64,
}

impl SagModel {
    /// Creates a model for a span in meters under a resultant load in N/m.
    pub(super) fn new(span_length: f64, elevation: f64, load: f64) -> Self {
        Self {
            span_length,
            elevation,
            load,
        }
    }
}

impl Model for SagModel {
    type Input = Force;
    type Output = SagPoint;
    type Error = CatenaryError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let c = input.get::<newton>() / self.load;
        let sag = catenary::sag(c, self.span_length, self.elevation)?;
        Ok(SagPoint {
            tension: *input,
            sag: Length::new::<meter>(sag),
        })
    }
}

/// Equation problem definition for sag matching.
///
/// Computes the residual as `achieved_sag - target_sag`, which falls as
/// tension rises.
pub(super) struct SagProblem {
    target: Length,
}

impl SagProblem {
    pub(super) fn new(target: Length) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for SagProblem {
    type Input = Force;
    type Output = SagPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Force::new::<newton>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.sag - self.target).get::<meter>()])
    }
}
