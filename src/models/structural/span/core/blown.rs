//! Wind-blown span geometry and support forces in structure axes.
//!
//! Wind swings the wire out of the vertical plane through its supports.
//! The catenary then hangs in a tilted plane, where the span looks longer
//! and the elevation difference looks smaller.

use crate::support::catenary::{self, CatenaryResult};
use uom::si::{
    angle::radian,
    f64::{Angle, Force, Length},
    force::newton,
    length::meter,
};

use super::LinearLoads;

/// Span geometry as seen in the wind-deflected plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlownSpan {
    /// Tilt of the loaded plane away from vertical.
    pub vertical_angle: Angle,

    /// Horizontal deflection from the combined elevation and tilt.
    pub horizontal_angle: Angle,

    /// Span length in the deflected plane.
    pub span_length: Length,

    /// Elevation difference in the deflected plane.
    pub elevation: Length,
}

impl BlownSpan {
    /// Projects a span into the plane its loads tilt it into.
    ///
    /// Without wind the blown span equals the unblown one.
    #[must_use]
    pub fn new(loads: &LinearLoads, span_length: Length, elevation: Length) -> Self {
        let vertical_angle = loads.blown_vertical_angle();
        let (sin_v, cos_v) = vertical_angle.get::<radian>().sin_cos();

        let horizontal_angle = Angle::new::<radian>(
            (-elevation.get::<meter>() * sin_v / span_length.get::<meter>()).atan(),
        );

        Self {
            vertical_angle,
            horizontal_angle,
            span_length: span_length / horizontal_angle.get::<radian>().cos(),
            elevation: elevation * cos_v,
        }
    }
}

/// Support forces from the near end of a blown span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureForces {
    /// Vertical force in the blown plane.
    pub wire_vertical: Force,

    /// Force along the structure's vertical axis.
    pub vertical: Force,

    /// Force along the original span axis.
    pub longitudinal: Force,

    /// Force perpendicular to the span, from wind.
    pub tangential: Force,
}

impl StructureForces {
    /// Resolves the blown-frame tension into structure axes.
    ///
    /// The blown-frame vertical force comes from
    /// [`catenary::vertical_force`].
    ///
    /// # Errors
    ///
    /// Returns a [`catenary::CatenaryError`] if the blown span cannot carry a
    /// catenary at this tension.
    pub fn new(blown: &BlownSpan, loads: &LinearLoads, tension: Force) -> CatenaryResult<Self> {
        let h = tension.get::<newton>();
        let v = catenary::vertical_force(
            blown.span_length.get::<meter>(),
            blown.elevation.get::<meter>(),
            h / loads.resultant().value,
            h,
        )?;

        let (sin_v, cos_v) = blown.vertical_angle.get::<radian>().sin_cos();
        let (sin_h, cos_h) = blown.horizontal_angle.get::<radian>().sin_cos();

        Ok(Self {
            wire_vertical: Force::new::<newton>(v),
            vertical: Force::new::<newton>(-(v * cos_v + h * sin_h * sin_v)),
            longitudinal: Force::new::<newton>(h * cos_h),
            tangential: Force::new::<newton>(v * sin_v - h * sin_h * cos_v),
        })
    }
}
