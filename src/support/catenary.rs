//! Closed-form catenary geometry for a wire hanging between two supports.
//!
//! All functions operate on plain `f64` values in any consistent unit system
//! (SI base units throughout this crate).
//!
//! # Coordinates
//!
//! The origin is the near support. `x` runs along the horizontal span toward
//! the far support and `y` points up. The far support sits at
//! `(span_length, elevation)`, so a positive `elevation` means the far
//! support is higher.
//!
//! The shape of the curve is fixed by the catenary constant
//! `c = H / w`, the ratio of horizontal tension to transverse load per unit
//! length. It must be strictly positive.
//!
//! # Example
//!
//! ```
//! use twine_conductor::support::catenary;
//!
//! let (span_length, elevation, c) = (300.0, 0.0, 1500.0);
//!
//! let sag = catenary::sag(c, span_length, elevation).unwrap();
//! let symmetric = c * ((span_length / (2.0 * c)).cosh() - 1.0);
//! assert!((sag - symmetric).abs() < 1e-9);
//!
//! let length = catenary::arc_length(span_length, elevation, c).unwrap();
//! assert!(length > span_length);
//! ```

use thiserror::Error;

/// Errors from evaluating catenary geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CatenaryError {
    /// The span length is not strictly positive, or a dimension is not finite.
    #[error("invalid span: span_length={span_length}, elevation={elevation}")]
    InvalidSpan {
        /// Horizontal distance between supports.
        span_length: f64,

        /// Height of the far support above the near support.
        elevation: f64,
    },

    /// The catenary constant cannot describe a hanging wire.
    ///
    /// This covers non-positive and non-finite constants, and constants so
    /// large relative to the span that `exp(span_length / c)` rounds to one.
    #[error("degenerate catenary constant: {catenary_constant}")]
    DegenerateConstant {
        /// The rejected catenary constant.
        catenary_constant: f64,
    },

    /// A hyperbolic term overflowed.
    #[error(
        "catenary geometry is not finite: \
         span_length={span_length}, catenary_constant={catenary_constant}"
    )]
    NonFinite {
        /// Horizontal distance between supports.
        span_length: f64,

        /// Catenary constant that produced the overflow.
        catenary_constant: f64,
    },
}

/// A result type alias for catenary geometry.
pub type CatenaryResult<T> = Result<T, CatenaryError>;

/// Checks that a span can carry a catenary.
///
/// # Errors
///
/// Returns [`CatenaryError::InvalidSpan`] if the span length is not strictly
/// positive or either dimension is not finite.
pub fn check_span(span_length: f64, elevation: f64) -> CatenaryResult<()> {
    if span_length > 0.0 && span_length.is_finite() && elevation.is_finite() {
        Ok(())
    } else {
        Err(CatenaryError::InvalidSpan {
            span_length,
            elevation,
        })
    }
}

/// Returns the `x` coordinate of the catenary low point.
///
/// The two-support equation is solved in closed form through the substitution
/// `z = elevation·√e / (c·(1 − e))` with `e = exp(span_length / c)`, giving
/// `Xc = span_length / 2 + c·asinh(z)`.
/// The same `z` is evaluated here as `−elevation / (2c·sinh(span_length / 2c))`,
/// which does not overflow for long spans.
///
/// The result is negative when the low point falls behind the near support
/// (uplift at that support).
///
/// # Errors
///
/// Returns a [`CatenaryError`] for an invalid span, a degenerate catenary
/// constant, or overflowing hyperbolic terms.
pub fn low_point_x(
    span_length: f64,
    elevation: f64,
    catenary_constant: f64,
) -> CatenaryResult<f64> {
    check_span(span_length, elevation)?;
    let chord = half_span_chord(span_length, catenary_constant)?;

    let z = -elevation / chord;
    let xc = span_length / 2.0 + catenary_constant * z.asinh();

    finite(xc, span_length, catenary_constant)
}

/// Returns the `y` coordinate of the catenary low point, `−c·(cosh(−Xc/c) − 1)`.
///
/// The value is never positive.
#[must_use]
pub fn low_point_y(catenary_constant: f64, low_point_x: f64) -> f64 {
    -catenary_constant * ((-low_point_x / catenary_constant).cosh() - 1.0)
}

/// Returns the `x` coordinate of the sag point.
///
/// The sag point is where the wire slope matches the chord slope, so it is
/// the point of maximum vertical separation from the chord.
/// It coincides with the low point only on level spans.
#[must_use]
pub fn sag_point_x(
    low_point_x: f64,
    catenary_constant: f64,
    elevation: f64,
    span_length: f64,
) -> f64 {
    low_point_x + catenary_constant * (elevation / span_length).asinh()
}

/// Returns the suspended wire length between supports.
///
/// The length is the sum of the two hyperbolic-sine half-lengths measured
/// from the low point.
///
/// # Errors
///
/// Returns a [`CatenaryError`] for an invalid span, a degenerate catenary
/// constant, or overflowing hyperbolic terms.
pub fn arc_length(span_length: f64, elevation: f64, catenary_constant: f64) -> CatenaryResult<f64> {
    let xc = low_point_x(span_length, elevation, catenary_constant)?;
    let c = catenary_constant;

    let length = c * (((span_length - xc) / c).sinh() + (xc / c).sinh());

    finite(length, span_length, catenary_constant)
}

/// Returns the derivative of [`arc_length`] with respect to horizontal tension.
///
/// With `c = tension / linear_force`, the arc length satisfies
/// `S² = elevation² + sn²` where `sn = 2c·sinh(span_length / 2c)`.
/// Differentiating gives
///
/// ```text
/// dS/dH = (sn / S) · (2·sinh(u) − 2u·cosh(u)) / w,    u = span_length / 2c
/// ```
///
/// which is always negative: a wire pulled tighter hangs shorter.
///
/// # Errors
///
/// Returns a [`CatenaryError`] for an invalid span, a degenerate catenary
/// constant (including a non-positive tension or load), or overflowing
/// hyperbolic terms.
pub fn arc_length_prime(
    tension: f64,
    span_length: f64,
    linear_force: f64,
    elevation: f64,
) -> CatenaryResult<f64> {
    check_span(span_length, elevation)?;
    let c = tension / linear_force;
    let chord = half_span_chord(span_length, c)?;

    let u = span_length / (2.0 * c);
    let d_chord = 2.0 * u.sinh() - 2.0 * u * u.cosh();
    let length = chord.hypot(elevation);

    finite(chord * d_chord / (length * linear_force), span_length, c)
}

/// Returns the sag: the largest vertical separation between wire and chord.
///
/// The sag is the chord height at the [sag point](sag_point_x) minus the
/// wire height there.
///
/// # Errors
///
/// Returns a [`CatenaryError`] for an invalid span, a degenerate catenary
/// constant, or overflowing hyperbolic terms.
pub fn sag(catenary_constant: f64, span_length: f64, elevation: f64) -> CatenaryResult<f64> {
    let c = catenary_constant;
    let xc = low_point_x(span_length, elevation, c)?;
    let yc = low_point_y(c, xc);
    let xd = sag_point_x(xc, c, elevation, span_length);

    let chord_height = (elevation / span_length) * xd;
    let wire_height = yc + c * (span_length.hypot(elevation) - span_length) / span_length;

    finite(chord_height - wire_height, span_length, c)
}

/// Returns the vertical force the wire exerts at the near support.
///
/// Uses the half-span derivation: with `sn = 2c·sinh(span_length / 2c)` and
/// `s = √(sn² + elevation²)`, the low point sits at
/// `ub = span_length / 2 − c·ln((s + elevation) / sn)` and the vertical force
/// is `tension·sinh(ub / c)`.
///
/// # Errors
///
/// Returns a [`CatenaryError`] for an invalid span, a degenerate catenary
/// constant, or overflowing hyperbolic terms.
pub fn vertical_force(
    span_length: f64,
    elevation: f64,
    catenary_constant: f64,
    tension: f64,
) -> CatenaryResult<f64> {
    check_span(span_length, elevation)?;
    let c = catenary_constant;
    let sn = half_span_chord(span_length, c)?;

    let s = sn.hypot(elevation);
    let ub = span_length / 2.0 - c * ((s + elevation) / sn).ln();

    finite(tension * (ub / c).sinh(), span_length, c)
}

/// Returns the vertical force at the near support from the low point directly,
/// `tension·sinh(Xc / c)`.
///
/// This is an independent route to [`vertical_force`], useful for checking it.
///
/// # Errors
///
/// Returns a [`CatenaryError`] for an invalid span, a degenerate catenary
/// constant, or overflowing hyperbolic terms.
pub fn vertical_force_from_low_point(
    span_length: f64,
    elevation: f64,
    catenary_constant: f64,
    tension: f64,
) -> CatenaryResult<f64> {
    let xc = low_point_x(span_length, elevation, catenary_constant)?;
    finite(
        tension * (xc / catenary_constant).sinh(),
        span_length,
        catenary_constant,
    )
}

/// Validates the catenary constant and returns `2c·sinh(span_length / 2c)`.
fn half_span_chord(span_length: f64, catenary_constant: f64) -> CatenaryResult<f64> {
    let degenerate = !(catenary_constant > 0.0 && catenary_constant.is_finite())
        || (span_length / catenary_constant).exp() == 1.0;
    if degenerate {
        return Err(CatenaryError::DegenerateConstant { catenary_constant });
    }

    let chord = 2.0 * catenary_constant * (span_length / (2.0 * catenary_constant)).sinh();
    finite(chord, span_length, catenary_constant)
}

fn finite(value: f64, span_length: f64, catenary_constant: f64) -> CatenaryResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CatenaryError::NonFinite {
            span_length,
            catenary_constant,
        })
    }
}
