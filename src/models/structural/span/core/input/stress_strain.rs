use thiserror::Error;
use uom::si::{f64::Pressure, pressure::pascal};

/// Number of coefficients in a stress-strain polynomial (degree 0 through 4).
const TERMS: usize = 5;

/// Stress-strain curve of a two-material conductor.
///
/// Each material contributes a degree-4 polynomial in percent strain whose
/// coefficients are stresses on the total load-bearing cross-section.
/// The conductor curve is the term-by-term sum of the outer (e.g., aluminum)
/// and core (e.g., steel) polynomials, computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressStrain {
    outer: [Pressure; TERMS],
    core: [Pressure; TERMS],
    combined: [f64; TERMS],
}

/// Errors from building a [`StressStrain`] curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StressStrainError {
    /// A coefficient sequence did not have exactly five terms.
    #[error("{layer} stress-strain curve needs exactly 5 coefficients, got {count}")]
    CoefficientCount {
        /// Which material layer was malformed (`"outer"` or `"core"`).
        layer: &'static str,

        /// Number of coefficients supplied.
        count: usize,
    },
}

impl StressStrain {
    /// Creates a curve from outer and core coefficients, lowest degree first.
    #[must_use]
    pub fn new(outer: [Pressure; TERMS], core: [Pressure; TERMS]) -> Self {
        let combined =
            std::array::from_fn(|k| outer[k].get::<pascal>() + core[k].get::<pascal>());
        Self {
            outer,
            core,
            combined,
        }
    }

    /// Creates a curve from coefficient slices, lowest degree first.
    ///
    /// # Errors
    ///
    /// Returns [`StressStrainError::CoefficientCount`] unless both slices hold
    /// exactly five coefficients.
    pub fn from_slices(outer: &[Pressure], core: &[Pressure]) -> Result<Self, StressStrainError> {
        let terms = |layer, coefficients: &[Pressure]| {
            <[Pressure; TERMS]>::try_from(coefficients).map_err(|_| {
                StressStrainError::CoefficientCount {
                    layer,
                    count: coefficients.len(),
                }
            })
        };
        Ok(Self::new(terms("outer", outer)?, terms("core", core)?))
    }

    /// Returns the outer material coefficients.
    #[must_use]
    pub fn outer(&self) -> &[Pressure; TERMS] {
        &self.outer
    }

    /// Returns the core material coefficients.
    #[must_use]
    pub fn core(&self) -> &[Pressure; TERMS] {
        &self.core
    }

    /// Returns the summed outer and core coefficients.
    #[must_use]
    pub fn combined(&self) -> [Pressure; TERMS] {
        self.combined.map(Pressure::new::<pascal>)
    }

    /// Evaluates the stress at a strain given in percent.
    #[must_use]
    pub fn stress(&self, strain_percent: f64) -> Pressure {
        let [k0, k1, k2, k3, k4] = self.combined;
        let e = strain_percent;
        Pressure::new::<pascal>(k0 + e * (k1 + e * (k2 + e * (k3 + e * k4))))
    }

    /// Evaluates `d(stress)/d(strain)` at a strain given in percent.
    ///
    /// The slope is per percent strain.
    #[must_use]
    pub fn slope(&self, strain_percent: f64) -> Pressure {
        let [_, k1, k2, k3, k4] = self.combined;
        let e = strain_percent;
        Pressure::new::<pascal>(k1 + e * (2.0 * k2 + e * (3.0 * k3 + e * 4.0 * k4)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::megapascal;

    fn mpa(values: [f64; TERMS]) -> [Pressure; TERMS] {
        values.map(Pressure::new::<megapascal>)
    }

    #[test]
    fn sums_outer_and_core_terms() {
        let curve = StressStrain::new(
            mpa([-8.0, 300.0, -100.0, -260.0, 210.0]),
            mpa([-0.5, 266.0, 27.0, -315.0, 192.0]),
        );

        let combined = curve.combined().map(|k| k.get::<megapascal>());
        let expected = [-8.5, 566.0, -73.0, -575.0, 402.0];
        for (k, e) in combined.iter().zip(expected) {
            assert_relative_eq!(*k, e, max_relative = 1e-12);
        }
    }

    #[test]
    fn evaluates_polynomial_and_slope() {
        let curve = StressStrain::new(
            mpa([1.0, 2.0, 3.0, 4.0, 5.0]),
            mpa([0.0; TERMS]),
        );

        // 1 + 2e + 3e² + 4e³ + 5e⁴ at e = 0.5
        assert_relative_eq!(curve.stress(0.5).get::<megapascal>(), 3.5625, max_relative = 1e-12);

        // 2 + 6e + 12e² + 20e³ at e = 0.5
        assert_relative_eq!(curve.slope(0.5).get::<megapascal>(), 10.5, max_relative = 1e-12);
    }

    #[test]
    fn slope_matches_finite_difference() {
        let curve = StressStrain::new(
            mpa([-8.0, 300.0, -100.0, -260.0, 210.0]),
            mpa([-0.5, 266.0, 27.0, -315.0, 192.0]),
        );

        let (e, h) = (0.12, 1e-6);
        let central = (curve.stress(e + h) - curve.stress(e - h)).get::<megapascal>() / (2.0 * h);
        assert_relative_eq!(curve.slope(e).get::<megapascal>(), central, max_relative = 1e-6);
    }

    #[test]
    fn slices_need_five_terms() {
        let five = mpa([1.0; TERMS]);
        assert!(StressStrain::from_slices(&five, &five).is_ok());

        assert_eq!(
            StressStrain::from_slices(&five[..4], &five),
            Err(StressStrainError::CoefficientCount {
                layer: "outer",
                count: 4,
            })
        );

        let six = [Pressure::new::<megapascal>(1.0); 6];
        assert_eq!(
            StressStrain::from_slices(&five, &six),
            Err(StressStrainError::CoefficientCount {
                layer: "core",
                count: 6,
            })
        );
    }
}
