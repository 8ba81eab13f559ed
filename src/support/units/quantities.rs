use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length},
        force::newton,
        length::meter,
    },
    typenum::{N2, P1, Z0},
};

/// Force per unit length, N/m in SI.
///
/// The SI base value is available as `.value`.
pub type LinearForce = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`LinearForce`] from a value in newtons per meter.
#[must_use]
pub fn newtons_per_meter(value: f64) -> LinearForce {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}
