//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (lengths, forces, pressures,
//! temperatures). This module fills the gaps [`uom`] leaves for conductor
//! modeling.
//!
//! ## Loads per unit length
//!
//! Wire weight, ice weight, and wind load are all forces per unit length.
//! [`LinearForce`] names that quantity, and [`newtons_per_meter`] builds one:
//!
//! ```
//! use twine_conductor::support::units::{LinearForce, newtons_per_meter};
//! use uom::si::{f64::{Force, Length}, force::newton, length::meter};
//!
//! let weight: LinearForce = newtons_per_meter(15.97);
//! let over_span: Force = weight * Length::new::<meter>(300.0);
//! assert!((over_span.get::<newton>() - 4791.0).abs() < 1e-9);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method for subtracting one absolute temperature from another, as needed
//! when a wire is moved from its stringing temperature to a design temperature.

mod quantities;
mod temperature_difference;

pub use quantities::{LinearForce, newtons_per_meter};
pub use temperature_difference::TemperatureDifference;
