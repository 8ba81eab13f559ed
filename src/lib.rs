//! # Twine Conductor
//!
//! Sag-tension models for overhead conductors, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A conductor strung between two supports hangs as a catenary. Given a
//! weather case (temperature, ice, wind) and a wire, this crate finds the
//! horizontal tension in the wire, the sag it produces, and the forces the
//! wire puts on its supports.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful outside that model. The closed-form
//! catenary geometry lives in [`support::catenary`] for that reason.
//!
//! ## Logging
//!
//! Solvers emit [`tracing`] events at `debug` and `trace` levels.
//! No subscriber is installed by this crate.

pub mod models;
pub mod support;
