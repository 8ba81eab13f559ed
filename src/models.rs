//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently
//! `structural`). This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** part of the public API; the items a
//! caller needs are re-exported from the model module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the model-specific core API. A single `core` may be exposed through
//! multiple adapters, as the span model does for initial tension, final
//! tension, and tension at a target sag.

pub mod structural;
