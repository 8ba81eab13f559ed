//! Structural models.
//!
//! This module contains models for overhead line structures, starting with
//! the sag and tension of a conductor span between two supports.

pub mod span;
