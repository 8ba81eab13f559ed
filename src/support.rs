//! Supporting utilities used by models.
//!
//! - [`catenary`]: Closed-form geometry of a wire hanging between two supports.
//! - [`constraint`]: Numeric invariants checked at construction.
//! - [`units`]: Extensions to [`uom`].

pub mod catenary;
pub mod constraint;
pub mod units;
