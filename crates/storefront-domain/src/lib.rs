//! Domain types for the storefront persistence schema.
//!
//! This crate contains only pure types with no framework dependencies:
//! record shapes, enumerated status sets, default values, and the
//! field-constraint checks every consuming layer must honor. The SeaORM
//! entities in `storefront-schema` mirror these shapes; API and persistence
//! layers live outside this repository.

pub mod booking;
pub mod constraint;
pub mod money;
pub mod order;
pub mod order_item;
pub mod user;
