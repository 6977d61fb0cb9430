//! SeaORM entity definitions for the storefront tables.
//!
//! Four tables: `users`, `bookings`, `orders`, `order_items`. Status and
//! type columns are stored as strings whose legal values are the enumerated
//! sets in `storefront-domain`; `ActiveModel::new()` on each entity
//! pre-fills the generated id and the declared column defaults.

pub mod bookings;
pub mod order_items;
pub mod orders;
pub mod users;
