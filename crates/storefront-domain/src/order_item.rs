//! Order line-item records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constraint::{self, ConstraintViolation};
use crate::money;

pub const ITEM_NAME_MAX: usize = 255;
pub const ITEM_DESCRIPTION_MAX: usize = 500;
pub const ITEM_CATEGORY_MAX: usize = 100;
pub const CUSTOMIZATIONS_MAX: usize = 500;
pub const ITEM_NOTES_MAX: usize = 500;
pub const ITEM_REFERENCE_MAX: usize = 100;

/// Minimum legal quantity; the only numeric lower bound in the schema.
pub const QUANTITY_MIN: i32 = 1;

/// One line item belonging to exactly one order.
///
/// Items have no existence independent of their order (strong reference),
/// and no `updated_at`: an item is replaced rather than edited. No in-schema
/// invariant that `total_price = unit_price * quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    /// Product name, menu item, or service name.
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_category: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    /// "extra cheese", "size large", and the like.
    pub customizations: Option<String>,
    pub item_notes: Option<String>,
    /// SKU, menu item id, or service code.
    pub item_reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    /// Build a line item with a generated id, quantity 1, and `created_at`
    /// set to now.
    pub fn new(order_id: Uuid, item_name: String, unit_price: Decimal, total_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            item_name,
            item_description: None,
            item_category: None,
            quantity: QUANTITY_MIN,
            unit_price,
            total_price,
            customizations: None,
            item_notes: None,
            item_reference: None,
            created_at: Utc::now(),
        }
    }

    /// Re-check every declared field constraint.
    ///
    /// Run after any mutation, not only at construction.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        constraint::max_len("item_name", &self.item_name, ITEM_NAME_MAX)?;
        constraint::max_len_opt(
            "item_description",
            self.item_description.as_deref(),
            ITEM_DESCRIPTION_MAX,
        )?;
        constraint::max_len_opt(
            "item_category",
            self.item_category.as_deref(),
            ITEM_CATEGORY_MAX,
        )?;
        if self.quantity < QUANTITY_MIN {
            return Err(ConstraintViolation::QuantityBelowMinimum {
                field: "quantity",
                actual: self.quantity,
            });
        }
        money::check("unit_price", self.unit_price)?;
        money::check("total_price", self.total_price)?;
        constraint::max_len_opt(
            "customizations",
            self.customizations.as_deref(),
            CUSTOMIZATIONS_MAX,
        )?;
        constraint::max_len_opt("item_notes", self.item_notes.as_deref(), ITEM_NOTES_MAX)?;
        constraint::max_len_opt(
            "item_reference",
            self.item_reference.as_deref(),
            ITEM_REFERENCE_MAX,
        )?;
        Ok(())
    }
}
