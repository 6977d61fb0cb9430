use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// One line item of an order.
///
/// Strong reference: an item cannot exist without its order. No
/// `updated_at` column; items are replaced rather than edited.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_id: Uuid,
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_category: Option<String>,
    /// Must be >= 1; enforced by the validating layer, declared here.
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub unit_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_price: Decimal,
    pub customizations: Option<String>,
    pub item_notes: Option<String>,
    pub item_reference: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Order,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    /// Fresh id, quantity 1, creation-time timestamp.
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            quantity: Set(1),
            created_at: Set(chrono::Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pre_fill_quantity_one_and_timestamp() {
        let am = ActiveModel::new();
        assert!(am.id.is_set());
        assert_eq!(am.quantity.unwrap(), 1);
        assert!(am.created_at.is_set());
    }

    #[test]
    fn should_leave_order_reference_unset() {
        // order_id is required but has no default; the caller supplies it.
        let am = ActiveModel::new();
        assert!(am.order_id.is_not_set());
        assert!(am.unit_price.is_not_set());
        assert!(am.total_price.is_not_set());
    }
}
