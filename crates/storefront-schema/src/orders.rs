use sea_orm::Set;
use sea_orm::entity::prelude::*;

use storefront_domain::order::{DEFAULT_COUNTRY, OrderStatus, OrderType, PaymentStatus};

/// Commercial transaction, generalized across pickup/delivery/dine-in/
/// online/in-store/service businesses. Customer contact fields are inline
/// so a guest can order without an account.
///
/// `status` and `payment_status` are independent columns; the schema never
/// cross-constrains them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Weak reference; NULL means a guest order.
    pub user_id: Option<Uuid>,
    pub customer_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// One of the `OrderType` string values.
    pub order_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub subtotal: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub tax_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub service_fee: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub discount_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub tip_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_amount: Decimal,
    /// One of the `OrderStatus` string values.
    pub status: String,
    /// One of the `PaymentStatus` string values.
    pub payment_status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub scheduled_for: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub special_instructions: Option<String>,
    pub reference_number: Option<String>,
    pub payment_method: Option<String>,
    pub payment_reference: Option<String>,
    pub promo_code: Option<String>,
    pub business_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    /// Fresh id, `pickup` type, `pending` status and payment status, zero
    /// tax/fee/discount/tip, country "US", creation-time timestamps.
    fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Set(Uuid::new_v4()),
            country: Set(Some(DEFAULT_COUNTRY.to_owned())),
            order_type: Set(OrderType::default().as_str().to_owned()),
            tax_amount: Set(Decimal::ZERO),
            service_fee: Set(Decimal::ZERO),
            discount_amount: Set(Decimal::ZERO),
            tip_amount: Set(Decimal::ZERO),
            status: Set(OrderStatus::default().as_str().to_owned()),
            payment_status: Set(PaymentStatus::default().as_str().to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..ActiveModelTrait::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pre_fill_declared_defaults() {
        let am = ActiveModel::new();
        assert!(am.id.is_set());
        assert_eq!(am.order_type.unwrap(), "pickup");
        assert_eq!(am.status.unwrap(), "pending");
        assert_eq!(am.payment_status.unwrap(), "pending");
        assert_eq!(am.country.unwrap(), Some("US".to_owned()));
        assert_eq!(am.tax_amount.unwrap(), Decimal::ZERO);
        assert_eq!(am.service_fee.unwrap(), Decimal::ZERO);
        assert_eq!(am.discount_amount.unwrap(), Decimal::ZERO);
        assert_eq!(am.tip_amount.unwrap(), Decimal::ZERO);
    }

    #[test]
    fn should_leave_required_amounts_unset() {
        // subtotal and total_amount have no default; the caller supplies them.
        let am = ActiveModel::new();
        assert!(am.subtotal.is_not_set());
        assert!(am.total_amount.is_not_set());
        assert!(am.user_id.is_not_set());
    }
}
