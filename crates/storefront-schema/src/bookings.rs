use sea_orm::Set;
use sea_orm::entity::prelude::*;

use storefront_domain::booking::BookingStatus;

/// Scheduled appointment/reservation. Client contact fields are duplicated
/// from `users` so a guest can book without an account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub owner_name: String,
    pub address: String,
    /// One of the `BookingStatus` string values.
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Weak reference; NULL means a guest booking.
    pub user_id: Option<Uuid>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub estimated_price: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub final_price: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    /// Fresh id, `pending` status, creation-time timestamps.
    fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Set(Uuid::new_v4()),
            status: Set(BookingStatus::default().as_str().to_owned()),
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
    fn should_pre_fill_pending_status_and_timestamps() {
        let am = ActiveModel::new();
        assert!(am.id.is_set());
        assert_eq!(am.status.unwrap(), "pending");
        assert!(am.created_at.is_set());
        assert!(am.updated_at.is_set());
    }

    #[test]
    fn should_leave_guest_and_price_fields_unset() {
        let am = ActiveModel::new();
        assert!(am.user_id.is_not_set());
        assert!(am.estimated_price.is_not_set());
        assert!(am.final_price.is_not_set());
    }
}
