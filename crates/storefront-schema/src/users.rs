use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Account holder record. Bookings and orders reference it optionally.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    /// Fresh id only; `created_at`/`updated_at` carry no default on users,
    /// the registration process supplies both.
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            ..ActiveModelTrait::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pre_fill_id_only() {
        let am = ActiveModel::new();
        assert!(am.id.is_set());
        assert!(am.created_at.is_not_set());
        assert!(am.updated_at.is_not_set());
        assert!(am.role.is_not_set());
    }

    #[test]
    fn should_generate_distinct_ids() {
        assert_ne!(ActiveModel::new().id.unwrap(), ActiveModel::new().id.unwrap());
    }
}
