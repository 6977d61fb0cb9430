use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderItems::OrderId).uuid().not_null())
                    .col(ColumnDef::new(OrderItems::ItemName).string_len(255).not_null())
                    .col(ColumnDef::new(OrderItems::ItemDescription).string_len(500))
                    .col(ColumnDef::new(OrderItems::ItemCategory).string_len(100))
                    .col(
                        ColumnDef::new(OrderItems::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(OrderItems::UnitPrice)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderItems::TotalPrice)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderItems::Customizations).string_len(500))
                    .col(ColumnDef::new(OrderItems::ItemNotes).string_len(500))
                    .col(ColumnDef::new(OrderItems::ItemReference).string_len(100))
                    // No updated_at: items are replaced, not edited.
                    .col(
                        ColumnDef::new(OrderItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Strong reference: items vanish with their order.
                    .foreign_key(
                        ForeignKey::create()
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    ItemName,
    ItemDescription,
    ItemCategory,
    Quantity,
    UnitPrice,
    TotalPrice,
    Customizations,
    ItemNotes,
    ItemReference,
    CreatedAt,
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
}
