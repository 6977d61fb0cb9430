use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // Weak reference: NULL means a guest order.
                    .col(ColumnDef::new(Orders::UserId).uuid())
                    .col(ColumnDef::new(Orders::CustomerName).string_len(255).not_null())
                    .col(ColumnDef::new(Orders::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Orders::PhoneNumber).string_len(15))
                    .col(ColumnDef::new(Orders::Address).string_len(255))
                    .col(ColumnDef::new(Orders::City).string_len(255))
                    .col(ColumnDef::new(Orders::State).string_len(100))
                    .col(ColumnDef::new(Orders::PostalCode).string_len(20))
                    .col(ColumnDef::new(Orders::Country).string_len(100).default("US"))
                    .col(
                        ColumnDef::new(Orders::OrderType)
                            .string_len(20)
                            .not_null()
                            .default("pickup"),
                    )
                    .col(ColumnDef::new(Orders::Subtotal).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Orders::TaxAmount)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Orders::ServiceFee)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Orders::DiscountAmount)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Orders::TipAmount)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Orders::TotalAmount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Orders::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Orders::PaymentStatus)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Orders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Orders::ScheduledFor).timestamp_with_time_zone())
                    .col(ColumnDef::new(Orders::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Orders::SpecialInstructions).string_len(1000))
                    .col(ColumnDef::new(Orders::ReferenceNumber).string_len(100))
                    .col(ColumnDef::new(Orders::PaymentMethod).string_len(50))
                    .col(ColumnDef::new(Orders::PaymentReference).string_len(100))
                    .col(ColumnDef::new(Orders::PromoCode).string_len(50))
                    .col(ColumnDef::new(Orders::BusinessNotes).string_len(1000))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Orders::Table, Orders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    UserId,
    CustomerName,
    Email,
    PhoneNumber,
    Address,
    City,
    State,
    PostalCode,
    Country,
    OrderType,
    Subtotal,
    TaxAmount,
    ServiceFee,
    DiscountAmount,
    TipAmount,
    TotalAmount,
    Status,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
    ScheduledFor,
    CompletedAt,
    SpecialInstructions,
    ReferenceNumber,
    PaymentMethod,
    PaymentReference,
    PromoCode,
    BusinessNotes,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
