use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::ClientName).string_len(255).not_null())
                    .col(ColumnDef::new(Bookings::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Bookings::Phone).string_len(20))
                    .col(
                        ColumnDef::new(Bookings::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::ServiceType).string_len(100))
                    .col(ColumnDef::new(Bookings::Notes).string_len(1000))
                    .col(ColumnDef::new(Bookings::OwnerName).string_len(255).not_null())
                    .col(ColumnDef::new(Bookings::Address).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Weak reference: NULL means a guest booking.
                    .col(ColumnDef::new(Bookings::UserId).uuid())
                    .col(ColumnDef::new(Bookings::EstimatedPrice).decimal_len(10, 2))
                    .col(ColumnDef::new(Bookings::FinalPrice).decimal_len(10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Bookings {
    Table,
    Id,
    ClientName,
    Email,
    Phone,
    StartTime,
    EndTime,
    ServiceType,
    Notes,
    OwnerName,
    Address,
    Status,
    CreatedAt,
    UpdatedAt,
    UserId,
    EstimatedPrice,
    FinalPrice,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
