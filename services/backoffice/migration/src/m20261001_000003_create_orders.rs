use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Egg and livestock orders share one column layout.
fn order_table(table: impl IntoIden + 'static) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Orders::Id)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Orders::Email).string())
        .col(ColumnDef::new(Orders::Name).string())
        .col(ColumnDef::new(Orders::Surname).string())
        .col(ColumnDef::new(Orders::OrderNumber).string())
        .col(ColumnDef::new(Orders::SendDate).string())
        .col(ColumnDef::new(Orders::DeliveryOption).string())
        .col(ColumnDef::new(Orders::TrackingLink).string())
        .col(
            ColumnDef::new(Orders::Eggs)
                .json_binary()
                .not_null()
                .default(Expr::cust("'[]'::jsonb")),
        )
        .col(ColumnDef::new(Orders::DispatchEmailSentAt).timestamp_with_time_zone())
        .col(
            ColumnDef::new(Orders::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(order_table(EggOrders::Table)).await?;
        manager
            .create_table(order_table(LivestockOrders::Table))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LivestockOrders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EggOrders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EggOrders {
    Table,
}

#[derive(Iden)]
enum LivestockOrders {
    Table,
}

#[derive(Iden)]
enum Orders {
    Id,
    Email,
    Name,
    Surname,
    OrderNumber,
    SendDate,
    DeliveryOption,
    TrackingLink,
    Eggs,
    DispatchEmailSentAt,
    CreatedAt,
}
