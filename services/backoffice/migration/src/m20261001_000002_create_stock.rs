use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockCategories::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StockCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // No foreign key to stock_categories: items may reference a category
        // that does not exist yet, and the cascade delete is done in one
        // application-side transaction.
        manager
            .create_table(
                Table::create()
                    .table(StockItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StockItems::CategoryId).string().not_null())
                    .col(
                        ColumnDef::new(StockItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(StockItems::Table)
                    .col(StockItems::CategoryId)
                    .name("idx_stock_items_category_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StockCategories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StockCategories {
    Table,
    Id,
    CreatedAt,
}

#[derive(Iden)]
enum StockItems {
    Table,
    Id,
    CategoryId,
    CreatedAt,
}
