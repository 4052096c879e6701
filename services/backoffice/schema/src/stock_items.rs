use sea_orm::entity::prelude::*;

/// Stock item. `category_id` carries no foreign key: the category cascade is
/// done by the application in one transaction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stock_categories::Entity",
        from = "Column::CategoryId",
        to = "super::stock_categories::Column::Id"
    )]
    StockCategory,
}

impl Related<super::stock_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
