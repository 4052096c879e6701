use sea_orm::entity::prelude::*;

/// Livestock order. Same shape as `egg_orders`; line items are kept in the
/// `eggs` column for both collections.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "livestock_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub order_number: Option<String>,
    pub send_date: Option<String>,
    pub delivery_option: Option<String>,
    pub tracking_link: Option<String>,
    pub eggs: Json,
    pub dispatch_email_sent_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
