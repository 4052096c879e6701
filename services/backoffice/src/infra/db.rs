use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QuerySelect, TransactionTrait,
    sea_query::{Expr, OnConflict},
};

use farmstead_backoffice_schema::{
    egg_orders, livestock_orders, stock_categories, stock_items, user_profiles,
};
use farmstead_domain::id::{CategoryId, OrderId, UserId};
use farmstead_domain::order::{OrderCollection, OrderItem};
use farmstead_domain::user::UserRole;

use crate::domain::repository::{CategoryRepository, OrderRepository, ProfileRepository};
use crate::domain::types::{Order, UserProfile};
use crate::error::BackofficeError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, BackofficeError> {
        let model = user_profiles::Entity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .context("find profile by id")?;
        Ok(model.map(profile_from_model))
    }

    async fn create(&self, profile: &UserProfile) -> Result<(), BackofficeError> {
        let am = user_profiles::ActiveModel {
            id: Set(profile.id.0.clone()),
            email: Set(profile.email.clone()),
            role: Set(profile.role.map(|r| r.as_str().to_owned())),
            disabled: Set(profile.disabled),
            created_at: Set(profile.created_at),
            updated_at: Set(profile.updated_at),
        };
        // A concurrent first sign-in may have inserted the row already; it wins.
        user_profiles::Entity::insert(am)
            .on_conflict(
                OnConflict::column(user_profiles::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("create profile")?;
        Ok(())
    }

    async fn merge_sync(
        &self,
        id: &UserId,
        email: Option<&str>,
        role: Option<UserRole>,
        updated_at: DateTime<Utc>,
    ) -> Result<(), BackofficeError> {
        user_profiles::ActiveModel {
            id: Set(id.0.clone()),
            email: Set(email.map(str::to_owned)),
            role: Set(role.map(|r| r.as_str().to_owned())),
            updated_at: Set(updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("merge profile sync")?;
        Ok(())
    }

    async fn set_disabled(
        &self,
        id: &UserId,
        disabled: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<(), BackofficeError> {
        user_profiles::Entity::update_many()
            .col_expr(user_profiles::Column::Disabled, Expr::value(disabled))
            .col_expr(user_profiles::Column::UpdatedAt, Expr::value(updated_at))
            .filter(user_profiles::Column::Id.eq(id.as_str()))
            .exec(&self.db)
            .await
            .context("set profile disabled")?;
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), BackofficeError> {
        user_profiles::Entity::delete_by_id(id.as_str())
            .exec(&self.db)
            .await
            .context("delete profile")?;
        Ok(())
    }
}

fn profile_from_model(model: user_profiles::Model) -> UserProfile {
    let role = model.role.as_deref().and_then(|raw| {
        let role = UserRole::from_claim(raw);
        if role.is_none() {
            tracing::warn!(uid = %model.id, role = raw, "unrecognized stored role");
        }
        role
    });
    UserProfile {
        id: UserId(model.id),
        email: model.email,
        role,
        disabled: model.disabled,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn find_item_ids(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<String>, BackofficeError> {
        let ids = stock_items::Entity::find()
            .select_only()
            .column(stock_items::Column::Id)
            .filter(stock_items::Column::CategoryId.eq(category_id.as_str()))
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("find stock item ids by category")?;
        Ok(ids)
    }

    async fn delete_batch(
        &self,
        category_id: &CategoryId,
        item_ids: &[String],
    ) -> Result<(), BackofficeError> {
        let category_id = category_id.0.clone();
        let item_ids = item_ids.to_vec();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    if !item_ids.is_empty() {
                        stock_items::Entity::delete_many()
                            .filter(stock_items::Column::Id.is_in(item_ids))
                            .exec(txn)
                            .await?;
                    }
                    stock_categories::Entity::delete_by_id(category_id)
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("delete category with items")?;
        Ok(())
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn find(
        &self,
        collection: OrderCollection,
        id: &OrderId,
    ) -> Result<Option<Order>, BackofficeError> {
        let order = match collection {
            OrderCollection::EggOrders => egg_orders::Entity::find_by_id(id.as_str())
                .one(&self.db)
                .await
                .context("find egg order")?
                .map(order_from_egg_model),
            OrderCollection::LivestockOrders => livestock_orders::Entity::find_by_id(id.as_str())
                .one(&self.db)
                .await
                .context("find livestock order")?
                .map(order_from_livestock_model),
        };
        Ok(order)
    }

    async fn mark_dispatch_email_sent(
        &self,
        collection: OrderCollection,
        id: &OrderId,
        sent_at: DateTime<Utc>,
    ) -> Result<(), BackofficeError> {
        let result = match collection {
            OrderCollection::EggOrders => {
                egg_orders::Entity::update_many()
                    .col_expr(egg_orders::Column::DispatchEmailSentAt, Expr::value(sent_at))
                    .filter(egg_orders::Column::Id.eq(id.as_str()))
                    .exec(&self.db)
                    .await
            }
            OrderCollection::LivestockOrders => {
                livestock_orders::Entity::update_many()
                    .col_expr(
                        livestock_orders::Column::DispatchEmailSentAt,
                        Expr::value(sent_at),
                    )
                    .filter(livestock_orders::Column::Id.eq(id.as_str()))
                    .exec(&self.db)
                    .await
            }
        };
        result.context("stamp dispatch email sent")?;
        Ok(())
    }
}

/// Parse the `eggs` JSON column. Malformed content counts as no items.
fn parse_items(id: &str, raw: serde_json::Value) -> Vec<OrderItem> {
    serde_json::from_value(raw).unwrap_or_else(|e| {
        tracing::warn!(order_id = id, error = %e, "malformed order items");
        Vec::new()
    })
}

fn order_from_egg_model(model: egg_orders::Model) -> Order {
    Order {
        collection: OrderCollection::EggOrders,
        items: parse_items(&model.id, model.eggs),
        id: OrderId(model.id),
        email: model.email,
        name: model.name,
        surname: model.surname,
        order_number: model.order_number,
        send_date: model.send_date,
        delivery_option: model.delivery_option,
        tracking_link: model.tracking_link,
        dispatch_email_sent_at: model.dispatch_email_sent_at,
    }
}

fn order_from_livestock_model(model: livestock_orders::Model) -> Order {
    Order {
        collection: OrderCollection::LivestockOrders,
        items: parse_items(&model.id, model.eggs),
        id: OrderId(model.id),
        email: model.email,
        name: model.name,
        surname: model.surname,
        order_number: model.order_number,
        send_date: model.send_date,
        delivery_option: model.delivery_option,
        tracking_link: model.tracking_link,
        dispatch_email_sent_at: model.dispatch_email_sent_at,
    }
}
