use anyhow::Context;
use askama::Template;
use chrono::Utc;

use farmstead_domain::id::OrderId;
use farmstead_domain::order::{OrderCollection, OrderItem};

use crate::domain::repository::{EmailSender, OrderRepository};
use crate::domain::types::{FALLBACK_CUSTOMER_NAME, Order, OutgoingEmail};
use crate::error::BackofficeError;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `"{label} x {quantity}"` for every item with a positive quantity,
/// joined by `", "`. `None` when nothing is left.
pub fn summarize_items(items: &[OrderItem]) -> Option<String> {
    let parts: Vec<String> = items
        .iter()
        .filter(|item| item.quantity > 0)
        .map(|item| format!("{} x {}", item.label, item.quantity))
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// HTML body of the dispatch notice. Interpolated values are HTML-escaped.
#[derive(Template)]
#[template(path = "dispatch_email.html")]
struct DispatchEmailTemplate<'a> {
    name: &'a str,
    /// `" #{order_number}"`, or empty when the order has no number.
    suffix: &'a str,
    send_date: Option<&'a str>,
    delivery_option: Option<&'a str>,
    items: Option<String>,
    tracking_link: Option<&'a str>,
}

/// Render subject and HTML body of the dispatch notice.
pub fn render_dispatch_email(order: &Order) -> Result<(String, String), BackofficeError> {
    let full_name = format!(
        "{} {}",
        order.name.as_deref().unwrap_or_default(),
        order.surname.as_deref().unwrap_or_default()
    );
    let suffix = non_blank(order.order_number.as_deref())
        .map(|n| format!(" #{n}"))
        .unwrap_or_default();

    let subject = format!("Your order{suffix} has been dispatched");
    let html = DispatchEmailTemplate {
        name: non_blank(Some(full_name.as_str())).unwrap_or(FALLBACK_CUSTOMER_NAME),
        suffix: &suffix,
        send_date: non_blank(order.send_date.as_deref()),
        delivery_option: non_blank(order.delivery_option.as_deref()),
        items: summarize_items(&order.items),
        tracking_link: non_blank(order.tracking_link.as_deref()),
    }
    .render()
    .context("render dispatch email")?;

    Ok((subject, html))
}

// ── SendDispatchEmail ────────────────────────────────────────────────────────

pub struct SendDispatchEmailInput {
    pub collection_name: String,
    pub order_id: String,
}

pub struct SendDispatchEmailUseCase<O, M>
where
    O: OrderRepository,
    M: EmailSender,
{
    pub orders: O,
    /// `None` when no email API key is configured.
    pub mailer: Option<M>,
    pub from: String,
}

impl<O, M> SendDispatchEmailUseCase<O, M>
where
    O: OrderRepository,
    M: EmailSender,
{
    /// Returns the provider's message id.
    pub async fn execute(
        &self,
        input: SendDispatchEmailInput,
    ) -> Result<Option<String>, BackofficeError> {
        let mailer = self
            .mailer
            .as_ref()
            .ok_or(BackofficeError::EmailNotConfigured)?;
        let collection = OrderCollection::from_name(&input.collection_name)
            .ok_or(BackofficeError::InvalidCollection(input.collection_name))?;
        let order_id: OrderId = input
            .order_id
            .parse()
            .map_err(|_| BackofficeError::MissingOrderId)?;

        let order = self
            .orders
            .find(collection, &order_id)
            .await?
            .ok_or(BackofficeError::OrderNotFound)?;
        let to = non_blank(order.email.as_deref())
            .ok_or(BackofficeError::OrderMissingEmail)?
            .to_owned();

        let (subject, html) = render_dispatch_email(&order)?;
        let id = mailer
            .send(&OutgoingEmail {
                from: self.from.clone(),
                to: vec![to],
                subject,
                html,
            })
            .await?;

        if let Err(e) = self
            .orders
            .mark_dispatch_email_sent(collection, &order_id, Utc::now())
            .await
        {
            tracing::error!(
                collection = collection.as_str(),
                order_id = %order_id,
                completed = "email sent",
                message_id = id.as_deref().unwrap_or_default(),
                error = %e,
                "dispatch email sent but order stamp failed"
            );
            return Err(e);
        }
        tracing::info!(
            collection = collection.as_str(),
            order_id = %order_id,
            message_id = id.as_deref().unwrap_or_default(),
            "dispatch email sent"
        );
        Ok(id)
    }
}
