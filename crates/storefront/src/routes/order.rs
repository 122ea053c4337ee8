//! Delivery date and order form handlers.

use axum::{Form, response::Redirect};
use bakery_core::{DeliveryDate, OrderField};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::VisitorSession;
use crate::routes::safe_return_path;

/// Where the cart page lands after the order form is saved.
const SAVED_REDIRECT: &str = "/cart?saved=1";

/// Delivery date picker form data.
#[derive(Debug, Deserialize)]
pub struct OrderDateForm {
    /// `YYYY-MM-DD` from the date input; blank clears the selection.
    #[serde(default)]
    pub date: String,
    pub return_to: Option<String>,
}

/// Select or clear the delivery date applied to products added next.
///
/// Lines already in the cart keep the date they were added with.
#[instrument(skip(session))]
pub async fn set_date(
    session: VisitorSession,
    Form(form): Form<OrderDateForm>,
) -> Result<Redirect> {
    let input = form.date.trim();
    let selected = if input.is_empty() {
        None
    } else {
        let today = chrono::Local::now().date_naive();
        Some(DeliveryDate::parse(input, today)?)
    };

    session.set_order_date(selected).await?;
    tracing::info!(
        date = selected.map(|d| d.to_iso()).as_deref().unwrap_or("none"),
        "Delivery date selected"
    );

    Ok(Redirect::to(&safe_return_path(form.return_to.as_deref(), "/")))
}

/// Save the order form fields into the session.
///
/// Each submitted field overwrites the stored one; unknown fields are
/// ignored. Nothing is transmitted anywhere.
#[instrument(skip_all)]
pub async fn save_draft(
    session: VisitorSession,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = session.order_draft().await?;

    for (key, value) in fields {
        match key.parse::<OrderField>() {
            Ok(field) => draft.set(field, value),
            Err(err) => tracing::debug!(error = %err, "Ignoring order form field"),
        }
    }

    session.set_order_draft(&draft).await?;
    add_breadcrumb("order", "Saved order form", None);
    tracing::info!(
        blank = draft.is_blank(),
        "Order form saved; orders are not transmitted"
    );

    Ok(Redirect::to(SAVED_REDIRECT))
}
