//! Cart route handlers.
//!
//! The cart is a [`bakery_core::Cart`] stored in the visitor session. Adding
//! is the only mutation; totals are recomputed from the catalog on every
//! render.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use bakery_core::{Cart, CatalogProvider, OrderDraft, ProductId, ResolvedLine};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::RequestId;
use crate::models::VisitorSession;
use crate::routes::{Layout, safe_return_path};
use crate::state::AppState;

/// Where the visitor lands after adding a product without a `return_to`.
const DEFAULT_RETURN_PATH: &str = "/#catalog";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    /// Short delivery date ("15 января"), if one was picked when last added.
    pub date: Option<String>,
}

impl From<&ResolvedLine<'_>> for CartItemView {
    fn from(resolved: &ResolvedLine<'_>) -> Self {
        Self {
            name: resolved.product.name.clone(),
            quantity: resolved.line.quantity(),
            price: resolved.product.price.to_string(),
            line_price: resolved.subtotal().to_string(),
            date: resolved.line.requested_date().map(|d| d.format_short()),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Resolve `cart` against `catalog` for display.
    #[must_use]
    pub fn new(cart: &Cart, catalog: &dyn CatalogProvider) -> Self {
        Self {
            items: cart
                .resolved_lines(catalog)
                .iter()
                .map(CartItemView::from)
                .collect(),
            total: cart.total_price(catalog).to_string(),
            item_count: cart.total_item_count(),
        }
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub return_to: Option<String>,
}

/// Cart page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CartQuery {
    /// Set after the order form was saved.
    pub saved: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: Layout,
    pub cart: CartView,
    pub draft: OrderDraft,
    pub saved: bool,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: VisitorSession,
    Query(query): Query<CartQuery>,
) -> Result<CartShowTemplate> {
    let cart = session.cart().await?;

    Ok(CartShowTemplate {
        layout: Layout::for_visitor(&session).await?,
        cart: CartView::new(&cart, state.catalog()),
        draft: session.order_draft().await?,
        saved: query.saved.is_some(),
    })
}

/// Add one unit of a product to the cart.
///
/// The line takes the delivery date currently selected in the date picker.
/// Unknown product ids are accepted; they add to the badge count but not to
/// the total.
#[instrument(skip(state, session), fields(product_id = %form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    session: VisitorSession,
    request_id: RequestId,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let mut cart = session.cart().await?;
    let selected_date = session.order_date().await?;

    cart.add_item(form.product_id, selected_date);
    session.set_cart(&cart).await?;

    if state.catalog().find(form.product_id).is_none() {
        tracing::warn!(
            request_id = %request_id.as_str(),
            "Added product id missing from catalog"
        );
    }
    add_breadcrumb(
        "cart",
        "Added product",
        Some(&[("product_id", &form.product_id.to_string())]),
    );
    tracing::info!(
        items = cart.total_item_count(),
        total = %cart.total_price(state.catalog()),
        "Cart updated"
    );

    let target = safe_return_path(form.return_to.as_deref(), DEFAULT_RETURN_PATH);
    Ok(Redirect::to(&target))
}

/// Get cart count badge.
#[instrument(skip(session))]
pub async fn count(session: VisitorSession) -> Result<CartCountTemplate> {
    let cart = session.cart().await?;
    Ok(CartCountTemplate {
        count: cart.total_item_count(),
    })
}
