//! Home page route handler.
//!
//! The whole storefront is one page: hero, delivery date picker, catalog
//! with category filter, about, delivery terms, reviews and contacts.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use bakery_core::{CategoryFilter, DeliveryDate, Product, Review};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::models::VisitorSession;
use crate::routes::Layout;
use crate::state::AppState;

/// Home page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
}

// =============================================================================
// Views
// =============================================================================

/// Product card data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub is_popular: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            is_popular: product.is_popular,
        }
    }
}

/// One category filter button.
#[derive(Clone)]
pub struct CategoryTab {
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

impl CategoryTab {
    fn new(filter: &CategoryFilter, selected: &CategoryFilter) -> Self {
        Self {
            label: filter.label().to_string(),
            href: catalog_href(filter),
            is_active: filter == selected,
        }
    }
}

/// Link to the catalog section with `filter` applied.
#[must_use]
pub fn catalog_href(filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "/#catalog".to_string(),
        CategoryFilter::Only(category) => format!(
            "/?category={}#catalog",
            urlencoding::encode(category.as_str())
        ),
    }
}

/// Customer review data for templates.
#[derive(Clone)]
pub struct ReviewView {
    pub author: String,
    pub stars: String,
    pub text: String,
    pub date: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            author: review.author.clone(),
            stars: "★".repeat(usize::from(review.rating.stars())),
            text: review.text.clone(),
            date: review.date.clone(),
        }
    }
}

/// Delivery date picker data for templates.
#[derive(Clone)]
pub struct OrderDateView {
    /// Picker button text: the long date or a prompt.
    pub label: String,
    /// Current value for the date input, if a date is selected.
    pub value: Option<String>,
    /// Earliest selectable day (tomorrow).
    pub min: String,
}

impl OrderDateView {
    #[must_use]
    pub fn new(selected: Option<DeliveryDate>, today: NaiveDate) -> Self {
        Self {
            label: selected.map_or_else(|| "Выберите дату".to_string(), |d| d.format_long()),
            value: selected.map(|d| d.to_iso()),
            min: DeliveryDate::earliest(today).to_iso(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub order_date: OrderDateView,
    pub categories: Vec<CategoryTab>,
    pub products: Vec<ProductView>,
    /// Where "В корзину" should send the visitor back to.
    pub return_to: String,
    pub reviews: Vec<ReviewView>,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: VisitorSession,
    Query(query): Query<HomeQuery>,
) -> Result<HomeTemplate> {
    let selected = query
        .category
        .as_deref()
        .map_or(CategoryFilter::All, CategoryFilter::from_label);

    let catalog = state.catalog();
    let products: Vec<ProductView> = catalog
        .filter_by_category(&selected)
        .into_iter()
        .map(ProductView::from)
        .collect();
    tracing::debug!(category = %selected, shown = products.len(), "Catalog filtered");

    let categories = catalog
        .category_filters()
        .iter()
        .map(|filter| CategoryTab::new(filter, &selected))
        .collect();

    let today = chrono::Local::now().date_naive();

    Ok(HomeTemplate {
        layout: Layout::for_visitor(&session).await?,
        order_date: OrderDateView::new(session.order_date().await?, today),
        categories,
        products,
        return_to: catalog_href(&selected),
        reviews: state.reviews().iter().map(ReviewView::from).collect(),
    })
}
