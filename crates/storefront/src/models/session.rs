//! Session-related types.
//!
//! Everything a visitor builds up while browsing (cart, chosen delivery date,
//! order form) lives in their session and disappears with it.

use bakery_core::{Cart, DeliveryDate, OrderDraft};
use serde::de::DeserializeOwned;
use tower_sessions::Session;

/// Session keys for visitor state.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the globally selected delivery date.
    pub const ORDER_DATE: &str = "order_date";

    /// Key for the order form contents.
    pub const ORDER_DRAFT: &str = "order_draft";
}

/// Typed access to the visitor state stored in a [`Session`].
#[derive(Clone)]
pub struct VisitorSession {
    session: Session,
}

impl VisitorSession {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// The visitor's cart, empty if nothing was added yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or the stored value is corrupt.
    pub async fn cart(&self) -> Result<Cart, tower_sessions::session::Error> {
        self.get_or_default(keys::CART).await
    }

    /// Store the visitor's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_cart(&self, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
        self.session.insert(keys::CART, cart).await
    }

    /// The delivery date currently selected in the date picker.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or the stored value is corrupt.
    pub async fn order_date(&self) -> Result<Option<DeliveryDate>, tower_sessions::session::Error> {
        self.session.get(keys::ORDER_DATE).await
    }

    /// Select a delivery date, or clear the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_order_date(
        &self,
        date: Option<DeliveryDate>,
    ) -> Result<(), tower_sessions::session::Error> {
        match date {
            Some(date) => self.session.insert(keys::ORDER_DATE, date).await,
            None => self
                .session
                .remove::<DeliveryDate>(keys::ORDER_DATE)
                .await
                .map(|_| ()),
        }
    }

    /// The order form contents, blank if never edited.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or the stored value is corrupt.
    pub async fn order_draft(&self) -> Result<OrderDraft, tower_sessions::session::Error> {
        self.get_or_default(keys::ORDER_DRAFT).await
    }

    /// Store the order form contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_order_draft(
        &self,
        draft: &OrderDraft,
    ) -> Result<(), tower_sessions::session::Error> {
        self.session.insert(keys::ORDER_DRAFT, draft).await
    }

    async fn get_or_default<T>(&self, key: &str) -> Result<T, tower_sessions::session::Error>
    where
        T: Default + DeserializeOwned,
    {
        Ok(self.session.get::<T>(key).await?.unwrap_or_default())
    }
}

impl<S> axum::extract::FromRequestParts<S> for VisitorSession
where
    S: Send + Sync,
{
    type Rejection = <Session as axum::extract::FromRequestParts<S>>::Rejection;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state).await.map(Self::new)
    }
}
