//! Customer reviews shown on the storefront.

use serde::{Deserialize, Serialize};

use crate::types::{Rating, ReviewId};

/// A published customer review.
///
/// `date` is display text ("15 января 2024") rather than a parsed date;
/// reviews are shown as written and never sorted or compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(alias = "name")]
    pub author: String,
    pub rating: Rating,
    pub text: String,
    pub date: String,
}
