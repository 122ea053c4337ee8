//! Product categories and the catalog category filter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Label of the filter entry that shows every product.
pub const ALL_CATEGORIES_LABEL: &str = "Все";

/// A product category label, e.g. "Пирожки".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from its display label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Which products the catalog grid shows.
///
/// `All` is the sentinel entry labelled [`ALL_CATEGORIES_LABEL`]; any other
/// label selects exactly the products of that category, even if no product
/// carries it (the grid is then empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Build a filter from a visitor-supplied label.
    ///
    /// Blank input and the "Все" sentinel both select every product.
    ///
    /// ```
    /// use bakery_core::{Category, CategoryFilter};
    ///
    /// assert_eq!(CategoryFilter::from_label("Все"), CategoryFilter::All);
    /// assert_eq!(CategoryFilter::from_label(""), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::from_label("Пирожки"),
    ///     CategoryFilter::Only(Category::new("Пирожки")),
    /// );
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == ALL_CATEGORIES_LABEL {
            Self::All
        } else {
            Self::Only(Category::new(label))
        }
    }

    /// The label shown on the filter button.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_trims() {
        assert_eq!(
            CategoryFilter::from_label("  Пирожки "),
            CategoryFilter::Only(Category::new("Пирожки"))
        );
        assert_eq!(CategoryFilter::from_label("   "), CategoryFilter::All);
    }

    #[test]
    fn test_matches() {
        let pies = Category::new("Сладкие пироги");
        let buns = Category::new("Пирожки");

        assert!(CategoryFilter::All.matches(&pies));
        assert!(CategoryFilter::Only(pies.clone()).matches(&pies));
        assert!(!CategoryFilter::Only(pies).matches(&buns));
    }

    #[test]
    fn test_label_round_trips_through_from_label() {
        let filter = CategoryFilter::Only(Category::new("Пирожки"));
        assert_eq!(CategoryFilter::from_label(filter.label()), filter);
        assert_eq!(CategoryFilter::All.to_string(), "Все");
    }
}
