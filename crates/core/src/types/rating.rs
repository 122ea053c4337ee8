//! Star rating attached to customer reviews.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the 1-5 star range.
    #[error("rating must be between {min} and {max} stars (got {got})")]
    OutOfRange {
        /// Value that was supplied.
        got: u8,
        /// Lowest allowed value.
        min: u8,
        /// Highest allowed value.
        max: u8,
    },
}

/// A 1-5 star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest possible rating.
    pub const MIN: u8 = 1;
    /// Highest possible rating.
    pub const MAX: u8 = 5;

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] unless `stars` is within 1-5.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars < Self::MIN || stars > Self::MAX {
            return Err(RatingError::OutOfRange {
                got: stars,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(stars))
    }

    /// Number of stars.
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
