//! Requested delivery date and its Russian display forms.

use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month names in the genitive case, as used after a day number ("15 января").
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Errors that can occur when choosing a [`DeliveryDate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryDateError {
    /// The input is not an ISO `YYYY-MM-DD` date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    Invalid(String),
    /// The date is today or earlier.
    #[error("delivery date {date} is too early (earliest is {earliest})")]
    TooEarly {
        /// Requested date.
        date: NaiveDate,
        /// First day that can be chosen.
        earliest: NaiveDate,
    },
}

/// A calendar day the customer wants their order delivered on.
///
/// Construction through [`DeliveryDate::choose`] and [`DeliveryDate::parse`]
/// only accepts days after `today`; deserialization does not re-check, so a
/// date stored yesterday stays readable today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryDate(NaiveDate);

impl DeliveryDate {
    /// Wrap a date without checking it against the current day.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// First day that can be chosen: the day after `today`.
    #[must_use]
    pub fn earliest(today: NaiveDate) -> Self {
        Self(today.succ_opt().unwrap_or(NaiveDate::MAX))
    }

    /// Choose `date` for delivery, relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDateError::TooEarly`] unless `date` is after `today`.
    pub fn choose(date: NaiveDate, today: NaiveDate) -> Result<Self, DeliveryDateError> {
        let earliest = Self::earliest(today).0;
        if date < earliest {
            return Err(DeliveryDateError::TooEarly { date, earliest });
        }
        Ok(Self(date))
    }

    /// Parse an ISO `YYYY-MM-DD` string (the value of an HTML date input).
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDateError::Invalid`] for malformed input and
    /// [`DeliveryDateError::TooEarly`] for `today` and earlier.
    ///
    /// ```
    /// use bakery_core::DeliveryDate;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let date = DeliveryDate::parse("2024-01-15", today).unwrap();
    /// assert_eq!(date.format_long(), "15 января 2024");
    /// assert!(DeliveryDate::parse("2024-01-10", today).is_err());
    /// ```
    pub fn parse(input: &str, today: NaiveDate) -> Result<Self, DeliveryDateError> {
        let input = input.trim();
        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| DeliveryDateError::Invalid(input.to_owned()))?;
        Self::choose(date, today)
    }

    /// The underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Long form for the date picker: `d MMMM yyyy`, e.g. "15 января 2024".
    #[must_use]
    pub fn format_long(&self) -> String {
        format!("{} {}", self.format_short(), self.0.year())
    }

    /// Short form for cart lines: `d MMMM`, e.g. "15 января".
    #[must_use]
    pub fn format_short(&self) -> String {
        format!("{} {}", self.0.day(), month_genitive(self.0.month0()))
    }

    /// ISO form used as the value of an HTML date input.
    #[must_use]
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

fn month_genitive(month0: u32) -> &'static str {
    usize::try_from(month0)
        .ok()
        .and_then(|index| MONTHS_GENITIVE.get(index))
        .copied()
        .unwrap_or_default()
}

impl fmt::Display for DeliveryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_long())
    }
}

impl FromStr for DeliveryDate {
    type Err = DeliveryDateError;

    /// Parses without the past-date check; use [`DeliveryDate::parse`] for
    /// visitor input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DeliveryDateError::Invalid(s.trim().to_owned()))
    }
}

impl From<DeliveryDate> for NaiveDate {
    fn from(date: DeliveryDate) -> Self {
        date.0
    }
}
