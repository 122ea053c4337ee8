//! The customer's order form.
//!
//! An [`OrderDraft`] holds whatever the customer typed, unvalidated. It is
//! never submitted anywhere.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown [`OrderField`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown order field '{0}'")]
pub struct UnknownOrderField(pub String);

/// One editable field of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    Name,
    Phone,
    Address,
    Comment,
}

impl OrderField {
    /// Every field, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Phone, Self::Address, Self::Comment];

    /// HTML form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderField {
    type Err = UnknownOrderField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "comment" => Ok(Self::Comment),
            _ => Err(UnknownOrderField(s.to_owned())),
        }
    }
}

/// Contact and delivery details typed into the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub comment: String,
}

impl OrderDraft {
    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Phone => &self.phone,
            OrderField::Address => &self.address,
            OrderField::Comment => &self.comment,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let slot = match field {
            OrderField::Name => &mut self.name,
            OrderField::Phone => &mut self.phone,
            OrderField::Address => &mut self.address,
            OrderField::Comment => &mut self.comment,
        };
        *slot = value.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.set(OrderField::Name, name);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.set(OrderField::Phone, phone);
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.set(OrderField::Address, address);
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.set(OrderField::Comment, comment);
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        OrderField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_each_field() {
        let mut draft = OrderDraft::default();
        assert!(draft.is_blank());

        draft.set_name("Мария");
        draft.set_phone("+7 (999) 123-45-67");
        draft.set_address("ул. Пекарская, 15");
        draft.set_comment("Без сахара");

        assert_eq!(draft.get(OrderField::Name), "Мария");
        assert_eq!(draft.get(OrderField::Phone), "+7 (999) 123-45-67");
        assert_eq!(draft.get(OrderField::Address), "ул. Пекарская, 15");
        assert_eq!(draft.get(OrderField::Comment), "Без сахара");
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_set_replaces_only_one_field() {
        let mut draft = OrderDraft::default();
        draft.set(OrderField::Name, "Андрей");
        draft.set(OrderField::Phone, "1");
        draft.set(OrderField::Name, "Андрей Волков");

        assert_eq!(draft.name, "Андрей Волков");
        assert_eq!(draft.phone, "1");
        assert!(draft.address.is_empty());
    }

    #[test]
    fn test_no_validation_is_applied() {
        let mut draft = OrderDraft::default();
        draft.set_phone("not a phone");
        assert_eq!(draft.phone, "not a phone");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in OrderField::ALL {
            assert_eq!(field.as_str().parse::<OrderField>().unwrap(), field);
        }
        assert_eq!(
            "email".parse::<OrderField>(),
            Err(UnknownOrderField("email".to_owned()))
        );
    }
}
