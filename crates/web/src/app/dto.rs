use core::num::IntErrorKind;

use serde::Deserialize;

use stockroom_core::{DomainError, DomainResult, Money};

// -------------------------
// Form payloads
// -------------------------
//
// Every field arrives as raw text so malformed input becomes an inline
// validation message instead of an extractor rejection.

/// "Add to Inventory" form.
#[derive(Debug, Default, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit_price: String,
}

/// Entry-time-validated add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl AddItemRequest {
    /// Enforce the entry bounds: name non-empty, quantity >= 1, price >= 0.01.
    pub fn validate(&self) -> DomainResult<NewItem> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name required"));
        }

        let quantity: u32 = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow => DomainError::validation("quantity is too large"),
                _ => DomainError::validation("quantity must be a whole number"),
            })?;
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        let unit_price: Money = self.unit_price.parse()?;
        if unit_price.is_zero() {
            return Err(DomainError::validation("unit price must be at least 0.01"));
        }

        Ok(NewItem {
            name: self.name.clone(),
            quantity,
            unit_price,
        })
    }
}

/// "Remove Item" form.
#[derive(Debug, Default, Deserialize)]
pub struct RemoveItemRequest {
    #[serde(default)]
    pub position: String,
}

impl RemoveItemRequest {
    /// Parse the requested position. Negative numbers are a valid parse; the
    /// range check against the current rows happens in the session.
    pub fn position(&self) -> DomainResult<i64> {
        parse_position(&self.position)
    }
}

/// Query string of the page itself (`/?position=N` previews a row).
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub position: Option<String>,
}

/// Whole numbers beyond the `i64` range saturate, so they stay out of range
/// rather than becoming malformed input.
pub fn parse_position(raw: &str) -> DomainResult<i64> {
    raw.trim().parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(DomainError::validation("position must be a whole number")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(name: &str, quantity: &str, unit_price: &str) -> AddItemRequest {
        AddItemRequest {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
        }
    }

    #[test]
    fn valid_add_request() {
        let item = add(" Widget ", "5", "2.50").validate().unwrap();
        assert_eq!(
            item,
            NewItem {
                name: " Widget ".to_string(),
                quantity: 5,
                unit_price: Money::from_minor(250),
            }
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            add("", "3", "5.00").validate(),
            Err(DomainError::validation("name required"))
        );
        assert_eq!(
            add("   ", "3", "5.00").validate(),
            Err(DomainError::validation("name required"))
        );
    }

    #[test]
    fn quantity_bounds() {
        assert_eq!(
            add("Widget", "0", "1.00").validate(),
            Err(DomainError::validation("quantity must be at least 1"))
        );
        for bad in ["-1", "1.5", "", "many"] {
            assert_eq!(
                add("Widget", bad, "1.00").validate(),
                Err(DomainError::validation("quantity must be a whole number")),
                "quantity {bad:?}"
            );
        }
    }

    #[test]
    fn oversized_quantity_has_its_own_message() {
        assert_eq!(
            add("Widget", "4294967296", "1.00").validate(),
            Err(DomainError::validation("quantity is too large"))
        );
        assert_eq!(add("Widget", "4294967295", "1.00").validate().unwrap().quantity, u32::MAX);
    }

    #[test]
    fn price_bounds() {
        assert_eq!(
            add("Widget", "1", "0.00").validate(),
            Err(DomainError::validation("unit price must be at least 0.01"))
        );
        assert!(add("Widget", "1", "-3").validate().unwrap_err().is_validation());
        assert_eq!(
            add("Widget", "1", "0.01").validate().unwrap().unit_price,
            Money::from_minor(1)
        );
    }

    #[test]
    fn position_parsing() {
        let req = |p: &str| RemoveItemRequest { position: p.to_string() };
        assert_eq!(req("3").position(), Ok(3));
        assert_eq!(req(" -2 ").position(), Ok(-2));
        assert!(req("x").position().unwrap_err().is_validation());
        assert!(req("").position().unwrap_err().is_validation());
        assert_eq!(req("99999999999999999999").position(), Ok(i64::MAX));
        assert_eq!(req("-99999999999999999999").position(), Ok(i64::MIN));
    }
}
