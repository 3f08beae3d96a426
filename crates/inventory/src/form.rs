//! Boundary validation for the add/edit forms.
//!
//! The store trusts whatever it is given, so every check on user input
//! happens here before a record is built.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use pharmacy_core::{DomainError, DomainResult};

use crate::item::{InventoryItem, ItemFields};

/// `YYYY-MM-DD`, the only accepted expiration date layout.
pub const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw strings posted by the add/edit forms.
///
/// Missing fields deserialize as empty strings so they fail validation with a
/// readable message instead of a framework rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub expiration_date: String,
}

impl ItemForm {
    /// Validate and convert into storable fields.
    ///
    /// Checks run name, quantity, price, then date; the first failure wins.
    pub fn validate(&self) -> DomainResult<ItemFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Medicine name is required."));
        }

        let quantity: i64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("Quantity must be a whole number."))?;
        if quantity < 0 {
            return Err(DomainError::validation("Quantity cannot be negative."));
        }

        let price: f64 = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| DomainError::validation("Price must be a number."))?;
        if price < 0.0 {
            return Err(DomainError::validation("Price cannot be negative."));
        }

        let expiration_date = parse_expiration_date(&self.expiration_date)?;

        Ok(ItemFields {
            name: name.to_string(),
            quantity,
            price,
            expiration_date,
        })
    }
}

impl From<&InventoryItem> for ItemForm {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name().to_string(),
            quantity: item.quantity().to_string(),
            price: item.price().to_string(),
            expiration_date: item.expiration_date().format(EXPIRATION_DATE_FORMAT).to_string(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting anything else (including impossible
/// calendar dates such as `2025-02-30`).
///
/// chrono's `%Y` also takes short and signed years, so the year must be
/// exactly four digits and not `0000`.
pub fn parse_expiration_date(raw: &str) -> DomainResult<NaiveDate> {
    let invalid =
        || DomainError::validation("Invalid expiration date format. Please use YYYY-MM-DD.");

    let raw = raw.trim();
    if !has_four_digit_year(raw) {
        return Err(invalid());
    }
    let date = NaiveDate::parse_from_str(raw, EXPIRATION_DATE_FORMAT).map_err(|_| invalid())?;
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

fn has_four_digit_year(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, quantity: &str, price: &str, date: &str) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
            expiration_date: date.to_string(),
        }
    }

    fn message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        let fields = form("  Aspirin ", "100", "2.50", "2026-01-01").validate().unwrap();
        assert_eq!(fields.name, "Aspirin");
        assert_eq!(fields.quantity, 100);
        assert_eq!(fields.price, 2.5);
        assert_eq!(fields.expiration_date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn zero_quantity_and_price_are_allowed() {
        let fields = form("Saline", "0", "0", "2030-12-31").validate().unwrap();
        assert_eq!(fields.quantity, 0);
        assert_eq!(fields.price, 0.0);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = form("   ", "1", "1", "2026-01-01").validate().unwrap_err();
        assert_eq!(message(err), "Medicine name is required.");
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        let err = form("Aspirin", "ten", "1", "2026-01-01").validate().unwrap_err();
        assert_eq!(message(err), "Quantity must be a whole number.");

        let err = form("Aspirin", "1.5", "1", "2026-01-01").validate().unwrap_err();
        assert_eq!(message(err), "Quantity must be a whole number.");
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = form("Aspirin", "-1", "1", "2026-01-01").validate().unwrap_err();
        assert_eq!(message(err), "Quantity cannot be negative.");
    }

    #[test]
    fn non_numeric_or_non_finite_price_is_rejected() {
        for bad in ["", "abc", "NaN", "inf", "-inf"] {
            let err = form("Aspirin", "1", bad, "2026-01-01").validate().unwrap_err();
            assert_eq!(message(err), "Price must be a number.", "input {bad:?}");
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = form("Aspirin", "1", "-0.01", "2026-01-01").validate().unwrap_err();
        assert_eq!(message(err), "Price cannot be negative.");
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for bad in [
            "",
            "01/01/2026",
            "2026-13-01",
            "2025-02-30",
            "tomorrow",
            "2026-01-01T00:00",
            "26-01-01",
            "1-01-01",
            "+12345-01-01",
            "-0001-01-01",
            "0000-01-01",
        ] {
            let err = form("Aspirin", "1", "1", bad).validate().unwrap_err();
            assert_eq!(
                message(err),
                "Invalid expiration date format. Please use YYYY-MM-DD.",
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn accepted_dates_round_trip_to_the_same_text() {
        for raw in ["0026-01-01", "2026-1-5", " 2026-01-05 "] {
            let date = parse_expiration_date(raw).unwrap();
            let stored = date.format(EXPIRATION_DATE_FORMAT).to_string();
            assert_eq!(stored.len(), 10, "input {raw:?} stored as {stored:?}");
            assert_eq!(parse_expiration_date(&stored).unwrap(), date);
        }
    }

    #[test]
    fn first_failure_wins() {
        let err = form("", "x", "y", "z").validate().unwrap_err();
        assert_eq!(message(err), "Medicine name is required.");
    }

    #[test]
    fn prefill_from_item_validates_back_to_same_fields() {
        let fields = form("Ibuprofen", "12", "4.75", "2027-06-30").validate().unwrap();
        let item = InventoryItem::create(fields.clone());

        let prefilled = ItemForm::from(&item);
        assert_eq!(prefilled.expiration_date, "2027-06-30");
        assert_eq!(prefilled.validate().unwrap(), fields);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-negative quantity, non-negative finite price and
            /// real calendar date is accepted unchanged.
            #[test]
            fn valid_input_is_accepted(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                quantity in 0i64..=i64::MAX,
                price in 0.0f64..1_000_000.0,
                days in 0i64..73_000,
            ) {
                let date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + chrono::Duration::days(days);
                let f = form(&name, &quantity.to_string(), &price.to_string(), &date.format(EXPIRATION_DATE_FORMAT).to_string());

                let fields = f.validate().unwrap();
                prop_assert_eq!(fields.name, name.trim().to_string());
                prop_assert_eq!(fields.quantity, quantity);
                prop_assert_eq!(fields.price, price);
                prop_assert_eq!(fields.expiration_date, date);
            }

            /// Property: negative quantities never validate.
            #[test]
            fn negative_quantity_never_validates(quantity in i64::MIN..0) {
                let f = form("Aspirin", &quantity.to_string(), "1", "2026-01-01");
                prop_assert!(f.validate().is_err());
            }

            /// Property: a day past the end of the month is always rejected.
            #[test]
            fn impossible_dates_are_rejected(year in 1900i32..2200, month in 1u32..=12) {
                let first_of_next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
                };
                let last_day = first_of_next.pred_opt().unwrap().day();
                let raw = format!("{year:04}-{month:02}-{:02}", last_day + 1);

                prop_assert!(parse_expiration_date(&raw).is_err());
            }
        }
    }
}
