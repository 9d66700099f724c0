//! Checkout form validation and order-total computation.
//!
//! Validation mirrors the storefront checkout form: six required fields with
//! per-field error messages. Card and zip checks are purely structural - the
//! demo simulates payment, so there is no Luhn or issuer validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::{Email, Price};

/// Required length of a zip code, in ASCII digits.
const ZIP_DIGITS: usize = 6;
/// Required length of a card number, in ASCII digits.
const CARD_DIGITS: usize = 16;

/// Flat shipping fee charged whenever the subtotal is positive.
#[must_use]
pub fn flat_shipping_fee() -> Price {
    Price::from_cents(1500)
}

/// The rich checkout form: shipping and payment fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutForm {
    /// Full name, required.
    pub name: String,
    /// Email, required, `local@domain` shape.
    pub email: String,
    /// Street address, required.
    pub address: String,
    /// City, required.
    pub city: String,
    /// Zip code, exactly 6 digits.
    pub zip: String,
    /// Card number, exactly 16 digits. Simulation only.
    pub card: String,
}

impl CheckoutForm {
    /// Validate every field, collecting all failures at once.
    ///
    /// # Errors
    ///
    /// Returns the full set of per-field error messages when any field
    /// fails; submission must not proceed in that case.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.is_empty() {
            errors.push("name", "Full name is required");
        }
        if Email::parse(&self.email).is_err() {
            errors.push("email", "Valid email is required");
        }
        if self.address.is_empty() {
            errors.push("address", "Address is required");
        }
        if self.city.is_empty() {
            errors.push("city", "City is required");
        }
        if !is_exact_digits(&self.zip, ZIP_DIGITS) {
            errors.push("zip", "Valid 6-digit zip code is required");
        }
        if !is_exact_digits(&self.card, CARD_DIGITS) {
            errors.push("card", "Valid 16-digit card number is required");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// True when `s` is exactly `len` ASCII digits.
fn is_exact_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

/// Per-field validation failures, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    /// Record a failure for a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Whether no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message recorded for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Order totals: subtotal plus flat shipping.
///
/// Always recomputed from current cart state on every request - never cached
/// or stored separately from the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    /// Sum of `price * quantity` over the cart's line items.
    pub subtotal: Price,
    /// Flat fee when the subtotal is positive, zero otherwise.
    pub shipping: Price,
    /// `subtotal + shipping`.
    pub total: Price,
}

impl OrderTotals {
    /// Compute totals for the current cart state.
    #[must_use]
    pub fn compute(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let shipping = if subtotal.is_positive() {
            flat_shipping_fee()
        } else {
            Price::ZERO
        };

        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::product::Product;
    use crate::types::ProductId;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Alex T.".to_owned(),
            email: "alex@example.com".to_owned(),
            address: "1 Main St".to_owned(),
            city: "Anytown".to_owned(),
            zip: "123456".to_owned(),
            card: "1111222233334444".to_owned(),
        }
    }

    fn monitor() -> Product {
        Product {
            id: ProductId::from("p3"),
            name: "4K Ultra HD Monitor".to_owned(),
            price: Price::from_cents(49950),
            description: "27-inch display.".to_owned(),
            image: "https://example.com/monitor.jpg".to_owned(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut form = valid_form();
        form.name = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Full name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_malformed_email_fails() {
        for bad in ["", "no-at", "@x.com", "user@", "user@nodot"] {
            let mut form = valid_form();
            form.email = bad.to_owned();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get("email"), Some("Valid email is required"));
        }
    }

    #[test]
    fn test_zip_must_be_six_digits() {
        for bad in ["12345", "1234567", "12345a", ""] {
            let mut form = valid_form();
            form.zip = bad.to_owned();
            assert!(form.validate().unwrap_err().get("zip").is_some());
        }
    }

    #[test]
    fn test_card_must_be_sixteen_digits() {
        for bad in ["111122223333444", "11112222333344445", "1111-2222-3333-4444"] {
            let mut form = valid_form();
            form.card = bad.to_owned();
            assert!(form.validate().unwrap_err().get("card").is_some());
        }
    }

    #[test]
    fn test_all_failures_collected_at_once() {
        let form = CheckoutForm {
            name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
            card: String::new(),
        };
        assert_eq!(form.validate().unwrap_err().len(), 6);
    }

    #[test]
    fn test_totals_empty_cart_has_no_shipping() {
        let totals = OrderTotals::compute(&Cart::new());
        assert_eq!(totals.subtotal, Price::ZERO);
        assert_eq!(totals.shipping, Price::ZERO);
        assert_eq!(totals.total, Price::ZERO);
    }

    #[test]
    fn test_totals_add_flat_shipping_when_positive() {
        let mut cart = Cart::new();
        cart.add_item(&monitor());

        let totals = OrderTotals::compute(&cart);
        assert_eq!(totals.subtotal, Price::from_cents(49950));
        assert_eq!(totals.shipping, Price::from_cents(1500));
        assert_eq!(totals.total, Price::from_cents(51450));
    }
}
