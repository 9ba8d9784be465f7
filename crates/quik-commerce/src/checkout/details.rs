//! Checkout form details and their validation.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

const DEFAULT_COUNTRY: &str = "United States";

fn missing<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<(), CommerceError> {
    let labels: Vec<&str> = fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();

    if labels.is_empty() {
        Ok(())
    } else {
        Err(CommerceError::Validation(labels.join(", ")))
    }
}

/// Shipping step form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for ShippingDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ShippingDetails {
    /// Prefill name and email from the signed-in customer, the way the
    /// checkout form does: first word of the display name becomes the
    /// first name, the second (if any) the last name.
    pub fn prefill(display_name: &str, email: &str) -> Self {
        let mut words = display_name.split_whitespace();
        Self {
            first_name: words.next().unwrap_or_default().to_string(),
            last_name: words.next().unwrap_or_default().to_string(),
            email: email.to_string(),
            ..Self::default()
        }
    }

    /// Every field except country is required.
    pub fn validate(&self) -> Result<(), CommerceError> {
        missing([
            ("first name", self.first_name.as_str()),
            ("last name", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zip code", self.zip_code.as_str()),
        ])
    }
}

/// Billing step form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingDetails {
    /// Reuse the shipping address; when set, the rest is not required.
    pub same_as_shipping: bool,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for BillingDetails {
    fn default() -> Self {
        Self {
            same_as_shipping: true,
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl BillingDetails {
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.same_as_shipping {
            return Ok(());
        }
        missing([
            ("first name", self.first_name.as_str()),
            ("last name", self.last_name.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zip code", self.zip_code.as_str()),
        ])
    }
}

/// Card fields for the credit-card payment method.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CardDetails {
    pub number: String,
    pub name: String,
    pub expiry: String,
    pub cvc: String,
}

impl CardDetails {
    pub fn validate(&self) -> Result<(), CommerceError> {
        missing([
            ("card number", self.number.as_str()),
            ("name on card", self.name.as_str()),
            ("expiry", self.expiry.as_str()),
            ("cvc", self.cvc.as_str()),
        ])
    }
}

/// Selected payment method.
///
/// Only the card method carries fields to validate; the redirect-style
/// methods collect nothing here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PaymentMethod {
    CreditCard(CardDetails),
    PayPal,
    BankTransfer,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::CreditCard(CardDetails::default())
    }
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard(_) => "credit-card",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::BankTransfer => "bank-transfer",
        }
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        match self {
            PaymentMethod::CreditCard(card) => card.validate(),
            PaymentMethod::PayPal | PaymentMethod::BankTransfer => Ok(()),
        }
    }
}
