//! Checkout step machine.

use crate::cart::Cart;
use crate::checkout::{BillingDetails, Order, PaymentMethod, ShippingDetails};
use crate::error::CommerceError;
use crate::pricing::PricingPolicy;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Steps of the checkout wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Shipping contact and address.
    Shipping,
    /// Billing address.
    Billing,
    /// Payment method and review.
    Payment,
    /// Order placed.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Billing => "billing",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Billing => "Billing",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Step number shown in the progress header (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Billing => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Complete => 4,
        }
    }
}

/// The linear checkout wizard.
///
/// Each `advance` validates the current step's form before moving on;
/// `place_order` is the only way to reach [`CheckoutStep::Complete`].
/// The flow reads the cart but does not own it — clearing the cart after
/// a placed order, like navigation, belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    completed: Vec<CheckoutStep>,
    shipping: ShippingDetails,
    billing: BillingDetails,
    payment: PaymentMethod,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    /// Start a checkout at the shipping step with empty forms.
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Shipping,
            completed: Vec::new(),
            shipping: ShippingDetails::default(),
            billing: BillingDetails::default(),
            payment: PaymentMethod::default(),
        }
    }

    /// Start a checkout with name/email prefilled from the customer.
    pub fn for_customer(display_name: &str, email: &str) -> Self {
        Self {
            shipping: ShippingDetails::prefill(display_name, email),
            ..Self::new()
        }
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Steps already completed, in order.
    pub fn completed(&self) -> &[CheckoutStep] {
        &self.completed
    }

    /// Check if the order has been placed.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }

    /// The shipping form.
    pub fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    /// The billing form.
    pub fn billing(&self) -> &BillingDetails {
        &self.billing
    }

    /// The selected payment method.
    pub fn payment(&self) -> &PaymentMethod {
        &self.payment
    }

    /// Replace the shipping form.
    pub fn set_shipping(&mut self, details: ShippingDetails) {
        self.shipping = details;
    }

    /// Replace the billing form.
    pub fn set_billing(&mut self, details: BillingDetails) {
        self.billing = details;
    }

    /// Select the payment method.
    pub fn set_payment(&mut self, method: PaymentMethod) {
        self.payment = method;
    }

    /// Validate the current step's form and move to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::Shipping => {
                self.shipping.validate()?;
                CheckoutStep::Billing
            }
            CheckoutStep::Billing => {
                self.billing.validate()?;
                CheckoutStep::Payment
            }
            CheckoutStep::Payment | CheckoutStep::Complete => {
                return Err(CommerceError::InvalidTransition {
                    from: self.step.as_str().to_string(),
                    to: "next".to_string(),
                });
            }
        };

        if !self.completed.contains(&self.step) {
            self.completed.push(self.step);
        }
        self.step = next;
        Ok(next)
    }

    /// Step backward; an error at the first step or after completion.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::Billing => CheckoutStep::Shipping,
            CheckoutStep::Payment => CheckoutStep::Billing,
            CheckoutStep::Shipping | CheckoutStep::Complete => {
                return Err(CommerceError::InvalidTransition {
                    from: self.step.as_str().to_string(),
                    to: "previous".to_string(),
                });
            }
        };
        self.step = prev;
        Ok(prev)
    }

    /// Validate the payment method and place the order.
    ///
    /// Requires the payment step and a non-empty cart. On success the flow
    /// is [`CheckoutStep::Complete`]; the caller clears the cart and
    /// navigates to the confirmation page.
    pub fn place_order(
        &mut self,
        cart: &Cart,
        policy: &PricingPolicy,
    ) -> Result<Order, CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(CommerceError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: CheckoutStep::Complete.as_str().to_string(),
            });
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        self.payment.validate()?;

        let order = Order::from_cart(cart, policy, self.shipping.email.clone());
        info!(number = %order.number, method = self.payment.as_str(), "order placed");

        if !self.completed.contains(&self.step) {
            self.completed.push(self.step);
        }
        self.step = CheckoutStep::Complete;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::checkout::CardDetails;
    use crate::money::{Currency, Money};

    fn filled_shipping() -> ShippingDetails {
        ShippingDetails {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "user@example.com".into(),
            phone: "555-0100".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62704".into(),
            country: "United States".into(),
        }
    }

    fn filled_card() -> PaymentMethod {
        PaymentMethod::CreditCard(CardDetails {
            number: "4242 4242 4242 4242".into(),
            name: "John Doe".into(),
            expiry: "12/30".into(),
            cvc: "123".into(),
        })
    }

    fn stocked_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(
            &Product::new("1", "Basketball", Money::new(4999, Currency::USD), "sports", 20),
            1,
        );
        cart
    }

    #[test]
    fn test_new_flow_starts_at_shipping() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert!(flow.completed().is_empty());
        assert_eq!(flow.step().number(), 1);
    }

    #[test]
    fn test_advance_requires_valid_shipping() {
        let mut flow = CheckoutFlow::new();
        assert!(matches!(
            flow.advance(),
            Err(CommerceError::Validation(_))
        ));
        assert_eq!(flow.step(), CheckoutStep::Shipping);

        flow.set_shipping(filled_shipping());
        assert_eq!(flow.advance().unwrap(), CheckoutStep::Billing);
        assert_eq!(flow.completed(), &[CheckoutStep::Shipping]);
    }

    #[test]
    fn test_billing_same_as_shipping_advances() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();

        // Default billing reuses the shipping address.
        assert_eq!(flow.advance().unwrap(), CheckoutStep::Payment);
    }

    #[test]
    fn test_separate_billing_must_be_complete() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();

        flow.set_billing(BillingDetails {
            same_as_shipping: false,
            ..BillingDetails::default()
        });
        assert!(matches!(flow.advance(), Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_go_back() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.go_back().is_err());

        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();
        assert_eq!(flow.go_back().unwrap(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_place_order_happy_path() {
        let mut flow = CheckoutFlow::for_customer("John Doe", "user@example.com");
        let mut shipping = flow.shipping().clone();
        shipping.phone = "555-0100".into();
        shipping.address = "1 Main St".into();
        shipping.city = "Springfield".into();
        shipping.state = "IL".into();
        shipping.zip_code = "62704".into();
        flow.set_shipping(shipping);

        flow.advance().unwrap();
        flow.advance().unwrap();
        flow.set_payment(filled_card());

        let order = flow
            .place_order(&stocked_cart(), &PricingPolicy::default())
            .unwrap();

        assert!(flow.is_complete());
        assert_eq!(order.email, "user@example.com");
        assert_eq!(order.totals.subtotal.amount_cents, 4999);
        assert_eq!(
            flow.completed(),
            &[
                CheckoutStep::Shipping,
                CheckoutStep::Billing,
                CheckoutStep::Payment
            ]
        );
    }

    #[test]
    fn test_place_order_requires_payment_step() {
        let mut flow = CheckoutFlow::new();
        assert!(matches!(
            flow.place_order(&stocked_cart(), &PricingPolicy::default()),
            Err(CommerceError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_place_order_validates_card() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();
        flow.advance().unwrap();

        // Default payment method is an empty card form.
        assert!(matches!(
            flow.place_order(&stocked_cart(), &PricingPolicy::default()),
            Err(CommerceError::Validation(_))
        ));

        // Redirect methods skip card validation entirely.
        flow.set_payment(PaymentMethod::PayPal);
        assert!(flow
            .place_order(&stocked_cart(), &PricingPolicy::default())
            .is_ok());
    }

    #[test]
    fn test_place_order_rejects_empty_cart() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();
        flow.advance().unwrap();
        flow.set_payment(filled_card());

        assert!(matches!(
            flow.place_order(&Cart::new(), &PricingPolicy::default()),
            Err(CommerceError::EmptyCart)
        ));
    }
}
