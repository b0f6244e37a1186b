use crate::domain::merchant::MerchantConfig;
use crate::domain::reference::TransactionReference;
use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// A positive monetary amount.
///
/// Wrapper around `rust_decimal::Decimal` so that an order total can never be
/// zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CheckoutError::Validation(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The order total presented on the payment sheet: a currency code and a
/// positive decimal amount. Single-currency by design.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderTotal {
    pub currency: String,
    pub value: Amount,
}

impl OrderTotal {
    pub fn new(currency: impl Into<String>, value: Amount) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }
}

/// Everything a gateway needs to construct one payment request.
///
/// Built fresh for each attempt and discarded when the attempt settles.
#[derive(Debug, Clone)]
pub struct PaymentRequestSpec {
    /// Identifier of the supported payment instrument, e.g. a payment-method
    /// manifest URL.
    pub method: String,
    pub merchant: MerchantConfig,
    pub reference: TransactionReference,
    /// URL the wallet reports the transaction result to.
    pub callback_url: String,
    pub total: OrderTotal,
}

impl PaymentRequestSpec {
    /// Checks the instrument data the same way a payment-request constructor
    /// would; a failure here is local and non-retryable.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.method.trim().is_empty() {
            return Err(CheckoutError::Validation(
                "payment method identifier must not be empty".to_string(),
            ));
        }
        self.merchant.validate()?;
        if self.reference.as_str().is_empty() {
            return Err(CheckoutError::Validation(
                "transaction reference must not be empty".to_string(),
            ));
        }
        if !self.callback_url.starts_with("https://") {
            return Err(CheckoutError::Validation(format!(
                "callback URL {:?} must be https",
                self.callback_url
            )));
        }
        Ok(())
    }
}
