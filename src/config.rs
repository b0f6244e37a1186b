use crate::domain::merchant::MerchantConfig;
use crate::domain::order::{Amount, OrderTotal};
use crate::error::{CheckoutError, Result};
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::time::Duration;

/// How long the presented sheet may stay unsettled before it is aborted.
pub const DEFAULT_SHEET_TIMEOUT_MS: u64 = 1_200_000;

/// What to do when the capability probe reports that no instrument can settle
/// the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeUnsupportedAction {
    /// End the attempt silently and leave the trigger disabled. Matches the
    /// historical page behavior.
    #[default]
    StayDisabled,
    /// Redirect to the wallet deep link instead of presenting a sheet.
    DeepLink,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub merchant: MerchantConfig,
    pub order: OrderTotal,
    /// Supported payment instrument identifier, e.g. a payment-method
    /// manifest URL.
    pub payment_method: String,
    /// URL the wallet reports the transaction result to.
    pub callback_url: String,
    /// Custom URI scheme of the wallet app, for the deep-link fallback.
    pub deep_link_scheme: String,
    pub sheet_timeout_ms: u64,
    pub probe_unsupported: ProbeUnsupportedAction,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            merchant: MerchantConfig {
                payee_address: "merchant-demo@okbank".to_string(),
                payee_name: "Demo Merchant".to_string(),
                merchant_category_code: "5411".to_string(),
                transaction_note: "Demo checkout".to_string(),
            },
            order: OrderTotal {
                currency: "INR".to_string(),
                value: Amount::new(dec!(1.00)).expect("1.00 is positive"),
            },
            payment_method: "https://tez.google.com/pay".to_string(),
            callback_url: "https://merchant.example/checkout/result".to_string(),
            deep_link_scheme: "tez".to_string(),
            sheet_timeout_ms: DEFAULT_SHEET_TIMEOUT_MS,
            probe_unsupported: ProbeUnsupportedAction::default(),
        }
    }
}

impl CheckoutConfig {
    pub fn sheet_timeout(&self) -> Duration {
        Duration::from_millis(self.sheet_timeout_ms)
    }

    /// Validates fields that `Deserialize` cannot enforce on its own.
    pub fn validate(&self) -> Result<()> {
        self.merchant.validate()?;
        if self.sheet_timeout_ms == 0 {
            return Err(CheckoutError::Config(
                "sheet_timeout_ms must be positive".to_string(),
            ));
        }
        if self.deep_link_scheme.is_empty()
            || !self.deep_link_scheme.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(CheckoutError::Config(format!(
                "deep link scheme {:?} is not a valid URI scheme",
                self.deep_link_scheme
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CheckoutError::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CheckoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sheet_timeout(), Duration::from_millis(1_200_000));
        assert_eq!(config.probe_unsupported, ProbeUnsupportedAction::StayDisabled);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = CheckoutConfig::from_json(
            r#"{
                "merchant": {
                    "payee_address": "shop@okbank",
                    "payee_name": "Corner Shop",
                    "merchant_category_code": "5411",
                    "transaction_note": "Groceries"
                },
                "sheet_timeout_ms": 60000,
                "probe_unsupported": "deep-link"
            }"#,
        )
        .unwrap();

        assert_eq!(config.merchant.payee_address, "shop@okbank");
        assert_eq!(config.sheet_timeout_ms, 60_000);
        assert_eq!(config.probe_unsupported, ProbeUnsupportedAction::DeepLink);
        // untouched fields keep their defaults
        assert_eq!(config.deep_link_scheme, "tez");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = CheckoutConfig::from_json(r#"{"sheet_timeout_ms": 0}"#);
        assert!(matches!(result, Err(CheckoutError::Config(_))));
    }

    #[test]
    fn test_bad_merchant_rejected() {
        let result = CheckoutConfig::from_json(
            r#"{
                "merchant": {
                    "payee_address": "no-handle",
                    "payee_name": "Corner Shop",
                    "merchant_category_code": "5411",
                    "transaction_note": ""
                }
            }"#,
        );
        assert!(matches!(result, Err(CheckoutError::Validation(_))));
    }
}
