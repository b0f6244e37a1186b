use crate::error::CheckoutError;
use serde::Deserialize;

/// Identity of the payee as it appears in the UPI collect request.
///
/// Fixed at construction and never mutated; every payment attempt reads the
/// same merchant record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MerchantConfig {
    /// Virtual payment address in `handle@bank` form.
    pub payee_address: String,
    /// Display name shown on the payment sheet and in the wallet app.
    pub payee_name: String,
    /// Four-digit ISO 18245 merchant category code.
    pub merchant_category_code: String,
    /// Free-text note attached to the transaction, at most 80 characters.
    pub transaction_note: String,
}

impl MerchantConfig {
    pub fn new(
        payee_address: impl Into<String>,
        payee_name: impl Into<String>,
        merchant_category_code: impl Into<String>,
        transaction_note: impl Into<String>,
    ) -> Result<Self, CheckoutError> {
        let merchant = Self {
            payee_address: payee_address.into(),
            payee_name: payee_name.into(),
            merchant_category_code: merchant_category_code.into(),
            transaction_note: transaction_note.into(),
        };
        merchant.validate()?;
        Ok(merchant)
    }

    pub fn validate(&self) -> Result<(), CheckoutError> {
        if !self.payee_address.contains('@') || self.payee_address.contains(char::is_whitespace) {
            return Err(CheckoutError::Validation(format!(
                "payee address {:?} is not a valid VPA",
                self.payee_address
            )));
        }
        if self.payee_name.trim().is_empty() {
            return Err(CheckoutError::Validation(
                "payee name must not be empty".to_string(),
            ));
        }
        if self.merchant_category_code.len() != 4
            || !self
                .merchant_category_code
                .chars()
                .all(|c| c.is_ascii_digit())
        {
            return Err(CheckoutError::Validation(format!(
                "merchant category code {:?} must be four digits",
                self.merchant_category_code
            )));
        }
        if self.transaction_note.chars().count() > 80 {
            return Err(CheckoutError::Validation(
                "transaction note exceeds 80 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> MerchantConfig {
        MerchantConfig::new("shop@okbank", "Corner Shop", "5411", "Groceries").unwrap()
    }

    #[test]
    fn test_valid_merchant() {
        let merchant = valid();
        assert_eq!(merchant.payee_address, "shop@okbank");
    }

    #[test]
    fn test_vpa_requires_at_sign() {
        let result = MerchantConfig::new("shop.okbank", "Corner Shop", "5411", "");
        assert!(matches!(result, Err(CheckoutError::Validation(_))));
    }

    #[test]
    fn test_vpa_rejects_whitespace() {
        let result = MerchantConfig::new("shop @okbank", "Corner Shop", "5411", "");
        assert!(matches!(result, Err(CheckoutError::Validation(_))));
    }

    #[test]
    fn test_mcc_must_be_four_digits() {
        assert!(MerchantConfig::new("shop@okbank", "Corner Shop", "54", "").is_err());
        assert!(MerchantConfig::new("shop@okbank", "Corner Shop", "54a1", "").is_err());
    }

    #[test]
    fn test_note_length_limit() {
        let long_note = "x".repeat(81);
        let result = MerchantConfig::new("shop@okbank", "Corner Shop", "5411", long_note);
        assert!(matches!(result, Err(CheckoutError::Validation(_))));

        let ok_note = "x".repeat(80);
        assert!(MerchantConfig::new("shop@okbank", "Corner Shop", "5411", ok_note).is_ok());
    }
}
