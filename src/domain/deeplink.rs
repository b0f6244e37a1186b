use crate::domain::merchant::MerchantConfig;
use crate::domain::order::OrderTotal;
use crate::domain::reference::TransactionReference;

/// Builds the wallet deep-link URI used when the in-page payment sheet is not
/// available: `<scheme>://upi/pay?pa=..&pn=..&am=..&cu=..&tr=..`.
///
/// Payee address and name are percent-encoded; amount and currency pass
/// through as-is.
pub fn wallet_pay_uri(
    scheme: &str,
    merchant: &MerchantConfig,
    total: &OrderTotal,
    reference: &TransactionReference,
) -> String {
    format!(
        "{scheme}://upi/pay?pa={pa}&pn={pn}&am={am}&cu={cu}&tr={tr}",
        pa = urlencoding::encode(&merchant.payee_address),
        pn = urlencoding::encode(&merchant.payee_name),
        am = total.value,
        cu = total.currency,
        tr = reference,
    )
}
