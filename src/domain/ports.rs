use crate::domain::order::PaymentRequestSpec;
use crate::domain::status::Status;
use crate::error::{PresentError, Result};
use async_trait::async_trait;

/// Signal passed back to the sheet once the merchant has taken the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Success,
    Fail,
}

/// The browser's payment capability as seen from the page.
pub trait PaymentGateway: Send + Sync {
    /// Whether the capability exists at all in this browser.
    fn is_available(&self) -> bool;
    /// Constructs a request from the given description. Fails synchronously
    /// on malformed instrument data.
    fn create_request(&self, spec: &PaymentRequestSpec) -> Result<PaymentRequestBox>;
}

/// One constructed payment request, presentable exactly once.
#[async_trait]
pub trait PaymentRequest: Send + Sync {
    /// Probes whether the user has an instrument that can settle this
    /// request.
    async fn can_make_payment(&self) -> Result<bool>;
    /// Presents the payment sheet and waits for the user to settle it.
    async fn show(&self) -> std::result::Result<PaymentResponseBox, PresentError>;
    /// Tears the sheet down. Fails when the sheet already settled on its own.
    async fn abort(&self) -> Result<()>;
}

/// The sheet's answer after the user authorized payment.
#[async_trait]
pub trait PaymentResponse: Send + Sync {
    /// Opaque instrument payload; logged, never parsed.
    fn details(&self) -> serde_json::Value;
    /// Acknowledges the response so the sheet can close.
    async fn complete(&self, status: CompletionStatus) -> Result<()>;
}

/// The text region the user watches; overwritten on each status change.
pub trait StatusSink: Send + Sync {
    fn update(&self, status: Status);
}

/// The clickable element that starts an attempt; disabled while one is in
/// flight.
pub trait TriggerControl: Send + Sync {
    fn set_enabled(&self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

/// Full-page navigation, used for the wallet deep-link fallback.
pub trait Navigator: Send + Sync {
    fn navigate(&self, uri: &str);
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type PaymentRequestBox = Box<dyn PaymentRequest>;
pub type PaymentResponseBox = Box<dyn PaymentResponse>;
pub type StatusSinkBox = Box<dyn StatusSink>;
pub type TriggerControlBox = Box<dyn TriggerControl>;
pub type NavigatorBox = Box<dyn Navigator>;
