use crate::domain::order::PaymentRequestSpec;
use crate::domain::ports::{
    CompletionStatus, PaymentGateway, PaymentRequest, PaymentRequestBox, PaymentResponse,
    PaymentResponseBox,
};
use crate::error::{CheckoutError, PresentError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// What the simulated sheet does once presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetScript {
    /// Resolves with a response whose completion acknowledgment succeeds.
    Complete,
    /// Resolves, but the completion acknowledgment fails.
    CompleteAckFails,
    /// Rejects as dismissed by the user.
    Cancel,
    /// Rejects because the payment method is not supported.
    MethodUnsupported,
    /// Rejects with a generic wallet failure.
    Fail,
    /// Never settles; only an abort or a dropped future ends it.
    NeverSettles,
}

/// What the capability probe answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeScript {
    #[default]
    Supported,
    Unsupported,
    Fails,
}

/// A deterministic stand-in for the browser payment capability.
///
/// The probe answer, sheet behavior, and settle delay are fixed up front, so
/// tests and the demo binary can walk the controller down any path without a
/// real browser.
#[derive(Debug, Clone)]
pub struct ScriptedGateway {
    available: bool,
    probe: ProbeScript,
    sheet: SheetScript,
    settle_after: Option<Duration>,
    abort_succeeds: bool,
}

impl ScriptedGateway {
    pub fn new(sheet: SheetScript) -> Self {
        Self {
            available: true,
            probe: ProbeScript::default(),
            sheet,
            settle_after: None,
            abort_succeeds: true,
        }
    }

    /// A gateway for a browser without the payment capability.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(SheetScript::Complete)
        }
    }

    pub fn with_probe(mut self, probe: ProbeScript) -> Self {
        self.probe = probe;
        self
    }

    /// Delays the sheet's settlement, for exercising the timeout race.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_after = Some(delay);
        self
    }

    /// Makes `abort` fail, as when the sheet settles on its own while being
    /// torn down.
    pub fn with_failing_abort(mut self) -> Self {
        self.abort_succeeds = false;
        self
    }
}

impl PaymentGateway for ScriptedGateway {
    fn is_available(&self) -> bool {
        self.available
    }

    fn create_request(&self, spec: &PaymentRequestSpec) -> Result<PaymentRequestBox> {
        spec.validate()?;
        Ok(Box::new(ScriptedRequest {
            probe: self.probe,
            sheet: self.sheet,
            settle_after: self.settle_after,
            abort_succeeds: self.abort_succeeds,
            reference: spec.reference.to_string(),
        }))
    }
}

struct ScriptedRequest {
    probe: ProbeScript,
    sheet: SheetScript,
    settle_after: Option<Duration>,
    abort_succeeds: bool,
    reference: String,
}

#[async_trait]
impl PaymentRequest for ScriptedRequest {
    async fn can_make_payment(&self) -> Result<bool> {
        match self.probe {
            ProbeScript::Supported => Ok(true),
            ProbeScript::Unsupported => Ok(false),
            ProbeScript::Fails => Err(CheckoutError::Probe(
                "simulated probe failure".to_string(),
            )),
        }
    }

    async fn show(&self) -> std::result::Result<PaymentResponseBox, PresentError> {
        if let Some(delay) = self.settle_after {
            tokio::time::sleep(delay).await;
        }
        match self.sheet {
            SheetScript::Complete => Ok(Box::new(ScriptedResponse {
                reference: self.reference.clone(),
                ack_succeeds: true,
            }) as PaymentResponseBox),
            SheetScript::CompleteAckFails => Ok(Box::new(ScriptedResponse {
                reference: self.reference.clone(),
                ack_succeeds: false,
            }) as PaymentResponseBox),
            SheetScript::Cancel => Err(PresentError::Aborted),
            SheetScript::MethodUnsupported => Err(PresentError::NotSupported),
            SheetScript::Fail => Err(PresentError::Other(
                "simulated wallet failure".to_string(),
            )),
            SheetScript::NeverSettles => std::future::pending().await,
        }
    }

    async fn abort(&self) -> Result<()> {
        if self.abort_succeeds {
            Ok(())
        } else {
            Err(CheckoutError::Abort(
                "sheet already settled".to_string(),
            ))
        }
    }
}

struct ScriptedResponse {
    reference: String,
    ack_succeeds: bool,
}

#[async_trait]
impl PaymentResponse for ScriptedResponse {
    fn details(&self) -> serde_json::Value {
        serde_json::json!({
            "instrument": "scripted-upi",
            "tr": self.reference,
        })
    }

    async fn complete(&self, _status: CompletionStatus) -> Result<()> {
        if self.ack_succeeds {
            Ok(())
        } else {
            Err(CheckoutError::Completion(
                "simulated acknowledgment failure".to_string(),
            ))
        }
    }
}
