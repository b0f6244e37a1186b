use crate::config::{CheckoutConfig, ProbeUnsupportedAction};
use crate::domain::deeplink;
use crate::domain::environment::ClientEnvironment;
use crate::domain::order::PaymentRequestSpec;
use crate::domain::ports::{
    CompletionStatus, NavigatorBox, PaymentGatewayBox, PaymentRequestBox, PaymentResponseBox,
    StatusSinkBox, TriggerControlBox,
};
use crate::domain::reference::TransactionReference;
use crate::domain::status::{Status, messages};
use crate::error::PresentError;

/// How one payment attempt ended. Terminal; the controller is back in its
/// idle state once this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Another attempt was still in flight; nothing happened.
    Busy,
    /// The browser has no payment capability; no request was constructed.
    Unavailable,
    /// The request description failed validation. Non-retryable.
    ConstructionFailed,
    /// The capability probe itself errored.
    ProbeFailed,
    /// The probe found no instrument and the configured policy left the
    /// checkout disabled.
    ProbeUnsupported,
    /// The page was handed the wallet deep link.
    FellBack,
    /// The user dismissed the sheet.
    Cancelled,
    /// The sheet outlived the client-side timeout and was aborted.
    TimedOut,
    /// The sheet rejected with an unclassified reason.
    Failed(String),
    /// The payment went through but the completion acknowledgment failed.
    AckFailed,
    /// Paid and acknowledged.
    Completed,
}

/// Drives one payment attempt from user intent to terminal status.
///
/// `CheckoutController` owns its four collaborators as injected ports: the
/// browser payment capability, the status display, the trigger control, and
/// the page navigator. All per-attempt state is local to `start_attempt`;
/// the only cross-attempt state is the trigger's enabled flag, which blocks
/// re-entry while an attempt is in flight.
pub struct CheckoutController {
    gateway: PaymentGatewayBox,
    status: StatusSinkBox,
    trigger: TriggerControlBox,
    navigator: NavigatorBox,
    config: CheckoutConfig,
}

impl CheckoutController {
    pub fn new(
        gateway: PaymentGatewayBox,
        status: StatusSinkBox,
        trigger: TriggerControlBox,
        navigator: NavigatorBox,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            gateway,
            status,
            trigger,
            navigator,
            config,
        }
    }

    /// Page-load hook. Reports a missing payment capability, or an advisory
    /// hint when the device is unlikely to have the wallet flow. Never
    /// starts an attempt.
    pub fn on_page_load(&self, env: &ClientEnvironment) {
        if !self.gateway.is_available() {
            self.status.update(Status::error(messages::NOT_SUPPORTED));
        } else if !env.supports_wallet_deep_link() {
            self.status.update(Status::info(messages::ELIGIBILITY_HINT));
        }
    }

    /// Runs one payment attempt end to end.
    ///
    /// The trigger is disabled once a request has been constructed and
    /// re-enabled when the attempt settles, on every path except the
    /// probe-found-no-instrument path under the `StayDisabled` policy.
    pub async fn start_attempt(&self) -> AttemptOutcome {
        if !self.trigger.is_enabled() {
            return AttemptOutcome::Busy;
        }
        if !self.gateway.is_available() {
            self.status.update(Status::error(messages::NOT_SUPPORTED));
            return AttemptOutcome::Unavailable;
        }

        let reference = TransactionReference::generate();
        tracing::debug!(%reference, "starting payment attempt");
        let spec = PaymentRequestSpec {
            method: self.config.payment_method.clone(),
            merchant: self.config.merchant.clone(),
            reference,
            callback_url: self.config.callback_url.clone(),
            total: self.config.order.clone(),
        };

        let request = match self.gateway.create_request(&spec) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "payment request construction failed");
                self.status
                    .update(Status::error(format!("Could not build payment request: {e}")));
                return AttemptOutcome::ConstructionFailed;
            }
        };

        self.trigger.set_enabled(false);
        self.status
            .update(Status::info(messages::CHECKING_AVAILABILITY));

        match request.can_make_payment().await {
            Err(e) => {
                tracing::warn!(error = %e, "capability probe failed");
                self.status.update(Status::error(messages::PROBE_FAILED));
                self.trigger.set_enabled(true);
                AttemptOutcome::ProbeFailed
            }
            Ok(false) => match self.config.probe_unsupported {
                ProbeUnsupportedAction::StayDisabled => {
                    tracing::info!("no instrument can settle this request; checkout stays disabled");
                    AttemptOutcome::ProbeUnsupported
                }
                ProbeUnsupportedAction::DeepLink => {
                    self.deep_link_fallback();
                    self.trigger.set_enabled(true);
                    AttemptOutcome::FellBack
                }
            },
            Ok(true) => self.present_and_race(request).await,
        }
    }

    /// Presents the sheet and races it against the configured timeout.
    /// Exactly one of the two drives the outcome: the timer is dropped when
    /// the sheet settles first, the sheet is aborted when the timer fires
    /// first. The trigger is re-enabled exactly once on every exit path.
    async fn present_and_race(&self, request: PaymentRequestBox) -> AttemptOutcome {
        let outcome = tokio::select! {
            result = request.show() => match result {
                Ok(response) => self.finalize_success(response).await,
                Err(PresentError::NotSupported) => {
                    self.deep_link_fallback();
                    AttemptOutcome::FellBack
                }
                Err(PresentError::Aborted) => {
                    self.status.update(Status::info(messages::PAYMENT_CANCELLED));
                    AttemptOutcome::Cancelled
                }
                Err(PresentError::Other(message)) => {
                    self.status
                        .update(Status::error(format!("Payment failed: {message}")));
                    AttemptOutcome::Failed(message)
                }
            },
            _ = tokio::time::sleep(self.config.sheet_timeout()) => {
                match request.abort().await {
                    Ok(()) => {
                        self.status.update(Status::error(messages::PAYMENT_TIMED_OUT));
                        AttemptOutcome::TimedOut
                    }
                    Err(e) => {
                        // The sheet settled while we were tearing it down;
                        // leave whatever status that produced alone.
                        tracing::warn!(error = %e, "abort lost the race to the sheet settling");
                        AttemptOutcome::TimedOut
                    }
                }
            }
        };
        self.trigger.set_enabled(true);
        outcome
    }

    /// The sheet resolved with a response: log the opaque payload,
    /// acknowledge it, and report the terminal status. There is no server
    /// round-trip; the response is not parsed.
    async fn finalize_success(&self, response: PaymentResponseBox) -> AttemptOutcome {
        tracing::info!(details = %response.details(), "payment sheet resolved");
        match response.complete(CompletionStatus::Success).await {
            Ok(()) => {
                self.status
                    .update(Status::success(messages::PAYMENT_SUCCESSFUL));
                AttemptOutcome::Completed
            }
            Err(e) => {
                tracing::warn!(error = %e, "completion acknowledgment failed");
                self.status
                    .update(Status::error(messages::COMPLETION_FAILED));
                AttemptOutcome::AckFailed
            }
        }
    }

    /// Hands the page a wallet deep link with a fresh transaction reference.
    /// Navigation is a full page transition; nothing after it is observable
    /// from this controller.
    fn deep_link_fallback(&self) {
        let reference = TransactionReference::generate();
        let uri = deeplink::wallet_pay_uri(
            &self.config.deep_link_scheme,
            &self.config.merchant,
            &self.config.order,
            &reference,
        );
        tracing::info!(%uri, "redirecting to wallet deep link");
        self.navigator.navigate(&uri);
    }
}
