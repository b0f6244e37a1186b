use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// One entry for the status display slot. Each status-changing event
/// overwrites the previous entry; there is no history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub severity: Severity,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

/// Canonical user-facing status messages.
pub mod messages {
    pub const NOT_SUPPORTED: &str = "Web payments are not supported in this browser.";
    pub const ELIGIBILITY_HINT: &str =
        "This checkout works best in Chrome on an Android device with a UPI wallet installed.";
    pub const CHECKING_AVAILABILITY: &str = "Checking payment availability…";
    pub const PROBE_FAILED: &str = "Error checking payment availability.";
    pub const PAYMENT_SUCCESSFUL: &str = "Payment successful!";
    pub const PAYMENT_CANCELLED: &str = "Payment was cancelled.";
    pub const PAYMENT_TIMED_OUT: &str = "Payment timed out.";
    pub const COMPLETION_FAILED: &str = "Error completing payment.";
}
