use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("availability check failed: {0}")]
    Probe(String),
    #[error("completion acknowledgment failed: {0}")]
    Completion(String),
    #[error("abort failed: {0}")]
    Abort(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// How a payment-sheet presentation was rejected. The controller branches on
/// the rejection reason, so it gets its own type instead of a
/// `CheckoutError` variant.
#[derive(Error, Debug)]
pub enum PresentError {
    #[error("payment method not supported")]
    NotSupported,
    #[error("payment request was aborted by the user")]
    Aborted,
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
