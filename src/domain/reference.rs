use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const REFERENCE_TAG: &str = "TXN";

/// Per-attempt transaction reference: a constant tag followed by the
/// wall-clock timestamp in milliseconds.
///
/// Uniqueness across attempts relies on clock granularity only; two attempts
/// started at different timestamps get distinct references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReference(String);

impl TransactionReference {
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Self(format!("{REFERENCE_TAG}{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reference_carries_tag() {
        let reference = TransactionReference::generate();
        assert!(reference.as_str().starts_with(REFERENCE_TAG));
        assert!(reference.as_str().len() > REFERENCE_TAG.len());
    }

    #[test]
    fn test_references_distinct_across_timestamps() {
        let first = TransactionReference::generate();
        std::thread::sleep(Duration::from_millis(2));
        let second = TransactionReference::generate();
        assert_ne!(first, second);
    }
}
