mod common;

use common::harness;
use upi_checkout::application::controller::AttemptOutcome;
use upi_checkout::config::CheckoutConfig;
use upi_checkout::domain::merchant::MerchantConfig;
use upi_checkout::domain::ports::TriggerControl;
use upi_checkout::infrastructure::scripted::{ScriptedGateway, SheetScript};

#[tokio::test]
async fn test_unsupported_method_degrades_to_deep_link() {
    let h = harness(
        ScriptedGateway::new(SheetScript::MethodUnsupported),
        CheckoutConfig::default(),
    );

    let outcome = h.controller.start_attempt().await;

    assert_eq!(outcome, AttemptOutcome::FellBack);
    assert!(h.trigger.is_enabled());

    let uri = h.navigator.last().unwrap();
    assert!(uri.starts_with("tez://upi/pay?"));
}

#[tokio::test]
async fn test_deep_link_encodes_payee_fields() {
    let config = CheckoutConfig {
        merchant: MerchantConfig::new("corner.shop@okbank", "Corner Shop & Co", "5411", "")
            .unwrap(),
        ..CheckoutConfig::default()
    };
    let h = harness(ScriptedGateway::new(SheetScript::MethodUnsupported), config);

    h.controller.start_attempt().await;

    let uri = h.navigator.last().unwrap();
    assert!(uri.contains("pa=corner.shop%40okbank"));
    assert!(uri.contains("pn=Corner%20Shop%20%26%20Co"));
    assert!(uri.contains("cu=INR"));
    assert!(uri.contains("am=1.00"));
}

#[tokio::test]
async fn test_deep_link_carries_nonempty_reference() {
    let h = harness(
        ScriptedGateway::new(SheetScript::MethodUnsupported),
        CheckoutConfig::default(),
    );

    h.controller.start_attempt().await;

    let uri = h.navigator.last().unwrap();
    let reference = uri
        .split("tr=")
        .nth(1)
        .map(|rest| rest.split('&').next().unwrap_or(""))
        .unwrap_or("");
    assert!(!reference.is_empty());
}

#[tokio::test]
async fn test_fallback_uses_fresh_references() {
    let h = harness(
        ScriptedGateway::new(SheetScript::MethodUnsupported),
        CheckoutConfig::default(),
    );

    h.controller.start_attempt().await;
    std::thread::sleep(std::time::Duration::from_millis(2));
    h.controller.start_attempt().await;

    let uris = h.navigator.all();
    assert_eq!(uris.len(), 2);

    let tr = |uri: &str| {
        uri.split("tr=")
            .nth(1)
            .map(|rest| rest.split('&').next().unwrap_or("").to_string())
            .unwrap_or_default()
    };
    assert_ne!(tr(&uris[0]), tr(&uris[1]));
}

#[tokio::test]
async fn test_custom_scheme_is_used() {
    let config = CheckoutConfig {
        deep_link_scheme: "upiwallet".to_string(),
        ..CheckoutConfig::default()
    };
    let h = harness(ScriptedGateway::new(SheetScript::MethodUnsupported), config);

    h.controller.start_attempt().await;

    assert!(h.navigator.last().unwrap().starts_with("upiwallet://upi/pay?"));
}
