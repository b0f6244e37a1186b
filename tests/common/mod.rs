use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use upi_checkout::application::controller::CheckoutController;
use upi_checkout::config::CheckoutConfig;
use upi_checkout::domain::ports::{Navigator, StatusSink, TriggerControl};
use upi_checkout::domain::status::Status;
use upi_checkout::infrastructure::scripted::ScriptedGateway;

/// Captures every status update so tests can assert on the final message.
#[derive(Default, Clone)]
pub struct RecordingPanel {
    statuses: Arc<Mutex<Vec<Status>>>,
}

impl RecordingPanel {
    pub fn last(&self) -> Option<Status> {
        self.statuses.lock().unwrap().last().cloned()
    }

    pub fn all(&self) -> Vec<Status> {
        self.statuses.lock().unwrap().clone()
    }
}

impl StatusSink for RecordingPanel {
    fn update(&self, status: Status) {
        self.statuses.lock().unwrap().push(status);
    }
}

#[derive(Clone)]
pub struct TestTrigger {
    enabled: Arc<AtomicBool>,
}

impl Default for TestTrigger {
    fn default() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl TriggerControl for TestTrigger {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

#[derive(Default, Clone)]
pub struct RecordingNavigator {
    uris: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<String> {
        self.uris.lock().unwrap().last().cloned()
    }

    pub fn all(&self) -> Vec<String> {
        self.uris.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, uri: &str) {
        self.uris.lock().unwrap().push(uri.to_string());
    }
}

pub struct Harness {
    pub controller: CheckoutController,
    pub panel: RecordingPanel,
    pub trigger: TestTrigger,
    pub navigator: RecordingNavigator,
}

pub fn harness(gateway: ScriptedGateway, config: CheckoutConfig) -> Harness {
    let panel = RecordingPanel::default();
    let trigger = TestTrigger::default();
    let navigator = RecordingNavigator::default();
    let controller = CheckoutController::new(
        Box::new(gateway),
        Box::new(panel.clone()),
        Box::new(trigger.clone()),
        Box::new(navigator.clone()),
        config,
    );
    Harness {
        controller,
        panel,
        trigger,
        navigator,
    }
}
