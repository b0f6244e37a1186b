use crate::domain::ports::{Navigator, StatusSink, TriggerControl};
use crate::domain::status::{Severity, Status};
use std::sync::atomic::{AtomicBool, Ordering};

/// Prints each status update to stdout, tagged with its severity.
pub struct ConsoleStatusPanel;

impl StatusSink for ConsoleStatusPanel {
    fn update(&self, status: Status) {
        let tag = match status.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        println!("[{tag}] {}", status.message);
    }
}

/// In-process stand-in for the pay button's enabled flag.
pub struct ConsoleTrigger {
    enabled: AtomicBool,
}

impl Default for ConsoleTrigger {
    fn default() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }
}

impl TriggerControl for ConsoleTrigger {
    fn set_enabled(&self, enabled: bool) {
        tracing::debug!(enabled, "pay trigger toggled");
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

/// Prints the deep-link URI instead of navigating anywhere.
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, uri: &str) {
        println!("navigating to {uri}");
    }
}
