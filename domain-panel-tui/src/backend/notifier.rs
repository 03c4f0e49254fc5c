//! Notifier bridge
//!
//! The controller reports through the `Notifier` port from any await
//! point; the UI drains the queue on its next frame. Busy state is not
//! queued since the frame reads `PanelController::is_busy` directly.

use std::sync::Mutex;

use domain_panel_core::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Success(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct UiNotifier {
    events: Mutex<Vec<UiEvent>>,
}

impl UiNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all queued events, oldest first
    pub fn drain(&self) -> Vec<UiEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, event: UiEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Notifier for UiNotifier {
    fn success(&self, message: &str) {
        self.push(UiEvent::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(UiEvent::Error(message.to_string()));
    }

    fn busy_changed(&self, _busy: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue_in_order() {
        let notifier = UiNotifier::new();
        notifier.success("one");
        notifier.error("two");

        let events = notifier.drain();
        assert_eq!(
            events,
            vec![
                UiEvent::Success("one".to_string()),
                UiEvent::Error("two".to_string())
            ]
        );
        assert!(notifier.drain().is_empty());
    }
}
