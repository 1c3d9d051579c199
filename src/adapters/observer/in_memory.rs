//! In-memory observer that records events for assertions.

use std::sync::{PoisonError, RwLock};

use crate::domain::protection::ProtectionEvent;
use crate::domain::session::FlowEvent;
use crate::ports::SessionObserver;

/// Records every event it sees, in order.
///
/// # Example
///
/// ```ignore
/// let observer = Arc::new(InMemoryObserver::new());
/// let flow = ProtectionFlow::new(form, presenter, links, observer.clone(), settings);
///
/// flow.request_send();
/// assert!(observer.has_flow_event("flow.action_refused"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryObserver {
    protection_events: RwLock<Vec<ProtectionEvent>>,
    flow_events: RwLock<Vec<FlowEvent>>,
}

impl InMemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns recorded pipeline events.
    pub fn protection_events(&self) -> Vec<ProtectionEvent> {
        self.protection_events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns recorded flow events.
    pub fn flow_events(&self) -> Vec<FlowEvent> {
        self.flow_events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the type identifiers of recorded pipeline events.
    pub fn protection_event_types(&self) -> Vec<&'static str> {
        self.protection_events()
            .iter()
            .map(ProtectionEvent::event_type)
            .collect()
    }

    /// Returns the type identifiers of recorded flow events.
    pub fn flow_event_types(&self) -> Vec<&'static str> {
        self.flow_events().iter().map(FlowEvent::event_type).collect()
    }

    /// Checks if a flow event of the given type was recorded.
    pub fn has_flow_event(&self, event_type: &str) -> bool {
        self.flow_event_types().contains(&event_type)
    }

    /// Checks if a pipeline event of the given type was recorded.
    pub fn has_protection_event(&self, event_type: &str) -> bool {
        self.protection_event_types().contains(&event_type)
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.protection_events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.flow_events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl SessionObserver for InMemoryObserver {
    fn on_protection_event(&self, event: &ProtectionEvent) {
        self.protection_events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }

    fn on_flow_event(&self, event: &FlowEvent) {
        self.flow_events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
