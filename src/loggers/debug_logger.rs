use crate::observers::{LimiterEvent, LimiterEventObserverTrait};

pub struct DebugLogger {}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLogger {
    pub fn new() -> Self {
        DebugLogger {}
    }
}

impl LimiterEventObserverTrait for DebugLogger {
    fn handle_event(&self, event: &LimiterEvent) {
        println!(
            "[Debug][Event: {:?}] refilled: {}, remaining: {}",
            event.event_type, event.refilled, event.remaining,
        );
    }
}
