#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LimiterEventType {
    Allowed,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimiterEvent {
    pub event_type: LimiterEventType,
    /// Tokens added by the refill step of the call that produced this event.
    pub refilled: usize,
    /// Tokens left in the bucket once the call finished.
    pub remaining: usize,
}

impl LimiterEvent {
    pub fn new(event_type: LimiterEventType) -> LimiterEvent {
        LimiterEvent {
            event_type,
            refilled: 0,
            remaining: 0,
        }
    }

    pub fn with_refilled(mut self, refilled: usize) -> Self {
        self.refilled = refilled;
        self
    }

    pub fn with_remaining(mut self, remaining: usize) -> Self {
        self.remaining = remaining;
        self
    }
}

pub trait LimiterEventObserverTrait: Send + Sync {
    fn handle_event(&self, event: &LimiterEvent);
}
