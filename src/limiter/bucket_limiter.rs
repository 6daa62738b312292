use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use super::error::LimiterError;
use crate::observers::{LimiterEvent, LimiterEventObserverTrait, LimiterEventType};

struct BucketState {
    count: usize,
    // None until the first token is granted
    last_access_time: Option<Instant>,
}

impl BucketState {
    fn fill_number(&self, capacity: usize, fill_interval: Duration, now: Instant) -> usize {
        if self.count >= capacity {
            return 0;
        }
        // no refill is owed before the first granted token
        let last_access_time = match self.last_access_time {
            Some(last_access_time) => last_access_time,
            None => return 0,
        };
        let intervals =
            now.saturating_duration_since(last_access_time).as_nanos() / fill_interval.as_nanos();
        let headroom = capacity - self.count;
        usize::try_from(intervals).map_or(headroom, |intervals| intervals.min(headroom))
    }
}

/// Lazily refilling token bucket.
///
/// Starts full. Every whole `fill_interval` elapsed since the last granted
/// token earns one token back, up to `capacity`. Partial intervals are
/// dropped on each call, and denied calls never move the refill clock.
pub struct BucketLimiter {
    capacity: usize,
    fill_interval: Duration,
    state: Mutex<BucketState>,
    observers: Vec<Arc<dyn LimiterEventObserverTrait>>,
}

impl fmt::Debug for BucketLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketLimiter")
            .field("capacity", &self.capacity)
            .field("fill_interval", &self.fill_interval)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl BucketLimiter {
    pub fn new(fill_interval: Duration, capacity: usize) -> Result<Self, LimiterError> {
        if capacity == 0 {
            return Err(LimiterError::InvalidConfig(
                "capacity must be greater than zero".to_string(),
            ));
        }
        if fill_interval.is_zero() {
            return Err(LimiterError::InvalidConfig(
                "fill interval must be greater than zero".to_string(),
            ));
        }

        Ok(BucketLimiter {
            capacity,
            fill_interval,
            state: Mutex::new(BucketState {
                count: capacity,
                last_access_time: None,
            }),
            observers: Vec::new(),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn LimiterEventObserverTrait>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn fill_interval(&self) -> Duration {
        self.fill_interval
    }

    /// Refills from whole elapsed intervals, then takes one token if any is
    /// available. Never blocks waiting for a token.
    pub fn allow(&self) -> bool {
        let (allowed, event) = {
            let mut state = self.state.lock();
            let now = Instant::now();

            let refilled = state.fill_number(self.capacity, self.fill_interval, now);
            state.count += refilled;

            let allowed = if state.count > 0 {
                state.count -= 1;
                state.last_access_time = Some(now);
                true
            } else {
                false
            };

            let event = (!self.observers.is_empty()).then(|| {
                LimiterEvent::new(if allowed {
                    LimiterEventType::Allowed
                } else {
                    LimiterEventType::Denied
                })
                .with_refilled(refilled)
                .with_remaining(state.count)
            });
            (allowed, event)
        };

        // dispatched after the guard is released
        if let Some(event) = event {
            for observer in &self.observers {
                observer.handle_event(&event);
            }
        }

        allowed
    }

    #[cfg(test)]
    pub(crate) fn available_tokens(&self) -> usize {
        self.state.lock().count
    }
}
