use std::sync::atomic::{AtomicU64, Ordering};

use crate::observers::{LimiterEvent, LimiterEventObserverTrait, LimiterEventType};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LimiterStats {
    pub allowed: u64,
    pub denied: u64,
    pub refilled: u64,
}

/// Running totals of limiter decisions.
#[derive(Default)]
pub struct StatsLogger {
    allowed: AtomicU64,
    denied: AtomicU64,
    refilled: AtomicU64,
}

impl StatsLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> LimiterStats {
        LimiterStats {
            allowed: self.allowed.load(Ordering::Relaxed),
            denied: self.denied.load(Ordering::Relaxed),
            refilled: self.refilled.load(Ordering::Relaxed),
        }
    }
}

impl LimiterEventObserverTrait for StatsLogger {
    fn handle_event(&self, event: &LimiterEvent) {
        match event.event_type {
            LimiterEventType::Allowed => self.allowed.fetch_add(1, Ordering::Relaxed),
            LimiterEventType::Denied => self.denied.fetch_add(1, Ordering::Relaxed),
        };
        if event.refilled > 0 {
            self.refilled
                .fetch_add(event.refilled as u64, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limiter::BucketLimiter;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_counts_events() {
        let stats = StatsLogger::new();
        stats.handle_event(&LimiterEvent::new(LimiterEventType::Allowed).with_refilled(2));
        stats.handle_event(&LimiterEvent::new(LimiterEventType::Denied));
        stats.handle_event(&LimiterEvent::new(LimiterEventType::Denied));

        assert_eq!(
            stats.snapshot(),
            LimiterStats {
                allowed: 1,
                denied: 2,
                refilled: 2,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_tracks_limiter_decisions() {
        let interval = Duration::from_millis(50);
        let stats = Arc::new(StatsLogger::new());
        let limiter = BucketLimiter::new(interval, 2)
            .expect("valid config")
            .with_observer(stats.clone());

        for _ in 0..5 {
            limiter.allow();
        }
        tokio::time::advance(interval * 2).await;
        for _ in 0..3 {
            limiter.allow();
        }

        assert_eq!(
            stats.snapshot(),
            LimiterStats {
                allowed: 4,
                denied: 4,
                refilled: 2,
            }
        );
    }
}
