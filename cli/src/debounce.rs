//! Debouncing for rapid search input.
//!
//! Each trigger takes a fresh generation number and sleeps for the quiet
//! period; it only "fires" if no newer trigger arrived in the meantime, so a
//! burst of input collapses into a single action.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Coalesces rapid triggers into one action per quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The configured quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a trigger. The returned future resolves to `true` iff this
    /// trigger is still the newest one after the quiet period.
    ///
    /// The generation number is taken eagerly, before the future is awaited,
    /// so trigger order follows call order.
    pub fn trigger(&self) -> impl Future<Output = bool> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;

        async move {
            tokio::time::sleep(delay).await;
            generation.load(Ordering::SeqCst) == my_generation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_burst_collapses_to_one() {
        let debouncer = Debouncer::new(Duration::from_millis(30));

        // Five triggers inside one quiet period: only the last may fire.
        let f1 = debouncer.trigger();
        let f2 = debouncer.trigger();
        let f3 = debouncer.trigger();
        let f4 = debouncer.trigger();
        let f5 = debouncer.trigger();

        let fired = tokio::join!(f1, f2, f3, f4, f5);
        let count = [fired.0, fired.1, fired.2, fired.3, fired.4]
            .iter()
            .filter(|fired| **fired)
            .count();
        assert_eq!(count, 1);
        assert!(fired.4);
    }

    #[tokio::test]
    async fn test_separate_bursts_fire_independently() {
        let debouncer = Debouncer::new(Duration::from_millis(20));

        assert!(debouncer.trigger().await);

        // The quiet period of the first trigger has passed; a new trigger is
        // a fresh action.
        assert!(debouncer.trigger().await);
    }

    #[tokio::test]
    async fn test_sequential_await_always_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        for _ in 0..3 {
            assert!(debouncer.trigger().await);
        }
    }
}
