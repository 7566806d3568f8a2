//! Search Input Debouncer
//!
//! Each trigger supersedes the previous one. A pending trigger only fires
//! if nothing newer arrived during the quiescence window, so the last
//! keystroke always wins.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::timer;

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Resolves after the window: `true` if this is still the latest trigger
    pub fn trigger(&self) -> impl Future<Output = bool> + 'static {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.latest);
        let window = self.window;
        async move {
            timer::sleep(window).await;
            latest.load(Ordering::SeqCst) == ticket
        }
    }

    /// Invalidate every pending trigger
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_trigger_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let mut pending = Vec::new();
        for _ in 0..5 {
            pending.push(tokio::spawn(debouncer.trigger()));
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        let mut fired = Vec::new();
        for handle in pending {
            fired.push(handle.await.unwrap());
        }
        assert_eq!(fired, [false, false, false, false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_triggers_both_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.trigger().await);
        assert!(debouncer.trigger().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let pending = tokio::spawn(debouncer.trigger());
        tokio::time::sleep(Duration::from_millis(10)).await;
        debouncer.cancel();
        assert!(!pending.await.unwrap());
    }
}
