//! Trailing-edge debounce for scheduled searches

use std::future;
use std::time::Duration;

use tokio::time::{sleep_until, Instant};

use super::engine::PendingSearch;

/// Single outstanding scheduled search
///
/// Arming a new search replaces any previous one, so at most one search
/// survives a burst of keystrokes. `fired` pends forever while nothing is
/// armed and is cancel-safe inside `tokio::select!`: a branch losing the
/// race leaves the armed search in place.
pub struct Debouncer {
    delay: Duration,
    armed: Option<(PendingSearch, Instant)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, armed: None }
    }

    /// Arm a search, replacing any previously armed one
    pub fn schedule(&mut self, pending: PendingSearch) {
        self.armed = Some((pending, Instant::now() + self.delay));
    }

    /// Drop the armed search, if any
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Resolve with the armed search once its quiet period elapses
    pub async fn fired(&mut self) -> PendingSearch {
        let deadline = match self.armed.as_ref() {
            Some((_, deadline)) => *deadline,
            None => return future::pending().await,
        };
        sleep_until(deadline).await;
        match self.armed.take() {
            Some((pending, _)) => pending,
            None => future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    fn pending(seq: u64, term: &str) -> PendingSearch {
        PendingSearch {
            seq,
            term: term.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let start = Instant::now();
        debouncer.schedule(pending(1, "platform"));

        let fired = debouncer.fired().await;
        assert_eq!(fired.term, "platform");
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(!debouncer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_replaces_the_armed_search() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(pending(1, "plat"));
        debouncer.schedule(pending(2, "platform"));

        let fired = debouncer.fired().await;
        assert_eq!(fired.seq, 2);
        assert_eq!(fired.term, "platform");
    }

    #[tokio::test(start_paused = true)]
    async fn unarmed_debouncer_pends() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let result = timeout(Duration::from_secs(5), debouncer.fired()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_disarms() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(pending(1, "platform"));
        debouncer.cancel();
        assert!(!debouncer.is_armed());

        let result = timeout(Duration::from_secs(5), debouncer.fired()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn losing_a_select_race_keeps_the_search_armed() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(pending(1, "platform"));

        tokio::select! {
            biased;
            _ = future::ready(()) => {}
            _ = debouncer.fired() => panic!("immediate branch should win"),
        }
        assert!(debouncer.is_armed());

        let fired = debouncer.fired().await;
        assert_eq!(fired.seq, 1);
    }
}
