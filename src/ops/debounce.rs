use std::time::{Duration, Instant};

use tracing::trace;

/// Holds back the latest value until input has been quiet for a while.
///
/// Pushing a new value cancels the pending one. Every push starts a new
/// generation; results computed for an older generation are stale.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
    generation: u64,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    pushed_at: Instant,
    generation: u64,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Debouncer {
            quiet,
            pending: None,
            generation: 0,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Record a new value, replacing any pending one. Returns its generation.
    pub fn push(&mut self, value: T, now: Instant) -> u64 {
        self.generation += 1;
        let superseded = self.pending.replace(Pending {
            value,
            pushed_at: now,
            generation: self.generation,
        });
        if let Some(old) = superseded {
            trace!(old = old.generation, new = self.generation, "superseded pending input");
        }
        self.generation
    }

    /// When the pending value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.pushed_at + self.quiet)
    }

    /// Release the pending value if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<(u64, T)> {
        match self.deadline() {
            Some(due) if now >= due => self.flush(),
            _ => None,
        }
    }

    /// Release the pending value immediately.
    pub fn flush(&mut self) -> Option<(u64, T)> {
        self.pending.take().map(|p| (p.generation, p.value))
    }

    /// Drop the pending value. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Generation of the most recent push
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result for `generation` still reflects the latest input
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(200);

    #[test]
    fn test_releases_after_quiet_period() {
        let start = Instant::now();
        let mut d = Debouncer::new(QUIET);
        let generation = d.push("buy milk", start);
        assert_eq!(d.poll(start + Duration::from_millis(199)), None);
        assert_eq!(d.poll(start + QUIET), Some((generation, "buy milk")));
        assert!(!d.has_pending());
        assert_eq!(d.poll(start + QUIET * 2), None);
    }

    #[test]
    fn test_new_push_restarts_timer_and_cancels_old() {
        let start = Instant::now();
        let mut d = Debouncer::new(QUIET);
        d.push("buy", start);
        let later = start + Duration::from_millis(150);
        let generation = d.push("buy milk", later);
        // The first value's deadline has passed, but it was superseded
        assert_eq!(d.poll(start + Duration::from_millis(250)), None);
        assert_eq!(d.deadline(), Some(later + QUIET));
        assert_eq!(d.poll(later + QUIET), Some((generation, "buy milk")));
    }

    #[test]
    fn test_stale_generation() {
        let start = Instant::now();
        let mut d = Debouncer::new(QUIET);
        let first = d.push(1, start);
        let (released, _) = d.poll(start + QUIET).unwrap();
        assert!(d.is_current(released));
        d.push(2, start + QUIET);
        assert!(!d.is_current(first));
        assert_eq!(d.generation(), 2);
    }

    #[test]
    fn test_flush_and_cancel() {
        let start = Instant::now();
        let mut d = Debouncer::new(QUIET);
        d.push('a', start);
        assert_eq!(d.flush(), Some((1, 'a')));
        assert!(!d.cancel());
        d.push('b', start);
        assert!(d.cancel());
        assert_eq!(d.deadline(), None);
    }
}
