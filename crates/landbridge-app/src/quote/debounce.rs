//! Generation-token debouncer
//!
//! Every qualifying input change calls `schedule`, which bumps the generation
//! and pushes the deadline back. A result computed for an older generation is
//! recognised with `is_current` and dropped.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: u64,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// When the scheduled run fires, if one is scheduled
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Restart the timer for a new input set. Returns the new generation.
    pub fn schedule(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.deadline = Some(now + self.window);
        self.generation
    }

    /// Drop any scheduled run and invalidate in-flight results
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.deadline = None;
    }

    /// Fire the scheduled run if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.generation)
            }
            _ => None,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn test_fires_after_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);
        let generation = debouncer.schedule(start);

        assert_eq!(debouncer.take_due(start + Duration::from_millis(499)), None);
        assert_eq!(debouncer.take_due(start + WINDOW), Some(generation));
        assert_eq!(debouncer.take_due(start + WINDOW), None);
    }

    #[test]
    fn test_reschedule_restarts_timer() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);
        let first = debouncer.schedule(start);
        let second = debouncer.schedule(start + Duration::from_millis(400));

        assert_ne!(first, second);
        assert_eq!(debouncer.take_due(start + WINDOW), None);
        assert_eq!(
            debouncer.take_due(start + Duration::from_millis(900)),
            Some(second)
        );
        assert!(!debouncer.is_current(first));
    }

    #[test]
    fn test_cancel_invalidates() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);
        let generation = debouncer.schedule(start);
        debouncer.cancel();

        assert!(debouncer.deadline().is_none());
        assert!(!debouncer.is_current(generation));
        assert_eq!(debouncer.take_due(start + WINDOW * 2), None);
    }
}
