use std::time::Duration;

/// Identifies one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// A host scheduler for one-shot delayed callbacks.
///
/// The host calls back into the owner with the handle once the delay has elapsed.
pub trait DelayScheduler {
    /// Schedule a one-shot callback after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a pending callback. Unknown or fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A scheduler driven by explicit time steps instead of a clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<(TimerHandle, Duration)>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks that have not fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move time forward and return the handles that are due, in deadline order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(_, deadline)| *deadline <= now);
        self.pending = pending;
        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(handle, _)| handle).collect()
    }
}

impl DelayScheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, self.now + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_once(Duration::from_secs(1));

        assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![handle]);
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.schedule_once(Duration::from_secs(2));
        let b = scheduler.schedule_once(Duration::from_secs(1));
        scheduler.cancel(a);

        assert_eq!(scheduler.advance(Duration::from_secs(5)), vec![b]);
    }
}
