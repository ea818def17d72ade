use std::time::Duration;

/// Work a timer runs when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Put the auth message back to the neutral style
    ResetMessageStyle,
}

/// One-shot timers. There is no cancellation handle; every scheduled task
/// fires exactly once.
pub trait TimerFacility {
    fn schedule(&mut self, delay: Duration, task: TimerTask);
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    due_at: Duration,
    sequence: u64,
    task: TimerTask,
}

/// Timer facility driven by a virtual clock.
///
/// Time only moves when [`TimerQueue::advance`] is called, which makes timer
/// behavior deterministic for tests and lets the terminal host feed it wall
/// clock time at its own pace.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_sequence: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every task that became due,
    /// earliest deadline first and in scheduling order on ties
    pub fn advance(&mut self, by: Duration) -> Vec<TimerTask> {
        self.now += by;
        let now = self.now;

        let (mut due, waiting): (Vec<PendingTimer>, Vec<PendingTimer>) = self
            .pending
            .drain(..)
            .partition(|timer| timer.due_at <= now);
        self.pending = waiting;

        due.sort_by_key(|timer| (timer.due_at, timer.sequence));
        due.into_iter().map(|timer| timer.task).collect()
    }
}

impl TimerFacility for TimerQueue {
    fn schedule(&mut self, delay: Duration, task: TimerTask) {
        self.pending.push(PendingTimer {
            due_at: self.now + delay,
            sequence: self.next_sequence,
            task,
        });
        self.next_sequence += 1;
    }
}
