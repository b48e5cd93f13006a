//! Repeating tick timers the engine arms and cancels
//!
//! The engine never sleeps on its own. It asks a [`Scheduler`] for a
//! repeating timer on `start`/resume and cancels it on pause, reset and game
//! over. The host delivers each firing back through `SnakeGame::on_tick`
//! together with the handle, so a tick from a cancelled timer is recognised
//! and dropped.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Identifies one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    /// Arm a timer firing every `period`, first firing one period from now
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle;

    /// Disarm a timer; unknown or already cancelled handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}

/// Scheduler that only records timers; the caller decides when they fire
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    armed: Vec<(TimerHandle, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers currently armed, oldest first
    pub fn armed(&self) -> &[(TimerHandle, Duration)] {
        &self.armed
    }

    /// Most recently armed timer still active
    pub fn current(&self) -> Option<TimerHandle> {
        self.armed.last().map(|(handle, _)| *handle)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed.push((handle, period));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.retain(|(armed, _)| *armed != handle);
    }
}

/// Scheduler backed by a tokio interval
///
/// Holds at most one interval. Must be armed from within a tokio runtime.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    active: Option<(TimerHandle, Interval)>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the armed timer to fire.
    ///
    /// Never resolves while nothing is armed, which makes it safe to poll
    /// from a `tokio::select!` loop in every state.
    pub async fn next_tick(&mut self) -> TimerHandle {
        match self.active.as_mut() {
            Some((handle, interval)) => {
                interval.tick().await;
                *handle
            }
            None => std::future::pending().await,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);

        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.active = Some((handle, interval));

        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if matches!(&self.active, Some((armed, _)) if *armed == handle) {
            self.active = None;
        }
    }
}
