use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Repeating timer that is torn down and rebuilt whenever its period changes.
///
/// Dropping the old `Interval` before arming a new one means a canceled
/// timer can never deliver a late tick.
pub struct TickScheduler {
    timer: Option<Interval>,
    period: Option<Duration>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            timer: None,
            period: None,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Arms the timer at `period`, or cancels it for `None`. The first tick
    /// of a new timer lands one full period from now. Returns whether the
    /// timer was rebuilt.
    pub fn reschedule(&mut self, period: Option<Duration>) -> bool {
        if period == self.period {
            return false;
        }

        self.timer = None;
        self.period = period;

        if let Some(period) = period {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            self.timer = Some(timer);
        }
        true
    }

    pub fn cancel(&mut self) {
        self.reschedule(None);
    }

    /// Resolves on the next tick. Never resolves while canceled.
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
