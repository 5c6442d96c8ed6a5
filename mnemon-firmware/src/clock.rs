//! Hardware counters backed by the embassy time driver
//!
//! The time driver owns the RP2040 timer peripheral, so both game counters
//! are derived from [`Instant`] rather than from dedicated timer channels.

use embassy_time::{Duration, Instant};
use mnemon_hal::{FreeRunningCounter, PeriodicTimer};

/// Low 16 bits of the time driver's tick count
///
/// Runs at the driver's tick rate, far faster than a human press, so the
/// value sampled at the start press is effectively random.
pub struct InstantCounter;

impl FreeRunningCounter for InstantCounter {
    fn count(&self) -> u16 {
        Instant::now().as_ticks() as u16
    }
}

/// Periodic flag that rises once every `period`
///
/// Like a hardware overflow flag, missed periods do not queue up: clearing
/// late re-arms one full period from now.
pub struct PeriodTicker {
    period: Duration,
    deadline: Instant,
}

impl PeriodTicker {
    pub fn new(period_ms: u16) -> Self {
        let period = Duration::from_millis(u64::from(period_ms.max(1)));
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }
}

impl PeriodicTimer for PeriodTicker {
    fn has_elapsed(&self) -> bool {
        Instant::now() >= self.deadline
    }

    fn clear(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            return;
        }
        self.deadline += self.period;
        if self.deadline <= now {
            self.deadline = now + self.period;
        }
    }
}
