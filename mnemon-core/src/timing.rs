//! Cooperative delays over the periodic tick
//!
//! [`TimingService`] exclusively owns both hardware counters. All waiting in
//! the game is busy-polling of the periodic counter's overflow flag; there is
//! no timeout and no cancellation.

use mnemon_hal::{FreeRunningCounter, PeriodicTimer};

/// Blocking delay measured in periodic ticks
pub trait Delay {
    /// Block until `units` ticks have elapsed
    fn wait(&mut self, units: u16);
}

/// Source of raw 16-bit entropy
pub trait EntropySource {
    /// Sample the source; no side effect
    fn sample_entropy(&self) -> u16;
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn wait(&mut self, units: u16) {
        (**self).wait(units);
    }
}

/// Delay and entropy service built on the two hardware counters
///
/// Only one delay can be in flight at a time. That holds by construction:
/// `wait` takes `&mut self` and the game runs in a single context.
pub struct TimingService<F, P> {
    free_running: F,
    periodic: P,
}

impl<F: FreeRunningCounter, P: PeriodicTimer> TimingService<F, P> {
    /// Take ownership of both counters
    pub fn new(free_running: F, periodic: P) -> Self {
        Self {
            free_running,
            periodic,
        }
    }

    /// Consume one periodic tick if the hardware flag fired
    ///
    /// Returns true at most once per period.
    pub fn tick(&mut self) -> bool {
        self.periodic.take_elapsed()
    }

    /// Get the periodic counter
    pub fn periodic(&self) -> &P {
        &self.periodic
    }
}

impl<F: FreeRunningCounter, P: PeriodicTimer> Delay for TimingService<F, P> {
    fn wait(&mut self, units: u16) {
        let mut remaining = units;
        while remaining > 0 {
            if self.tick() {
                remaining -= 1;
            }
        }
    }
}

impl<F: FreeRunningCounter, P: PeriodicTimer> EntropySource for TimingService<F, P> {
    fn sample_entropy(&self) -> u16 {
        self.free_running.count()
    }
}
