//! Hardware counter abstractions
//!
//! Two independent counters drive the game: a free-running counter used as
//! an entropy source, and a periodic counter whose overflow flag paces every
//! delay (roughly once per 10 ms).

/// Continuously running 16-bit counter
pub trait FreeRunningCounter {
    /// Current counter value; reading has no side effect
    fn count(&self) -> u16;
}

/// Periodic counter with an overflow flag
///
/// The period is fixed when the counter is configured (compare value or
/// duration, board-specific).
pub trait PeriodicTimer {
    /// Check whether the period elapsed since the flag was last cleared
    fn has_elapsed(&self) -> bool;

    /// Clear the overflow flag
    fn clear(&mut self);

    /// Check and clear the flag in one step
    ///
    /// Returns true at most once per hardware period.
    fn take_elapsed(&mut self) -> bool {
        if self.has_elapsed() {
            self.clear();
            true
        } else {
            false
        }
    }
}
