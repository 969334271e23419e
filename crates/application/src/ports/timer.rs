use std::time::Duration;

/// Handle of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[inline]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Tick-based scheduler consumed by the resolution cache.
///
/// A payload scheduled with [`start_ticks`](TimerFacility::start_ticks) is
/// handed back exactly once, after the given number of ticks, unless the
/// timer is stopped first. Delivery happens on a later pass of the tick
/// loop, never from inside the scheduling call.
pub trait TimerFacility<E> {
    /// Schedule `payload` to fire after `ticks` ticks. Zero is treated as one.
    fn start_ticks(&mut self, ticks: u64, payload: E) -> TimerId;

    /// Cancel a pending timer. Returns `false` if it already fired or was stopped.
    fn stop(&mut self, id: TimerId) -> bool;

    fn is_running(&self, id: TimerId) -> bool;

    /// Current time in seconds, derived from the number of elapsed ticks.
    fn ticks_in_sec(&self) -> f64;

    /// Number of ticks covering `duration`, rounded up.
    fn duration_to_ticks(&self, duration: Duration) -> u64;
}
