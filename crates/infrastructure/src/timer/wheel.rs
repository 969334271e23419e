use emudns_application::ports::{TimerFacility, TimerId};
use emudns_domain::config::TimerConfig;
use rustc_hash::FxHashMap;
use std::time::Duration;

struct Pending<E> {
    deadline: u64,
    payload: E,
}

/// Hashed timing wheel driven by explicit [`advance`](TimerWheel::advance) calls.
///
/// Each slot holds the ids of timers whose deadline maps to it; a timer
/// further out than one revolution simply stays in its slot until its
/// deadline tick comes round. Stopped timers are dropped from `pending`
/// and skipped lazily when their slot is visited.
pub struct TimerWheel<E> {
    slots: Vec<Vec<TimerId>>,
    pending: FxHashMap<TimerId, Pending<E>>,
    tick_duration: Duration,
    current_tick: u64,
    next_id: u64,
}

impl<E> TimerWheel<E> {
    pub fn new(tick_duration: Duration, slots: usize) -> Self {
        let slots = slots.max(1);
        Self {
            slots: (0..slots).map(|_| Vec::new()).collect(),
            pending: FxHashMap::default(),
            tick_duration: tick_duration.max(Duration::from_millis(1)),
            current_tick: 0,
            next_id: 0,
        }
    }

    pub fn from_config(config: &TimerConfig) -> Self {
        Self::new(config.tick_duration(), config.wheel_slots)
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Timers scheduled and neither fired nor stopped.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move one tick forward and hand back the payloads due at the new
    /// tick, in scheduling order.
    pub fn advance(&mut self) -> Vec<E> {
        self.current_tick += 1;
        let now = self.current_tick;
        let idx = self.slot_of(now);

        let ids = std::mem::take(&mut self.slots[idx]);
        let mut fired = Vec::new();
        let mut kept = Vec::with_capacity(ids.len());

        for id in ids {
            match self.pending.get(&id) {
                Some(p) if p.deadline <= now => {
                    if let Some(p) = self.pending.remove(&id) {
                        fired.push(p.payload);
                    }
                }
                Some(_) => kept.push(id),
                None => {}
            }
        }

        self.slots[idx] = kept;
        fired
    }

    #[inline]
    fn slot_of(&self, tick: u64) -> usize {
        (tick % self.slots.len() as u64) as usize
    }
}

impl<E> TimerFacility<E> for TimerWheel<E> {
    fn start_ticks(&mut self, ticks: u64, payload: E) -> TimerId {
        let deadline = self.current_tick + ticks.max(1);
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        let idx = self.slot_of(deadline);
        self.slots[idx].push(id);
        self.pending.insert(id, Pending { deadline, payload });
        id
    }

    fn stop(&mut self, id: TimerId) -> bool {
        self.pending.remove(&id).is_some()
    }

    fn is_running(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    fn ticks_in_sec(&self) -> f64 {
        self.current_tick as f64 * self.tick_duration.as_secs_f64()
    }

    fn duration_to_ticks(&self, duration: Duration) -> u64 {
        let tick = self.tick_duration.as_nanos();
        duration.as_nanos().div_ceil(tick) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(slots: usize) -> TimerWheel<&'static str> {
        TimerWheel::new(Duration::from_millis(100), slots)
    }

    #[test]
    fn test_fires_after_requested_ticks() {
        let mut w = wheel(8);
        w.start_ticks(3, "a");

        assert!(w.advance().is_empty());
        assert!(w.advance().is_empty());
        assert_eq!(w.advance(), vec!["a"]);
        assert_eq!(w.pending_count(), 0);
    }

    #[test]
    fn test_zero_ticks_fires_on_next_advance() {
        let mut w = wheel(8);
        let id = w.start_ticks(0, "now");

        assert!(w.is_running(id));
        assert_eq!(w.advance(), vec!["now"]);
        assert!(!w.is_running(id));
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut w = wheel(8);
        let id = w.start_ticks(2, "cancelled");
        w.start_ticks(2, "kept");

        assert!(w.stop(id));
        assert!(!w.stop(id));
        w.advance();
        assert_eq!(w.advance(), vec!["kept"]);
    }

    #[test]
    fn test_deadline_beyond_one_revolution() {
        let mut w = wheel(4);
        w.start_ticks(10, "late");

        for _ in 0..9 {
            assert!(w.advance().is_empty());
        }
        assert_eq!(w.advance(), vec!["late"]);
    }

    #[test]
    fn test_same_tick_fires_in_order() {
        let mut w = wheel(16);
        w.start_ticks(1, "first");
        w.start_ticks(1, "second");
        w.start_ticks(1, "third");

        assert_eq!(w.advance(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut w = wheel(4);
        let a = w.start_ticks(1, "a");
        w.advance();
        let b = w.start_ticks(1, "b");

        assert_ne!(a, b);
        assert!(!w.is_running(a));
        assert!(w.is_running(b));
    }

    #[test]
    fn test_clock_and_conversion() {
        let mut w = wheel(8);
        assert_eq!(w.duration_to_ticks(Duration::from_secs(1)), 10);
        assert_eq!(w.duration_to_ticks(Duration::from_millis(150)), 2);
        assert_eq!(w.duration_to_ticks(Duration::ZERO), 0);

        for _ in 0..25 {
            w.advance();
        }
        assert!((w.ticks_in_sec() - 2.5).abs() < 1e-9);
    }
}
