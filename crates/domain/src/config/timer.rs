use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tick wheel configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimerConfig {
    /// Duration of one tick in milliseconds (default: 10)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Number of wheel slots (default: 1024)
    /// Timers further out than one revolution wait in their slot for
    /// additional rounds.
    #[serde(default = "default_wheel_slots")]
    pub wheel_slots: usize,
}

impl TimerConfig {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            wheel_slots: default_wheel_slots(),
        }
    }
}

fn default_tick_ms() -> u64 {
    10
}

fn default_wheel_slots() -> usize {
    1024
}
