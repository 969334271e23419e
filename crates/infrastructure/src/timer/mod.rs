pub mod wheel;

pub use wheel::TimerWheel;
