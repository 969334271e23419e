pub mod config;
pub mod logging;
pub mod seed;

pub use config::load_config;
pub use logging::init_logging;
pub use seed::{load_answers, seed_cache};
