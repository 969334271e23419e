pub mod dns;
pub mod timer;
