//! emudns application layer: ports implemented by infrastructure and the
//! use cases driven by jobs and the CLI.
pub mod ports;
pub mod use_cases;
