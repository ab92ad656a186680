//! Utility functions
//!
//! Provides logging setup and command-line endpoint parsing.

pub mod logging;
pub mod network;

pub use logging::setup_logging;
pub use network::{Endpoint, parse_endpoint_args, usage};
