//! Error handlers
//!
//! Provides top-level error reporting for the binaries.

use log::error;

/// Log an error that ended a server or client run
pub fn handle_error<E: std::error::Error>(err: &E) {
    error!("Chat error: {}", err);
}
