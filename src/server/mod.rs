//! Server core functionality
//!
//! This module contains the single-threaded reactor that accepts connections and
//! drives every client socket, plus the transport seam it is written against.

pub mod core;
pub mod transport;

pub use core::Server;
pub use transport::Transport;
