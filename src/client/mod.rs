//! Client management system
//!
//! Handles per-connection state, the client registry, and the connection
//! handler that services each socket.

pub mod handler;
pub mod registry;
pub mod state;

pub use handler::{ConnectionStatus, DisconnectReason, Readiness, service_connection};
pub use registry::ClientRegistry;
pub use state::{ClientId, ClientRecord};
