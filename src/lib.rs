//! relaychat - a broadcast chat over plain TCP
//!
//! The server relays every chunk a client sends to all other clients and
//! announces joins and departures. The terminal client prints what it receives
//! while forwarding what the user types.

pub mod broadcast;
pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod terminal;
pub mod utils;

pub use config::ChatConfig;
pub use server::Server;
