//! Terminal chat client
//!
//! A thin front-end: one thread prints what the server relays while the main
//! thread forwards lines typed by the user.

pub mod connection;
pub mod session;

pub use connection::Connection;
pub use session::run;
