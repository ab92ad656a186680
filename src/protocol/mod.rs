//! Chat wire content
//!
//! The transport is a raw byte stream; the only structure the server adds is
//! the notices and the sender prefix defined here.

pub mod notices;

pub use notices::{join_notice, leave_notice, prefixed};
