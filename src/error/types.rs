//! Error types
//!
//! Defines domain-specific error types for each module of the chat server and client.

use std::fmt;
use std::io;

use crate::client::ClientId;

/// Client registry errors
#[derive(Debug)]
pub enum ClientError {
    NotFound(ClientId),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NotFound(id) => write!(f, "Client not found: {}", id),
        }
    }
}

impl std::error::Error for ClientError {}

/// Command-line argument errors
#[derive(Debug, PartialEq)]
pub enum ArgsError {
    MissingArguments,
    InvalidPort(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingArguments => write!(f, "Missing host and port arguments"),
            ArgsError::InvalidPort(p) => write!(f, "Invalid port: {}", p),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Errors raised while starting or running the chat server
#[derive(Debug)]
pub enum ServerError {
    Bind(String, io::Error),
    Io(io::Error),
    Config(config::ConfigError),
    Client(ClientError),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
            ServerError::Io(e) => write!(f, "I/O error: {}", e),
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Client(e) => write!(f, "Client error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::Io(error)
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<ClientError> for ServerError {
    fn from(error: ClientError) -> Self {
        ServerError::Client(error)
    }
}

/// Terminal chat client errors
#[derive(Debug)]
pub enum ChatClientError {
    Connect(String, io::Error),
    Io(io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for ChatClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatClientError::Connect(addr, e) => write!(f, "Failed to connect to {}: {}", addr, e),
            ChatClientError::Io(e) => write!(f, "I/O error: {}", e),
            ChatClientError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ChatClientError {}

impl From<io::Error> for ChatClientError {
    fn from(error: io::Error) -> Self {
        ChatClientError::Io(error)
    }
}

impl From<config::ConfigError> for ChatClientError {
    fn from(error: config::ConfigError) -> Self {
        ChatClientError::Config(error)
    }
}
