//! Network utilities
//!
//! Parses the `host port` positional arguments shared by both binaries.

use std::fmt;

use crate::error::ArgsError;

/// Host and port given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') && !self.host.starts_with('[') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Parse `argv` (program name first) into an endpoint.
///
/// Arguments past the port are ignored.
pub fn parse_endpoint_args(args: &[String]) -> Result<Endpoint, ArgsError> {
    match args {
        [_, host, port, ..] => port
            .trim()
            .parse::<u16>()
            .map(|port| Endpoint::new(host.clone(), port))
            .map_err(|_| ArgsError::InvalidPort(port.clone())),
        _ => Err(ArgsError::MissingArguments),
    }
}

/// Usage line printed when the arguments are missing or invalid.
pub fn usage(program: &str) -> String {
    format!(
        "Error: you must specify the host and the port, e.g. '{} 127.0.0.1 65432' for localhost.",
        program
    )
}
