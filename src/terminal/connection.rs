//! Module `connection`
//!
//! The socket shared by the client's receive thread and its send loop. Either
//! side may close it; closing is idempotent and the flag tells the other side
//! to stop.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ChatClientError;
use crate::utils::Endpoint;

pub struct Connection {
    stream: TcpStream,
    closed: AtomicBool,
}

impl Connection {
    /// Opens a blocking TCP connection to the server.
    pub fn connect(endpoint: &Endpoint) -> Result<Self, ChatClientError> {
        let stream = TcpStream::connect((endpoint.host(), endpoint.port()))
            .map_err(|e| ChatClientError::Connect(endpoint.to_string(), e))?;
        Ok(Self::from_stream(stream))
    }

    pub fn from_stream(stream: TcpStream) -> Self {
        Self {
            stream,
            closed: AtomicBool::new(false),
        }
    }

    /// Blocks until bytes arrive. `Ok(0)` means the server closed the connection.
    pub fn receive(&self, buf: &mut [u8]) -> io::Result<usize> {
        (&self.stream).read(buf)
    }

    /// Sends the whole message.
    pub fn send(&self, message: &[u8]) -> io::Result<()> {
        if self.is_closed() {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "connection already closed",
            ));
        }
        (&self.stream).write_all(message)
    }

    /// Closes both directions. Only the first call has an effect.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            let _ = self.stream.shutdown(Shutdown::Both);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
