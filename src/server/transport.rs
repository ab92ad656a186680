//! Non-blocking transport abstraction
//!
//! The connection handler only needs one non-blocking read and one non-blocking
//! write per readiness notification. Tokio's `TcpStream` provides both.

use std::io;
use tokio::net::TcpStream;

/// A socket that can be read from and written to without blocking.
///
/// Both calls return `ErrorKind::WouldBlock` when the socket is not ready.
pub trait Transport {
    /// Reads up to `buf.len()` bytes. `Ok(0)` means the peer closed the connection.
    fn try_read(&self, buf: &mut [u8]) -> io::Result<usize>;

    /// Writes as many bytes of `buf` as the socket currently accepts.
    fn try_write(&self, buf: &[u8]) -> io::Result<usize>;
}

impl Transport for TcpStream {
    fn try_read(&self, buf: &mut [u8]) -> io::Result<usize> {
        TcpStream::try_read(self, buf)
    }

    fn try_write(&self, buf: &[u8]) -> io::Result<usize> {
        TcpStream::try_write(self, buf)
    }
}
