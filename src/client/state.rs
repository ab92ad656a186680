//! Module `state`
//!
//! Defines the `ClientRecord` struct holding everything the server tracks for one
//! connected peer: its handle, peer address, display name and the inbound and
//! outbound byte buffers.

use std::fmt;
use std::net::SocketAddr;

/// Unique handle of a registered connection.
///
/// Handles are allocated from a monotonic counter and are never reused
/// for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(u64);

impl ClientId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents the state of a connected chat client.
///
/// `T` is the transport the record owns; dropping the record closes it.
pub struct ClientRecord<T> {
    id: ClientId,
    peer_addr: SocketAddr,
    display_name: String,
    conn: T,
    inbound: Vec<u8>,
    outbound: Vec<u8>,
}

impl<T> ClientRecord<T> {
    pub fn new(id: ClientId, peer_addr: SocketAddr, display_name: String, conn: T) -> Self {
        Self {
            id,
            peer_addr,
            display_name,
            conn,
            inbound: Vec::new(),
            outbound: Vec::new(),
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the remote endpoint. Informational only.
    pub fn peer_addr(&self) -> &SocketAddr {
        &self.peer_addr
    }

    /// Returns the name shown to other clients, e.g. `user3`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn conn(&self) -> &T {
        &self.conn
    }

    /// Returns the bytes queued for this client but not yet sent.
    pub fn outbound(&self) -> &[u8] {
        &self.outbound
    }

    pub fn has_pending_output(&self) -> bool {
        !self.outbound.is_empty()
    }

    // --------------------
    // Buffer operations
    // --------------------

    /// Appends received bytes to the inbound buffer.
    pub fn buffer_inbound(&mut self, bytes: &[u8]) {
        self.inbound.extend_from_slice(bytes);
    }

    /// Drains the whole inbound buffer.
    pub fn take_inbound(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.inbound)
    }

    /// Appends bytes to the back of the outbound buffer.
    pub fn queue(&mut self, bytes: &[u8]) {
        self.outbound.extend_from_slice(bytes);
    }

    /// Removes `sent` bytes from the front of the outbound buffer after a
    /// (possibly partial) write. The unsent suffix stays queued in order.
    pub fn consume_outbound(&mut self, sent: usize) {
        let sent = sent.min(self.outbound.len());
        self.outbound.drain(..sent);
    }
}
