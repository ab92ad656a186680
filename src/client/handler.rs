//! Connection handler
//!
//! Services one client socket per readiness notification: a bounded read that is
//! relayed to every other client, then a flush of whatever is queued for it.

use log::{debug, info, warn};
use std::io;

use crate::broadcast::broadcast;
use crate::client::{ClientId, ClientRegistry};
use crate::error::ClientError;
use crate::protocol::leave_notice;
use crate::server::Transport;

/// Readiness reported for a client socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Readiness {
    pub readable: bool,
    pub writable: bool,
}

impl Readiness {
    pub const READABLE: Readiness = Readiness {
        readable: true,
        writable: false,
    };
    pub const WRITABLE: Readiness = Readiness {
        readable: false,
        writable: true,
    };
    pub const BOTH: Readiness = Readiness {
        readable: true,
        writable: true,
    };

    pub fn is_empty(&self) -> bool {
        !self.readable && !self.writable
    }
}

/// Why a client was removed.
#[derive(Debug)]
pub enum DisconnectReason {
    /// The peer closed its end (read returned zero bytes).
    Orderly,
    /// A read or write failed.
    TransportError(io::Error),
    /// The server removed the client on its own.
    Explicit,
}

/// Outcome of servicing a connection.
#[derive(Debug)]
pub enum ConnectionStatus {
    Open,
    Closed(DisconnectReason),
}

impl ConnectionStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, ConnectionStatus::Closed(_))
    }
}

/// Handles one readiness notification for `id`.
///
/// The readable path runs first. If it removed the client the writable path is
/// skipped.
pub fn service_connection<T: Transport>(
    registry: &mut ClientRegistry<T>,
    id: ClientId,
    readiness: Readiness,
    read_chunk_size: usize,
) -> Result<ConnectionStatus, ClientError> {
    if readiness.readable {
        let status = handle_readable(registry, id, read_chunk_size)?;
        if status.is_closed() {
            return Ok(status);
        }
    }

    if readiness.writable {
        return handle_writable(registry, id);
    }

    Ok(ConnectionStatus::Open)
}

/// Reads at most `read_chunk_size` bytes and relays them as one message.
pub fn handle_readable<T: Transport>(
    registry: &mut ClientRegistry<T>,
    id: ClientId,
    read_chunk_size: usize,
) -> Result<ConnectionStatus, ClientError> {
    let client = registry.get_mut(id).ok_or(ClientError::NotFound(id))?;
    let mut chunk = vec![0u8; read_chunk_size];

    match client.conn().try_read(&mut chunk) {
        Ok(0) => {
            info!("Closing connection to {}", client.peer_addr());
            disconnect(registry, id, DisconnectReason::Orderly)
        }
        Ok(n) => {
            client.buffer_inbound(&chunk[..n]);
            let message = client.take_inbound();
            info!(
                "Received message: '{}' from {}. Broadcasting to all.",
                String::from_utf8_lossy(&message),
                client.display_name()
            );
            broadcast(registry, id, &message, true)?;
            Ok(ConnectionStatus::Open)
        }
        Err(e) if is_transient(&e) => Ok(ConnectionStatus::Open),
        Err(e) => {
            warn!(
                "Error receiving data from {}: {}. Closing connection.",
                client.display_name(),
                e
            );
            disconnect(registry, id, DisconnectReason::TransportError(e))
        }
    }
}

/// Sends as much of the outbound buffer as the socket accepts.
///
/// Does nothing when the buffer is empty.
pub fn handle_writable<T: Transport>(
    registry: &mut ClientRegistry<T>,
    id: ClientId,
) -> Result<ConnectionStatus, ClientError> {
    let client = registry.get_mut(id).ok_or(ClientError::NotFound(id))?;
    if !client.has_pending_output() {
        return Ok(ConnectionStatus::Open);
    }

    match client.conn().try_write(client.outbound()) {
        Ok(sent) => {
            client.consume_outbound(sent);
            debug!(
                "Flushed {} bytes to {} ({} still queued)",
                sent,
                client.display_name(),
                client.outbound().len()
            );
            Ok(ConnectionStatus::Open)
        }
        Err(e) if is_transient(&e) => Ok(ConnectionStatus::Open),
        Err(e) => {
            warn!(
                "Error sending data to {}: {}. Closing connection.",
                client.display_name(),
                e
            );
            disconnect(registry, id, DisconnectReason::TransportError(e))
        }
    }
}

/// Announces the departure of `id` to everyone else, then removes it.
///
/// Dropping the removed record closes its socket.
pub fn disconnect<T>(
    registry: &mut ClientRegistry<T>,
    id: ClientId,
    reason: DisconnectReason,
) -> Result<ConnectionStatus, ClientError> {
    let name = registry
        .get(id)
        .ok_or(ClientError::NotFound(id))?
        .display_name()
        .to_string();

    broadcast(registry, id, leave_notice(&name).as_bytes(), false)?;
    let client = registry.unregister(id)?;
    info!(
        "{} ({}) disconnected: {:?} ({} clients remain)",
        name,
        client.peer_addr(),
        reason,
        registry.len()
    );

    Ok(ConnectionStatus::Closed(reason))
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}
