//! Client registry
//!
//! Manages registered clients and the process-wide name counter.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use crate::client::{ClientId, ClientRecord};
use crate::error::ClientError;

/// Registry for tracking active clients.
///
/// Records are keyed by a `ClientId` drawn from a counter that is never reset,
/// so iteration order is registration order and display names are never reused.
pub struct ClientRegistry<T> {
    clients: BTreeMap<ClientId, ClientRecord<T>>,
    next_id: u64,
}

impl<T> ClientRegistry<T> {
    pub fn new() -> Self {
        Self {
            clients: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Allocates a record named `user<N>` for a freshly accepted connection.
    pub fn register(&mut self, conn: T, peer_addr: SocketAddr) -> &mut ClientRecord<T> {
        let id = ClientId::new(self.next_id);
        let display_name = format!("user{}", self.next_id);
        self.next_id += 1;

        self.clients
            .entry(id)
            .or_insert(ClientRecord::new(id, peer_addr, display_name, conn))
    }

    /// Removes and returns the record for `id`.
    pub fn unregister(&mut self, id: ClientId) -> Result<ClientRecord<T>, ClientError> {
        self.clients.remove(&id).ok_or(ClientError::NotFound(id))
    }

    pub fn get(&self, id: ClientId) -> Option<&ClientRecord<T>> {
        self.clients.get(&id)
    }

    pub fn get_mut(&mut self, id: ClientId) -> Option<&mut ClientRecord<T>> {
        self.clients.get_mut(&id)
    }

    pub fn contains(&self, id: ClientId) -> bool {
        self.clients.contains_key(&id)
    }

    /// Iterates over every registered client in registration order.
    pub fn all(&self) -> impl Iterator<Item = &ClientRecord<T>> {
        self.clients.values()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut ClientRecord<T>> {
        self.clients.values_mut()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl<T> Default for ClientRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
