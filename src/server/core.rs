//! The chat reactor
//!
//! One task owns the listening socket and every client record. Each turn of the
//! loop asks tokio's I/O driver which sockets are ready, then accepts or services
//! them in order. Nothing is shared across threads, so nothing is locked.

use log::{debug, error, info, warn};
use std::future::{Future, poll_fn};
use std::io;
use std::net::SocketAddr;
use std::task::{Context, Poll};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;

use crate::broadcast::broadcast;
use crate::client::{ClientId, ClientRegistry, Readiness, service_connection};
use crate::config::ServerConfig;
use crate::error::{ServerError, handle_error};
use crate::protocol::join_notice;
use crate::utils::Endpoint;

/// A readiness notification collected from the driver.
enum Event {
    Accepted(TcpStream, SocketAddr),
    AcceptFailed(io::Error),
    Ready(ClientId, Readiness),
}

pub struct Server {
    listener: TcpListener,
    registry: ClientRegistry<TcpStream>,
    config: ServerConfig,
}

impl Server {
    /// Binds the listening socket.
    pub async fn bind(endpoint: &Endpoint, config: ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind((endpoint.host(), endpoint.port()))
            .await
            .map_err(|e| ServerError::Bind(endpoint.to_string(), e))?;

        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            registry: ClientRegistry::new(),
            config,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn registry(&self) -> &ClientRegistry<TcpStream> {
        &self.registry
    }

    /// Runs the event loop until Ctrl-C.
    pub async fn run(self) {
        self.run_until(async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Unable to listen for interrupt signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Runs the event loop until `shutdown` completes.
    ///
    /// Clients are not notified on shutdown; their sockets close when the
    /// server is dropped.
    pub async fn run_until<F: Future<Output = ()>>(mut self, shutdown: F) {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Caught interrupt, exiting");
                    break;
                }
                events = poll_fn(|cx| self.poll_events(cx)) => {
                    for event in events {
                        self.dispatch(event);
                    }
                }
            }
        }

        info!(
            "Server stopped with {} clients connected",
            self.registry.len()
        );
    }

    /// Collects every ready socket, or registers interest in all of them.
    ///
    /// Write interest is only registered while a client has queued output.
    fn poll_events(&self, cx: &mut Context<'_>) -> Poll<Vec<Event>> {
        let mut events = Vec::new();

        match self.listener.poll_accept(cx) {
            Poll::Ready(Ok((stream, peer))) => events.push(Event::Accepted(stream, peer)),
            Poll::Ready(Err(e)) => events.push(Event::AcceptFailed(e)),
            Poll::Pending => {}
        }

        for client in self.registry.all() {
            let readable = client.conn().poll_read_ready(cx).is_ready();
            let writable =
                client.has_pending_output() && client.conn().poll_write_ready(cx).is_ready();

            let readiness = Readiness { readable, writable };
            if !readiness.is_empty() {
                events.push(Event::Ready(client.id(), readiness));
            }
        }

        if events.is_empty() {
            Poll::Pending
        } else {
            Poll::Ready(events)
        }
    }

    fn dispatch(&mut self, event: Event) {
        match event {
            Event::Accepted(stream, peer) => self.accept(stream, peer),
            Event::AcceptFailed(e) => error!("Error accepting connection: {}", e),
            Event::Ready(id, readiness) => self.service(id, readiness),
        }
    }

    /// Registers a new client and announces it to everyone else.
    fn accept(&mut self, stream: TcpStream, peer: SocketAddr) {
        let client = self.registry.register(stream, peer);
        let id = client.id();
        let name = client.display_name().to_string();

        info!(
            "Accepted connection from {} as {} ({} clients)",
            peer,
            name,
            self.registry.len()
        );

        if let Err(e) = broadcast(&mut self.registry, id, join_notice(&name).as_bytes(), false) {
            handle_error(&e);
        }
    }

    fn service(&mut self, id: ClientId, readiness: Readiness) {
        if !self.registry.contains(id) {
            debug!("Skipping readiness for removed client {}", id);
            return;
        }

        if let Err(e) = service_connection(
            &mut self.registry,
            id,
            readiness,
            self.config.read_chunk_size,
        ) {
            warn!("Failed to service client {}: {}", id, e);
        }
    }
}
