//! Module `broadcast`
//!
//! Fans a message out to every registered client except its sender by appending
//! it to their outbound buffers. No I/O happens here; the connection handler
//! flushes each buffer when its socket reports writable.

use crate::client::{ClientId, ClientRegistry};
use crate::error::ClientError;
use crate::protocol::prefixed;

/// Queues `message` for every client other than `sender`.
///
/// With `include_sender_prefix` the payload becomes `"<sender>> " + message`;
/// join and leave notices are sent without it. Returns the number of recipients.
pub fn broadcast<T>(
    registry: &mut ClientRegistry<T>,
    sender: ClientId,
    message: &[u8],
    include_sender_prefix: bool,
) -> Result<usize, ClientError> {
    let sender_record = registry.get(sender).ok_or(ClientError::NotFound(sender))?;

    let payload = if include_sender_prefix {
        prefixed(sender_record.display_name(), message)
    } else {
        message.to_vec()
    };

    let mut recipients = 0;
    for client in registry.all_mut().filter(|c| c.id() != sender) {
        client.queue(&payload);
        recipients += 1;
    }

    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::join_notice;

    fn registry_with(n: usize) -> ClientRegistry<()> {
        let mut registry = ClientRegistry::new();
        for _ in 0..n {
            registry.register((), "127.0.0.1:6000".parse().unwrap());
        }
        registry
    }

    #[test]
    fn test_broadcast_skips_sender() {
        let mut registry = registry_with(3);
        let sender = ClientId::new(0);

        let recipients = broadcast(&mut registry, sender, b"hi", true).unwrap();
        assert_eq!(recipients, 2);

        assert!(registry.get(sender).unwrap().outbound().is_empty());
        assert_eq!(registry.get(ClientId::new(1)).unwrap().outbound(), b"user0> hi");
        assert_eq!(registry.get(ClientId::new(2)).unwrap().outbound(), b"user0> hi");
    }

    #[test]
    fn test_notice_has_no_prefix() {
        let mut registry = registry_with(2);
        let joiner = ClientId::new(1);
        let notice = join_notice("user1");

        broadcast(&mut registry, joiner, notice.as_bytes(), false).unwrap();

        assert_eq!(
            registry.get(ClientId::new(0)).unwrap().outbound(),
            b"user1 has entered the chat."
        );
        assert!(registry.get(joiner).unwrap().outbound().is_empty());
    }

    #[test]
    fn test_broadcast_appends_in_order() {
        let mut registry = registry_with(3);

        broadcast(&mut registry, ClientId::new(0), b"one", true).unwrap();
        broadcast(&mut registry, ClientId::new(1), b"two", true).unwrap();
        broadcast(&mut registry, ClientId::new(0), b"three", true).unwrap();

        assert_eq!(
            registry.get(ClientId::new(2)).unwrap().outbound(),
            b"user0> oneuser1> twouser0> three"
        );
        assert_eq!(
            registry.get(ClientId::new(1)).unwrap().outbound(),
            b"user0> oneuser0> three"
        );
    }

    #[test]
    fn test_lone_sender_has_no_recipients() {
        let mut registry = registry_with(1);
        assert_eq!(broadcast(&mut registry, ClientId::new(0), b"x", true).unwrap(), 0);
    }

    #[test]
    fn test_unknown_sender() {
        let mut registry = registry_with(1);
        let result = broadcast(&mut registry, ClientId::new(9), b"x", true);
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }
}
