//! Server-generated chat content
//!
//! Formats the join and leave notices and the sender prefix of relayed chat lines.

/// Separator placed between a sender's name and its relayed bytes.
pub const SENDER_SEPARATOR: &str = "> ";

/// Notice sent to everyone else when a client connects.
pub fn join_notice(name: &str) -> String {
    format!("{} has entered the chat.", name)
}

/// Notice sent to everyone else when a client disconnects, cleanly or not.
pub fn leave_notice(name: &str) -> String {
    format!("{} has left the chat.", name)
}

/// Builds `"<name>> " + message`.
pub fn prefixed(name: &str, message: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(name.len() + SENDER_SEPARATOR.len() + message.len());
    payload.extend_from_slice(name.as_bytes());
    payload.extend_from_slice(SENDER_SEPARATOR.as_bytes());
    payload.extend_from_slice(message);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices() {
        assert_eq!(join_notice("user1"), "user1 has entered the chat.");
        assert_eq!(leave_notice("user0"), "user0 has left the chat.");
    }

    #[test]
    fn test_prefixed_keeps_raw_bytes() {
        assert_eq!(prefixed("user0", b"hello"), b"user0> hello".to_vec());
        assert_eq!(prefixed("user3", &[0xff, b'\n']), b"user3> \xff\n".to_vec());
    }
}
