//! Module `session`
//!
//! The two halves of a terminal chat session: a receive loop that prints what
//! the server relays, and a send loop that forwards each line typed by the user.

use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;

use crate::config::ClientConfig;
use crate::error::ChatClientError;
use crate::terminal::Connection;
use crate::utils::Endpoint;

/// Formats a received chunk so it overwrites the pending prompt and redraws it.
pub fn render_incoming(message: &[u8], prompt: &str) -> String {
    format!("\r{}\n{}", String::from_utf8_lossy(message), prompt)
}

/// Prints everything the server sends until the connection closes or fails.
pub fn receive_messages<W: Write>(conn: &Connection, out: &mut W, config: &ClientConfig) {
    let mut buf = vec![0u8; config.receive_chunk_size];

    loop {
        match conn.receive(&mut buf) {
            Ok(0) => {
                debug!("Server closed the connection");
                conn.close();
                break;
            }
            Ok(n) => {
                let rendered = render_incoming(&buf[..n], &config.prompt);
                if let Err(e) = out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
                    warn!("Failed to print message: {}", e);
                    conn.close();
                    break;
                }
            }
            Err(e) => {
                // A read interrupted by our own close is not worth reporting.
                if !conn.is_closed() {
                    let _ = writeln!(out, "Error handling message from server: {}", e);
                }
                conn.close();
                break;
            }
        }
    }
}

/// Sends each input line until the quit command, end of input, or a closed connection.
pub fn send_messages<R: BufRead, W: Write>(
    conn: &Connection,
    mut input: R,
    out: &mut W,
    config: &ClientConfig,
) -> Result<(), ChatClientError> {
    let mut line = String::new();

    loop {
        if conn.is_closed() {
            writeln!(out, "Connection closed by server.")?;
            return Ok(());
        }

        write!(out, "{}", config.prompt)?;
        out.flush()?;

        line.clear();
        let n = input.read_line(&mut line)?;
        let message = line.trim_end_matches(&['\r', '\n'][..]);

        if n == 0 || message == config.quit_command {
            writeln!(out, "Leaving chat...")?;
            conn.close();
            return Ok(());
        }

        if message.is_empty() {
            continue;
        }

        if let Err(e) = conn.send(message.as_bytes()) {
            if conn.is_closed() {
                continue;
            }
            conn.close();
            return Err(e.into());
        }
    }
}

/// Connects and runs a session on the process's stdin and stdout.
///
/// The receive loop runs on its own thread; the send loop runs on the caller's.
pub fn run(endpoint: &Endpoint, config: &ClientConfig) -> Result<(), ChatClientError> {
    println!("Trying to connect...");
    let conn = Arc::new(Connection::connect(endpoint)?);
    println!("Connected!");
    info!("Connected to {}", endpoint);

    let receiver = {
        let conn = Arc::clone(&conn);
        let config = config.clone();
        thread::Builder::new()
            .name("receiver".into())
            .spawn(move || receive_messages(&conn, &mut io::stdout(), &config))?
    };

    let result = send_messages(&conn, io::stdin().lock(), &mut io::stdout(), config);

    conn.close();
    if receiver.join().is_err() {
        warn!("Receive thread panicked");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use std::net::{TcpListener, TcpStream};

    fn pair() -> (Connection, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let client = TcpStream::connect(listener.local_addr().unwrap()).unwrap();
        let (server, _) = listener.accept().unwrap();
        (Connection::from_stream(client), server)
    }

    #[test]
    fn test_render_incoming() {
        assert_eq!(
            render_incoming(b"user0> hello", "me> "),
            "\ruser0> hello\nme> "
        );
    }

    #[test]
    fn test_send_messages_until_quit() {
        let (conn, mut server) = pair();
        let config = ClientConfig::default();
        let input = Cursor::new("hello\n\nsecond\r\nend\nnever sent\n");
        let mut out = Vec::new();

        send_messages(&conn, input, &mut out, &config).unwrap();
        assert!(conn.is_closed());

        let mut received = Vec::new();
        server.read_to_end(&mut received).unwrap();
        assert_eq!(received, b"hellosecond");

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("me> "));
        assert!(out.ends_with("Leaving chat...\n"));
    }

    #[test]
    fn test_end_of_input_leaves() {
        let (conn, _server) = pair();
        let mut out = Vec::new();

        send_messages(&conn, Cursor::new(""), &mut out, &ClientConfig::default()).unwrap();

        assert!(conn.is_closed());
        assert!(String::from_utf8(out).unwrap().contains("Leaving chat..."));
    }

    #[test]
    fn test_send_stops_after_remote_close() {
        let (conn, _server) = pair();
        conn.close();
        let mut out = Vec::new();

        send_messages(&conn, Cursor::new("hello\n"), &mut out, &ClientConfig::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Connection closed by server.\n");
    }

    #[test]
    fn test_receive_messages_until_server_closes() {
        let (conn, mut server) = pair();
        server.write_all(b"user1 has entered the chat.").unwrap();
        drop(server);

        let mut out = Vec::new();
        receive_messages(&conn, &mut out, &ClientConfig::default());

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with('\r'));
        assert!(out.contains("user1 has entered the chat."));
        assert!(out.ends_with("me> "));
        assert!(conn.is_closed());
    }

    #[test]
    fn test_receive_ends_when_closed_locally() {
        let (conn, _server) = pair();
        let conn = Arc::new(conn);

        let receiver = {
            let conn = Arc::clone(&conn);
            thread::spawn(move || {
                let mut out = Vec::new();
                receive_messages(&conn, &mut out, &ClientConfig::default());
                out
            })
        };

        conn.close();
        let out = receiver.join().unwrap();
        assert!(out.is_empty());
    }
}
