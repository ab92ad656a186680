//! relaychat terminal client
//!
//! Usage: `relaychat-client <host> <port>`. Type `end` to leave.

use std::env;

use relaychat::ChatConfig;
use relaychat::error::{ChatClientError, handle_error};
use relaychat::terminal;
use relaychat::utils::{parse_endpoint_args, setup_logging, usage};

fn main() {
    // Keep the chat transcript on stdout free of routine log lines.
    setup_logging("warn");

    let args: Vec<String> = env::args().collect();
    let endpoint = match parse_endpoint_args(&args) {
        Ok(endpoint) => endpoint,
        Err(_) => {
            let program = args.first().map(String::as_str).unwrap_or("relaychat-client");
            println!("{}", usage(program));
            return;
        }
    };

    let config = match ChatConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&ChatClientError::from(e));
            return;
        }
    };

    match terminal::run(&endpoint, &config.client) {
        Ok(()) => {}
        Err(ChatClientError::Connect(_, e)) => println!("Error connecting to server: {}", e),
        Err(e) => {
            println!("Error: {}", e);
            handle_error(&e);
        }
    }
}
