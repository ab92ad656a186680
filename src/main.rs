//! relaychat server - Entry Point
//!
//! Usage: `relaychat-server <host> <port>`

use log::info;
use std::env;

use relaychat::ChatConfig;
use relaychat::Server;
use relaychat::error::{ServerError, handle_error};
use relaychat::utils::{parse_endpoint_args, setup_logging, usage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging("info");

    let args: Vec<String> = env::args().collect();
    let endpoint = match parse_endpoint_args(&args) {
        Ok(endpoint) => endpoint,
        Err(_) => {
            let program = args.first().map(String::as_str).unwrap_or("relaychat-server");
            println!("{}", usage(program));
            return;
        }
    };

    let config = match ChatConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&ServerError::from(e));
            return;
        }
    };

    info!("Launching chat server...");

    match Server::bind(&endpoint, config.server).await {
        Ok(server) => server.run().await,
        Err(e) => handle_error(&e),
    }
}
