//! Configuration management for relaychat
//!
//! Host and port always come from the command line. Everything else is loaded
//! from built-in defaults, an optional `relaychat.toml` in the working directory,
//! and `RELAYCHAT_*` environment variables, in that order.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Base name of the optional configuration file (`relaychat.toml`).
pub const CONFIG_FILE: &str = "relaychat";

/// Prefix of environment overrides, e.g. `RELAYCHAT_READ_CHUNK_SIZE=2048`.
pub const ENV_PREFIX: &str = "RELAYCHAT";

/// Complete configuration shared by both binaries
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    #[serde(flatten)]
    pub server: ServerConfig,

    #[serde(flatten)]
    pub client: ClientConfig,
}

/// Settings used by the server reactor
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Maximum number of bytes taken from a client socket per readable notification
    pub read_chunk_size: usize,
}

/// Settings used by the terminal client
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Text printed before each line of user input
    pub prompt: String,

    /// Input line that leaves the chat
    pub quit_command: String,

    /// Maximum number of bytes taken from the server per receive
    pub receive_chunk_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            read_chunk_size: 1024,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            prompt: "me> ".to_string(),
            quit_command: "end".to_string(),
            receive_chunk_size: 1024,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

impl ChatConfig {
    /// Load configuration from `relaychat.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE, ENV_PREFIX)
    }

    /// Load configuration from the named file (if present) and environment prefix
    pub fn load_from(file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = ChatConfig::default();

        let settings = Config::builder()
            .set_default("read_chunk_size", defaults.server.read_chunk_size as i64)?
            .set_default("prompt", defaults.client.prompt)?
            .set_default("quit_command", defaults.client.quit_command)?
            .set_default(
                "receive_chunk_size",
                defaults.client.receive_chunk_size as i64,
            )?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        let config: ChatConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.read_chunk_size == 0 {
            return Err(ConfigError::Message(
                "read_chunk_size must be greater than 0".into(),
            ));
        }

        if self.client.receive_chunk_size == 0 {
            return Err(ConfigError::Message(
                "receive_chunk_size must be greater than 0".into(),
            ));
        }

        if self.client.quit_command.trim().is_empty() {
            return Err(ConfigError::Message(
                "quit_command cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = ChatConfig::load_from("does-not-exist", "RELAYCHAT_TEST_NONE").unwrap();
        assert_eq!(config, ChatConfig::default());
        assert_eq!(config.server.read_chunk_size, 1024);
        assert_eq!(config.client.prompt, "me> ");
        assert_eq!(config.client.quit_command, "end");
    }

    #[test]
    fn test_env_override() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("RELAYCHAT_TEST_ENV_READ_CHUNK_SIZE", "2048") };
        let config = ChatConfig::load_from("does-not-exist", "RELAYCHAT_TEST_ENV").unwrap();
        assert_eq!(config.server.read_chunk_size, 2048);
        assert_eq!(config.client.receive_chunk_size, 1024);
    }

    #[test]
    fn test_validate_rejects_zero_chunk() {
        let mut config = ChatConfig::default();
        config.server.read_chunk_size = 0;
        assert!(config.validate().is_err());

        let mut config = ChatConfig::default();
        config.client.quit_command = "  ".into();
        assert!(config.validate().is_err());
    }
}
