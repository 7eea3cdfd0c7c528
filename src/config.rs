use std::{env, net::SocketAddr, path::PathBuf};

use thiserror::Error;

use crate::domain::logs::MOCK_LOG_LINES;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
    pub sdk_source_path: PathBuf,
    pub log_lines: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("MOCK_LOG_LINES must be a non-negative integer")]
    InvalidLogLines,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let bind_port = env::var("BIND_PORT")
            .ok()
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8000);
        let sdk_source_path = env::var("SDK_SOURCE_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./sdk.ts"));
        let log_lines = env::var("MOCK_LOG_LINES")
            .ok()
            .map(|value| {
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidLogLines)
            })
            .transpose()?
            .unwrap_or(MOCK_LOG_LINES);

        let config = Self {
            bind_addr,
            bind_port,
            sdk_source_path,
            log_lines,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global; keep every case in one test so they don't race.
    #[test]
    fn parses_environment() {
        env::remove_var("BIND_ADDR");
        env::remove_var("BIND_PORT");
        env::remove_var("SDK_SOURCE_PATH");
        env::remove_var("MOCK_LOG_LINES");

        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.sdk_source_path, PathBuf::from("./sdk.ts"));
        assert_eq!(config.log_lines, MOCK_LOG_LINES);

        env::set_var("BIND_ADDR", "127.0.0.1");
        env::set_var("BIND_PORT", "9000");
        env::set_var("SDK_SOURCE_PATH", "/srv/sdk.ts");
        env::set_var("MOCK_LOG_LINES", "5");
        let config = Config::from_env().expect("config should parse");
        assert_eq!(
            config.bind_socket().expect("valid socket"),
            "127.0.0.1:9000".parse().expect("valid socket")
        );
        assert_eq!(config.sdk_source_path, PathBuf::from("/srv/sdk.ts"));
        assert_eq!(config.log_lines, 5);

        env::set_var("BIND_PORT", "70000");
        let err = Config::from_env().expect_err("expected invalid port error");
        assert!(matches!(err, ConfigError::InvalidPort));
        env::remove_var("BIND_PORT");

        env::set_var("MOCK_LOG_LINES", "-1");
        let err = Config::from_env().expect_err("expected invalid log lines error");
        assert!(matches!(err, ConfigError::InvalidLogLines));
        env::remove_var("MOCK_LOG_LINES");

        env::set_var("BIND_ADDR", "not an address");
        let err = Config::from_env().expect_err("expected invalid socket error");
        assert!(matches!(err, ConfigError::InvalidSocket));
        env::remove_var("BIND_ADDR");
        env::remove_var("SDK_SOURCE_PATH");
    }
}
