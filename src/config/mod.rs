use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; MetaProxy/0.1)";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub user_agent: String,
    /// Upper bound on a whole upstream request. `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                expected: "a port number",
                value,
            })?,
            None => 8787,
        };

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "FETCH_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value,
                    })
                }
            },
            None => None,
        };

        Ok(Config {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port,
            user_agent: lookup("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            fetch_timeout,
            is_production: lookup("APP_ENV").as_deref() == Some("production"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// The shared upstream client. Redirects follow reqwest's default policy.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.fetch_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
