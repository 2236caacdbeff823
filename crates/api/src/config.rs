use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Settings for the demo server, read from the environment (after `.env`).
///
/// | Env Var                | Default   |
/// |------------------------|-----------|
/// | `HOST`                 | `0.0.0.0` |
/// | `PORT`                 | `3000`    |
/// | `REQUEST_TIMEOUT_SECS` | `30`      |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Requests still running after this long get a 408 envelope.
    pub request_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source. Unset variables take
    /// their defaults; set but unparsable ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = read(&lookup, "HOST", "0.0.0.0")?;
        let port: u16 = read(&lookup, "PORT", "3000")?;
        let timeout_secs: u64 = read(&lookup, "REQUEST_TIMEOUT_SECS", "30")?;

        Ok(Self {
            addr: SocketAddr::new(host, port),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
