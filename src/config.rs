//! Configuration loading and management.
//!
//! A client is described by three TOML tables: `[server]` (where to
//! connect), `[identity]` (who to register as) and `[connection]` (engine
//! tuning). Every `[connection]` key has a default.

use serde::Deserialize;
use slirc_proto::UnknownCodePolicy;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for [`ClientConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A required field is empty.
    #[error("{0} is required")]
    Missing(&'static str),
    /// A numeric field is zero.
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// IP version used when resolving the server host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    /// IPv4 addresses only.
    #[default]
    V4,
    /// IPv6 addresses only.
    V6,
}

impl IpVersion {
    /// Returns true if `addr` belongs to this IP version.
    pub fn matches(self, addr: &std::net::SocketAddr) -> bool {
        match self {
            Self::V4 => addr.is_ipv4(),
            Self::V6 => addr.is_ipv6(),
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("IPv4"),
            Self::V6 => f.write_str("IPv6"),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Remote server.
    pub server: ServerConfig,
    /// Registration identity.
    pub identity: IdentityConfig,
    /// Engine tuning.
    #[serde(default)]
    pub connection: ConnectionConfig,
}

/// Remote server address and credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Hostname or IP literal.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Address family to resolve `host` to.
    #[serde(default)]
    pub ip_version: IpVersion,
    /// Connection password, sent as PASS before registration. An empty
    /// password is treated as none.
    pub password: Option<String>,
}

/// Registration identity.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Nickname, also used as the USER username.
    pub nickname: String,
    /// Real name sent in USER.
    pub realname: String,
}

/// Engine tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    /// How numeric codes missing from the registry are handled.
    #[serde(default)]
    pub unknown_numerics: UnknownCodePolicy,
    /// Socket read timeout; bounds how long shutdown waits for the listener.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
    /// TCP connect timeout per resolved address.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Size of each socket read.
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
}

fn default_read_timeout_ms() -> u64 {
    500
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_read_buffer_size() -> usize {
    4096
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            unknown_numerics: UnknownCodePolicy::default(),
            read_timeout_ms: default_read_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            read_buffer_size: default_read_buffer_size(),
        }
    }
}

impl ConnectionConfig {
    /// [`read_timeout_ms`](Self::read_timeout_ms) as a `Duration`.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// [`connect_timeout_ms`](Self::connect_timeout_ms) as a `Duration`.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl ClientConfig {
    /// Create a configuration with default connection settings.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        nickname: impl Into<String>,
        realname: impl Into<String>,
    ) -> Self {
        Self {
            server: ServerConfig {
                host: host.into(),
                port,
                ip_version: IpVersion::default(),
                password: None,
            },
            identity: IdentityConfig {
                nickname: nickname.into(),
                realname: realname.into(),
            },
            connection: ConnectionConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the server password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.server.password = Some(password.into());
        self
    }

    /// Resolve the host to this address family only.
    pub fn with_ip_version(mut self, ip_version: IpVersion) -> Self {
        self.server.ip_version = ip_version;
        self
    }

    /// Choose how numeric codes missing from the registry are handled.
    pub fn with_unknown_numerics(mut self, policy: UnknownCodePolicy) -> Self {
        self.connection.unknown_numerics = policy;
        self
    }

    /// Set the socket read timeout, saturating at `u64::MAX` milliseconds.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.connection.read_timeout_ms = timeout.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    /// Check the fields that would make a connection attempt meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Missing("server.host"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Zero("server.port"));
        }
        if self.identity.nickname.is_empty() {
            return Err(ConfigError::Missing("identity.nickname"));
        }
        if self.connection.read_buffer_size == 0 {
            return Err(ConfigError::Zero("connection.read_buffer_size"));
        }
        Ok(())
    }
}
