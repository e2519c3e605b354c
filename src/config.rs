use std::str::FromStr;

// ============================================================================
// Service Configuration
// ============================================================================
//
// Defaults suit local development (in-memory storage). Every field can be
// overridden from the environment:
//
//   CATALOG_STORAGE       memory | scylla
//   SCYLLA_URI            host:port of a ScyllaDB node
//   CATALOG_KEYSPACE      keyspace for the scylla backend
//   CATALOG_METRICS_PORT  port for /metrics and /health
//   CATALOG_LOG_FILTER    default tracing filter when RUST_LOG is unset
//
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown storage backend {0:?} (expected \"memory\" or \"scylla\")")]
    UnknownStorage(String),

    #[error("invalid metrics port {0:?}")]
    InvalidPort(String),

    #[error("invalid keyspace name {0:?}")]
    InvalidKeyspace(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Scylla,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Scylla => "scylla",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(StorageBackend::Memory),
            "scylla" => Ok(StorageBackend::Scylla),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub storage: StorageBackend,
    pub scylla_uri: String,
    pub keyspace: String,
    pub metrics_port: u16,
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Memory,
            scylla_uri: "127.0.0.1:9042".to_string(),
            keyspace: "catalog_ks".to_string(),
            metrics_port: 9090,
            log_filter: "info,catalog_service=debug".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(storage) = lookup("CATALOG_STORAGE") {
            config.storage = storage.parse()?;
        }
        if let Some(uri) = lookup("SCYLLA_URI") {
            config.scylla_uri = uri;
        }
        if let Some(keyspace) = lookup("CATALOG_KEYSPACE") {
            // interpolated into CQL, so keep it to a plain identifier
            let valid = !keyspace.is_empty()
                && keyspace.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(ConfigError::InvalidKeyspace(keyspace));
            }
            config.keyspace = keyspace;
        }
        if let Some(port) = lookup("CATALOG_METRICS_PORT") {
            config.metrics_port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(filter) = lookup("CATALOG_LOG_FILTER") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
