use anyhow::{Context, Result, bail};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::store::{MemoryStore, PostgresStore, Store, StoreSet};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STORES: &str = "postgres";
const DEFAULT_CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub pass: String,
    pub name: String,
    pub connect_attempts: u32,
    pub retry_delay: Duration,
}

impl PostgresConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.pass, self.host, self.port, self.name
        )
    }
}

impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("connect_attempts", &self.connect_attempts)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres(PostgresConfig),
    Memory,
}

impl StoreConfig {
    pub fn name(&self) -> &'static str {
        match self {
            StoreConfig::Postgres(_) => "postgres",
            StoreConfig::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Key required on mutating routes. `None` leaves them open.
    pub auth_key: Option<String>,
    pub stores: Vec<StoreConfig>,
}

impl ServerConfig {
    /// Reads `SECRETSHOP_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).with_context(|| format!("{} must be set in environment or .env file", key))
        };

        let bind_addr = lookup("SECRETSHOP_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let auth_key = lookup("SECRETSHOP_AUTH").filter(|key| !key.is_empty());

        let store_names = lookup("SECRETSHOP_STORES").unwrap_or_else(|| DEFAULT_STORES.to_string());
        let mut stores = Vec::new();
        for name in store_names.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let store = match name {
                "postgres" => StoreConfig::Postgres(PostgresConfig {
                    host: required("SECRETSHOP_DB_HOST")?,
                    port: required("SECRETSHOP_DB_PORT")?,
                    user: required("SECRETSHOP_DB_USER")?,
                    pass: required("SECRETSHOP_DB_PASS")?,
                    name: required("SECRETSHOP_DB_NAME")?,
                    connect_attempts: match lookup("SECRETSHOP_DB_CONNECT_ATTEMPTS") {
                        Some(raw) => raw
                            .parse()
                            .with_context(|| format!("Invalid SECRETSHOP_DB_CONNECT_ATTEMPTS [{}]", raw))?,
                        None => DEFAULT_CONNECT_ATTEMPTS,
                    },
                    retry_delay: CONNECT_RETRY_DELAY,
                }),
                "memory" => StoreConfig::Memory,
                other => bail!("Unknown store [{}] in SECRETSHOP_STORES", other),
            };
            if stores.iter().any(|s: &StoreConfig| s.name() == store.name()) {
                bail!("Store [{}] listed more than once in SECRETSHOP_STORES", name);
            }
            stores.push(store);
        }

        if stores.is_empty() {
            bail!("SECRETSHOP_STORES must name at least one store");
        }

        Ok(Self {
            bind_addr,
            auth_key,
            stores,
        })
    }
}

/// Connects every configured backend. Fails if any backend cannot be reached.
pub async fn connect_stores(configs: &[StoreConfig]) -> Result<StoreSet> {
    let mut stores: Vec<(String, Arc<dyn Store>)> = Vec::with_capacity(configs.len());

    for config in configs {
        let store: Arc<dyn Store> = match config {
            StoreConfig::Postgres(pg) => Arc::new(connect_postgres(pg).await?),
            StoreConfig::Memory => {
                warn!("Using in-memory store, records will not survive a restart");
                Arc::new(MemoryStore::new())
            }
        };
        info!("Connected store [{}]", config.name());
        stores.push((config.name().to_string(), store));
    }

    Ok(StoreSet::new(stores))
}

async fn connect_postgres(config: &PostgresConfig) -> Result<PostgresStore> {
    let attempts = config.connect_attempts.max(1);
    let mut attempt = 1;
    loop {
        match PostgresStore::connect(config).await {
            Ok(store) => return Ok(store),
            Err(e) if attempt < attempts => {
                warn!("Attempt {}, error connecting to database [postgres]: {}", attempt, e);
                attempt += 1;
                tokio::time::sleep(config.retry_delay).await;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to connect to database [postgres] after {} attempts", attempts)
                });
            }
        }
    }
}
