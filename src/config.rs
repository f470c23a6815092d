use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    pub database: DatabaseConfig,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = value("APP_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .context("APP_HOST must be a valid IP address")?;
        let port = value("APP_PORT", "8080")
            .parse::<u16>()
            .context("APP_PORT must be a valid port")?;
        let bind_addr = SocketAddr::new(host, port);

        let store = match value("STORE_BACKEND", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => bail!("STORE_BACKEND must be 'postgres' or 'memory', got '{other}'"),
        };

        let database = DatabaseConfig {
            host: value("POSTGRES_HOST", "localhost"),
            port: value("POSTGRES_PORT", "5432")
                .parse::<u16>()
                .context("POSTGRES_PORT must be a valid port")?,
            user: value("POSTGRES_USER", "postgres"),
            password: value("POSTGRES_PASSWORD", "postgres"),
            name: value("POSTGRES_DB", "postgres"),
            max_connections: value("POSTGRES_MAX_CONNECTIONS", "10")
                .parse::<u32>()
                .context("POSTGRES_MAX_CONNECTIONS must be u32")?,
        };

        let request_timeout = value("REQUEST_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            bind_addr,
            store,
            database,
            request_timeout,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults are valid");

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(config.store, StoreBackend::Postgres);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_database_and_listen_settings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_PORT", "9000"),
            ("POSTGRES_HOST", "database"),
            ("POSTGRES_USER", "park"),
            ("POSTGRES_PASSWORD", "secret"),
            ("POSTGRES_DB", "jurassic"),
            ("POSTGRES_PORT", "6543"),
        ]))
        .expect("valid config");

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.database.host, "database");
        assert_eq!(config.database.user, "park");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "jurassic");
        assert_eq!(config.database.port, 6543);
    }

    #[test]
    fn selects_the_in_memory_store() {
        let config = AppConfig::from_lookup(lookup(&[("STORE_BACKEND", "memory")]))
            .expect("valid config");
        assert_eq!(config.store, StoreBackend::Memory);

        assert!(AppConfig::from_lookup(lookup(&[("STORE_BACKEND", "sqlite")])).is_err());
    }

    #[test]
    fn listens_on_ipv6_hosts() {
        let config = AppConfig::from_lookup(lookup(&[("APP_HOST", "::"), ("APP_PORT", "9000")]))
            .expect("ipv6 wildcard is a valid host");
        assert!(config.bind_addr.is_ipv6());
        assert_eq!(config.bind_addr.to_string(), "[::]:9000");

        let config = AppConfig::from_lookup(lookup(&[("APP_HOST", "::1")])).expect("ipv6 loopback");
        assert_eq!(config.bind_addr.ip(), IpAddr::from([0, 0, 0, 0, 0, 0, 0, 1]));

        let error = AppConfig::from_lookup(lookup(&[("APP_HOST", "localhost")]))
            .expect_err("hostnames are not addresses");
        assert!(error.to_string().contains("APP_HOST"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let error = AppConfig::from_lookup(lookup(&[("APP_PORT", "http")]))
            .expect_err("port must be numeric");
        assert!(error.to_string().contains("APP_PORT"));
    }
}
