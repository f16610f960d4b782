//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `STOREFRONT_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence order.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

/// Runtime configuration for the storefront server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct AppSettings {
    /// PostgreSQL connection string. Without it reads are empty and writes
    /// are refused.
    pub database_url: Option<String>,
    /// Interface to bind.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Maximum number of pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Seconds a request may wait for a pooled connection.
    #[ortho_config(default = 30)]
    pub pool_connection_timeout_secs: u64,
}

impl AppSettings {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Pool settings, or `None` when no connection string is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        Some(
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size)
                .with_connection_timeout(Duration::from_secs(self.pool_connection_timeout_secs)),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("storefront-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env([
            ("STOREFRONT_DATABASE_URL", None::<String>),
            ("STOREFRONT_HOST", None::<String>),
            ("STOREFRONT_PORT", None::<String>),
            ("STOREFRONT_POOL_MAX_SIZE", None::<String>),
            ("STOREFRONT_POOL_CONNECTION_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.pool_max_size, 10);
        assert_eq!(settings.pool_connection_timeout_secs, 30);
        assert!(settings.pool_config().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "STOREFRONT_DATABASE_URL",
                Some("postgres://app@db/tienda".to_owned()),
            ),
            ("STOREFRONT_HOST", Some("127.0.0.1".to_owned())),
            ("STOREFRONT_PORT", Some("9090".to_owned())),
            ("STOREFRONT_POOL_MAX_SIZE", Some("3".to_owned())),
            ("STOREFRONT_POOL_CONNECTION_TIMEOUT_SECS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
        let pool = settings.pool_config().expect("pool configured");
        assert_eq!(pool.database_url(), "postgres://app@db/tienda");
        assert_eq!(pool.max_size(), 3);
        assert_eq!(pool.connection_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn host_names_are_rejected_as_bind_addresses() {
        let _guard = lock_env([("STOREFRONT_HOST", Some("localhost".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
