//! Connection pool configuration.

use std::time::Duration;

/// Configuration for the shared connection pool.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// Database URL, `mysql://` or `sqlite:`.
    pub database_url: String,

    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Minimum number of connections kept open.
    pub min_connections: u32,

    /// How long to wait for a connection before failing.
    pub connect_timeout: Duration,

    /// Close connections idle for longer than this.
    pub idle_timeout: Option<Duration>,

    /// Log every statement through sqlx.
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Create a new configuration with the given database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
            idle_timeout: Some(Duration::from_secs(10 * 60)),
            sqlx_logging: false,
        }
    }

    /// A private in-memory SQLite database.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to a single connection that is never reaped.
    pub fn in_memory_sqlite() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
            idle_timeout: None,
            ..Self::new("sqlite::memory:")
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn sqlx_logging(mut self, enabled: bool) -> Self {
        self.sqlx_logging = enabled;
        self
    }

    /// URL with any credentials masked, for logs.
    pub fn redacted_url(&self) -> String {
        let url = &self.database_url;
        match (url.find("://"), url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://***{}", &url[..scheme_end], &url[at..])
            }
            _ => url.clone(),
        }
    }

    /// Whether the URL points at SQLite.
    pub fn is_sqlite(&self) -> bool {
        self.database_url.starts_with("sqlite:")
    }

    /// Convert to SeaORM ConnectOptions.
    pub fn to_connect_options(&self) -> sea_orm::ConnectOptions {
        let mut options = sea_orm::ConnectOptions::new(self.database_url.clone());

        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(self.sqlx_logging);

        if let Some(idle) = self.idle_timeout {
            options.idle_timeout(idle);
        }

        options
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite://wastedash.db?mode=rwc")
    }
}
