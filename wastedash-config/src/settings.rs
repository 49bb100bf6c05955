// Typed dashboard settings

use crate::{ConfigLoader, ConfigValidator, EnvLoader, Result, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Variable naming the settings file
pub const CONFIG_PATH_VAR: &str = "WASTEDASH_CONFIG";
/// Settings file read when `WASTEDASH_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "wastedash.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub views: ViewSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 6917,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    /// Stored procedure invoked by the reset action on MySQL
    pub reset_procedure: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://wastedash.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            reset_procedure: "sp_reset_waste_management".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
    /// Re-read templates on every render
    pub dev_mode: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            public_dir: PathBuf::from("public"),
            dev_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: String,
    /// `stdout`, `stderr` or a file path to append to
    pub output: String,
    pub thread_ids: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
            output: "stdout".to_string(),
            thread_ids: false,
        }
    }
}

/// Fold `.env` from the working directory into the process environment.
///
/// A missing file is not an error. Any other failure is handed back so the
/// caller can report it once logging is installed.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    dotenvy::dotenv().err().filter(|err| !err.not_found())
}

/// [`load_dotenv`] for an explicit file
pub fn load_dotenv_from(path: &Path) -> Option<dotenvy::Error> {
    dotenvy::from_path(path).err().filter(|err| !err.not_found())
}

impl Settings {
    /// Defaults, then the settings file, then the environment.
    /// Call [`load_dotenv`] first to include `.env`.
    pub fn load() -> Result<Self> {
        Self::load_from(&EnvLoader::from_process())
    }

    /// Same layering as [`Settings::load`] over an explicit environment
    pub fn load_from(env: &EnvLoader) -> Result<Self> {
        let mut settings = match env.get(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(path))?,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        settings.apply_env(env)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read a TOML or JSON file; missing sections and keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading settings file");
        ConfigLoader::auto(path)?.load_typed(path)
    }

    /// Overlay environment variables
    pub fn apply_env(&mut self, env: &EnvLoader) -> Result<()> {
        if let Some(host) = env.get("HOST") {
            self.server.host = host.to_string();
        }
        if let Some(port) = env.parse("PORT")? {
            self.server.port = port;
        }

        if let Some(url) = env.get("DATABASE_URL") {
            self.database.url = url.to_string();
        }
        if let Some(max) = env.parse("DATABASE_MAX_CONNECTIONS")? {
            self.database.max_connections = max;
        }
        if let Some(procedure) = env.get("WASTEDASH_RESET_PROCEDURE") {
            self.database.reset_procedure = procedure.to_string();
        }

        if let Some(dir) = env.get("WASTEDASH_TEMPLATE_DIR") {
            self.views.template_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env.get("WASTEDASH_PUBLIC_DIR") {
            self.views.public_dir = PathBuf::from(dir);
        }
        if let Some(dev) = env.flag("WASTEDASH_DEV_MODE")? {
            self.views.dev_mode = dev;
        }

        if let Some(level) = env.get("WASTEDASH_LOG_LEVEL") {
            self.log.level = level.to_string();
        }
        if let Some(format) = env.get("WASTEDASH_LOG_FORMAT") {
            self.log.format = format.to_string();
        }
        if let Some(output) = env.get("WASTEDASH_LOG_OUTPUT") {
            self.log.output = output.to_string();
        }
        if let Some(thread_ids) = env.flag("WASTEDASH_LOG_THREAD_IDS")? {
            self.log.thread_ids = thread_ids;
        }

        Ok(())
    }

    /// Host and port joined for display
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.server.host, "server.host")?;
        ConfigValidator::is_port(self.server.port, "server.port")?;
        ConfigValidator::not_empty(&self.database.url, "database.url")?;
        ConfigValidator::in_range(
            self.database.max_connections,
            1,
            1024,
            "database.max_connections",
        )?;
        ConfigValidator::in_range(
            self.database.min_connections,
            0,
            self.database.max_connections,
            "database.min_connections",
        )?;
        ConfigValidator::is_identifier(&self.database.reset_procedure, "database.reset_procedure")?;
        ConfigValidator::one_of(
            &self.log.level,
            &["trace", "debug", "info", "warn", "warning", "error"],
            "log.level",
        )?;
        ConfigValidator::one_of(
            &self.log.format,
            &["json", "plain", "text", "pretty", "compact"],
            "log.format",
        )?;
        ConfigValidator::not_empty(&self.log.output, "log.output")?;
        Ok(())
    }
}
