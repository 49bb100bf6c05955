// Layered configuration for the waste management dashboard

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{
    CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH, DatabaseSettings, LogSettings, ServerSettings, Settings,
    ViewSettings, load_dotenv, load_dotenv_from,
};
pub use validation::{ConfigValidator, Validate};
