//! Configuration for Keystone sites.
//!
//! A site file (JSON or TOML) lists the forms on a site together with
//! transport and logging settings. `KEYSTONE_*` environment variables, or a
//! `.env` file, override individual settings.
//!
//! ```no_run
//! use keystone_config::{SiteConfig, load_dotenv};
//!
//! load_dotenv(None)?;
//! let config = SiteConfig::load("site.toml")?;
//! config.logging.log_config().try_init().ok();
//! # Ok::<(), keystone_config::ConfigError>(())
//! ```

pub mod env;
pub mod error;
pub mod loader;
pub mod site;
pub mod validation;

pub use env::{ENV_PREFIX, EnvLoader, load_dotenv};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use site::{
    ClientSettings, FieldDefinition, FormDefinition, LoggingSettings, MountedForm, SiteConfig,
};
pub use validation::{ConfigValidator, Validate};
