pub mod models;

pub use models::Config;

use crate::error::{Error, Result};
use log::debug;
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

impl Config {
    /// Reads a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| {
            Error::Config(format!("Failed to open config file {}: {}", path.display(), e))
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Config = serde_yaml::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;
        config.checked()
    }

    /// Reads the process environment, after merging a `.env` file from the
    /// working directory if there is one.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("Missing environment variable {}", key)))
        };

        let config = Config {
            customernumber: required("customernumber")?,
            apikey: required("apikey")?,
            apipassword: required("apipassword")?,
            domain: required("domain")?,
            api_url: lookup("api_url").unwrap_or_else(models::default_api_url),
            ip_service_url: lookup("ip_service_url")
                .unwrap_or_else(models::default_ip_service_url),
        };
        config.checked()
    }

    /// Loads from `path` when given, otherwise from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_env(),
        }
    }

    fn checked(self) -> Result<Self> {
        self.validate()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(self)
    }
}
