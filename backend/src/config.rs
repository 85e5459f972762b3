use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Only origin allowed to make credentialed cross-origin requests.
    pub frontend_url: Option<String>,
    pub static_files_path: Option<String>,
    /// JSON file with the category list; the built-in catalog is used when unset.
    pub catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "4000".to_string());

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            frontend_url: non_empty_var("FRONTEND_URL"),
            static_files_path: non_empty_var("STATIC_FILES_PATH"),
            catalog_path: non_empty_var("CATALOG_PATH"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
