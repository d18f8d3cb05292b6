use crate::error::{Context, format_context};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "atlas";
/// Prefix for environment overrides (e.g. `ATLAS__API__BASE_URL`).
pub const ENV_PREFIX: &str = "ATLAS";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Context },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

pub trait ConfigErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Passes the original error through, converted into [`ConfigError`].
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// Loads a configuration object from an optional file overlaid with environment variables.
///
/// Layers, lowest priority first:
/// 1. **Defaults**: whatever `T`'s `#[serde(default)]` provides.
/// 2. **File**: `path` (or [`DEFAULT_CONFIG_FILE`]) with any supported extension, e.g. `atlas.toml`.
///    The file is optional; a missing file leaves the defaults untouched.
/// 3. **Environment**: variables prefixed with `ATLAS__`, nested with double underscores
///    (`ATLAS__API__BASE_URL` maps to `api.base_url`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file exists but is malformed, or if the merged
/// values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use atlas_kernel::config::load_config;
/// use atlas_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::with_name(&effective_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
