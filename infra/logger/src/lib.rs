//! # Logger
//!
//! One place to bootstrap the global `tracing` subscriber for every Atlas host.
//!
//! * Native hosts (desktop, tests) get a compact console layer, an optional rolling
//!   file layer written through a non-blocking worker, and environment-based filtering
//!   (`RUST_LOG` or [`LoggerBuilder::env_filter`]).
//! * The browser build forwards events to the devtools console through Dioxus' logger.
//!
//! ## Example
//!
//! ```rust
//! # use atlas_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("atlas")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
#[cfg(not(target_arch = "wasm32"))]
pub use tracing_appender::rolling::Rotation;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use tracing_appender::non_blocking::WorkerGuard;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_FILES: usize = 10;
#[cfg(not(target_arch = "wasm32"))]
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    #[cfg(not(target_arch = "wasm32"))]
    env_filter: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    file: Option<FileConfig>,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct FileConfig {
    path: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::INFO,
            #[cfg(not(target_arch = "wasm32"))]
            env_filter: None,
            #[cfg(not(target_arch = "wasm32"))]
            file: None,
        }
    }
}

/// A builder for configuring and initializing the global tracing subscriber.
#[must_use = "The builder must be configured before it can be used to initialize the logger."]
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    name: String,
    config: LoggerConfig,
}

impl LoggerBuilder {
    /// Sets the name of the logger. Used as the log file prefix and must not be empty.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Configures the minimum log level to be emitted.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Enables console (terminal or browser devtools) logging.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Adds an explicit env filter (e.g., `atlas_regions=debug,reqwest=info`).
    ///
    /// Invalid filters cause [`LoggerBuilder::init`] to return an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Writes logs into rolling files under `path` (daily rotation by default).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file = Some(FileConfig {
            path: path.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Configures the log file rotation strategy. No-op without [`LoggerBuilder::path`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Configures the maximum number of log files to keep. No-op without [`LoggerBuilder::path`].
    #[cfg(not(target_arch = "wasm32"))]
    pub const fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Writes file logs as JSON lines. No-op without [`LoggerBuilder::path`].
    #[cfg(not(target_arch = "wasm32"))]
    pub const fn json(mut self) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.json = true;
        }
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file worker guard (if any) and must be kept alive
    /// until shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    /// an invalid env filter, or when no output is enabled.
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        self.install()
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.config.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        let has_output = self.config.console || self.config.file.is_some();
        #[cfg(target_arch = "wasm32")]
        let has_output = self.config.console;

        if !has_output {
            return Err(LoggerError::invalid(
                "No logging layers enabled. Enable console or file output.",
            ));
        }

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn install(self) -> Result<Logger, LoggerError> {
        use tracing_appender::rolling::RollingFileAppender;
        use tracing_subscriber::Layer;
        use tracing_subscriber::fmt::layer;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let env_filter = self.build_env_filter()?;
        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(file) = self.config.file {
            std::fs::create_dir_all(&file.path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", file.path.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(file.rotation)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(file.max_files)
                .build(&file.path)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if file.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    #[cfg(target_arch = "wasm32")]
    fn install(self) -> Result<Logger, LoggerError> {
        let Some(level) = self.config.level.into_level() else {
            return Ok(Logger {});
        };

        dioxus::logger::init(level).map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to install browser console logger".into()),
        })?;

        Ok(Logger {})
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build_env_filter(&self) -> Result<tracing_subscriber::EnvFilter, LoggerError> {
        let builder =
            tracing_subscriber::EnvFilter::builder().with_default_directive(self.config.level.into());
        self.config.env_filter.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |filter| {
                builder.parse(filter).map_err(|e| {
                    LoggerError::invalid(format!("Invalid env filter '{filter}': {e}"))
                })
            },
        )
    }
}

/// A handle to the initialized logging system.
///
/// Natively this holds the non-blocking file worker guard; drop it only on shutdown.
#[must_use = "Dropping this handle stops background file logging."]
#[derive(Debug)]
pub struct Logger {
    #[cfg(not(target_arch = "wasm32"))]
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Returns the file worker guard, if file logging is enabled.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
