//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the simulator and
//! the sort benchmark. Console output goes to stderr so that reports printed on
//! stdout stay machine readable.

use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting on the console
    pub json_format: bool,
    /// Directory for daily rolling JSON log files, if any
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

/// Keeps the file writer flushing until dropped
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            log_file_prefix: "fitting-room-simulator".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn build_filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(filter) = &self.env_filter {
            return Ok(EnvFilter::try_new(filter)?);
        }
        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        }))
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = self.build_filter()?;
        let registry = Registry::default().with(env_filter);

        let (file_layer, file_guard) = match &self.log_directory {
            Some(dir) => {
                let file_appender = rolling::daily(dir, &self.log_file_prefix);
                let (file_writer, guard) = non_blocking(file_appender);
                let layer = fmt::layer()
                    .json()
                    .with_writer(file_writer)
                    .with_span_events(self.span_events());
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        // Option<Layer> is itself a layer, so the file sink is simply absent when unset
        if self.json_format {
            let console_layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events());
            registry.with(file_layer).with(console_layer).try_init()?;
        } else {
            let console_layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events());
            registry.with(file_layer).with(console_layer).try_init()?;
        }

        info!(
            log_level = %self.level,
            file_logging = self.log_directory.is_some(),
            "Logging initialized"
        );
        Ok(LoggingGuard { _file_guard: file_guard })
    }

    /// Verbose preset: INFO level with span events
    pub fn verbose() -> Self {
        Self::new().with_level(Level::INFO).with_span_events()
    }

    /// Debug preset: DEBUG level with span events
    pub fn debug() -> Self {
        Self::new().with_level(Level::DEBUG).with_span_events()
    }
}

/// Macro for creating structured log events with simulation context
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $message:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
            $($key = $value,)*
        );
    };
    ($level:ident, $message:expr) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
        );
    };
}

/// Macro for creating performance measurement spans
#[macro_export]
macro_rules! perf_span {
    ($name:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info_span!(
            $name,
            component = "performance",
            $($key = $value,)*
        )
    };
    ($name:expr) => {
        tracing::info_span!(
            $name,
            component = "performance",
        )
    };
}
