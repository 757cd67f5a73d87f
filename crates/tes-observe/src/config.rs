use std::{fmt, io::IsTerminal, str::FromStr};

use tracing_subscriber::EnvFilter;

use crate::error::LoggerError;

/// Target prefix of the events emitted by the request dispatcher.
const API_TARGET: &str = "tes_api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event, for log shippers.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        })
    }
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LogFormat,
    /// Base `EnvFilter` directive, e.g. `info` or `warn,my_service=debug`.
    pub level: String,
    /// Level for request dispatch events; falls back to `level` when unset.
    pub api_level: Option<String>,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            api_level: None,
            with_targets: true,
            use_color: std::io::stdout().is_terminal(),
        }
    }
}

impl LoggerConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_api_level(mut self, level: impl Into<String>) -> Self {
        self.api_level = Some(level.into());
        self
    }

    /// Full filter directive: the base level plus the dispatcher override.
    pub fn directive(&self) -> String {
        match &self.api_level {
            Some(api) => format!("{},{API_TARGET}={api}", self.level),
            None => self.level.clone(),
        }
    }

    pub fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let directive = self.directive();
        EnvFilter::try_new(&directive).map_err(|e| LoggerError::InvalidDirective {
            directive,
            reason: e.to_string(),
        })
    }
}
