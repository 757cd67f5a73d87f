use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, time::OffsetTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::{
    config::{LogFormat, LoggerConfig},
    error::LoggerError,
};

/// Build the subscriber described by `cfg` without installing it.
///
/// Exactly one of the text and json layers is present.
pub fn build_subscriber(
    cfg: &LoggerConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggerError> {
    let filter = cfg.filter()?;
    let timer = OffsetTime::new(
        UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        Rfc3339,
    );

    let (text, json) = match cfg.format {
        LogFormat::Text => (
            Some(
                fmt::layer()
                    .with_ansi(cfg.use_color)
                    .with_target(cfg.with_targets)
                    .with_timer(timer),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(cfg.with_targets)
                    .with_timer(timer),
            ),
        ),
    };

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json))
}

/// Install the subscriber described by `cfg` as the global default.
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    build_subscriber(cfg)?
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}
