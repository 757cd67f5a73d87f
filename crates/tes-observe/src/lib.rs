//! Logging for services built on the TES crates.
//!
//! The dispatcher in `tes-api` logs every request at `debug` and every
//! rejected body at `warn`; [`LoggerConfig::api_level`] lets those events be
//! tuned apart from the rest of the service.

mod config;
pub use config::{LogFormat, LoggerConfig};

mod error;
pub use error::LoggerError;

mod subscriber;
pub use subscriber::{build_subscriber, init_logger};
