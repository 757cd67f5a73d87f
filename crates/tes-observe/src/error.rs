use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format '{0}' (expected text or json)")]
    InvalidFormat(String),

    #[error("bad filter directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("a global logger is already installed")]
    AlreadyInitialized,
}
