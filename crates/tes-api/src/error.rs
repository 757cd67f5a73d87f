use serde::{Deserialize, Serialize};
use tes_model::{ConstraintError, EncodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ConstraintError),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

impl ApiError {
    /// HTTP-style status class a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) | ApiError::UnknownOperation(_) => 400,
            ApiError::TaskNotFound(_) => 404,
            ApiError::Internal(_) | ApiError::Encode(_) => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::UnknownOperation(_) => "unknown_operation",
            ApiError::TaskNotFound(_) => "task_not_found",
            ApiError::Internal(_) => "internal",
            ApiError::Encode(_) => "encode",
        }
    }

    /// Client-facing body describing the failure.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
            field: match self {
                ApiError::InvalidRequest(e) => e.field().map(str::to_string),
                _ => None,
            },
        }
    }
}

/// JSON error payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
