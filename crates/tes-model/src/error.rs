use thiserror::Error;

/// Category of a [`ConstraintError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The value has the wrong type.
    Type,
    /// The value is not a member of the enumerated set.
    Value,
    /// A required field was not supplied.
    Missing,
    /// A field the record does not declare was supplied.
    Unexpected,
    /// The input text was not valid JSON.
    Decode,
}

/// Failure raised while constructing a record from untyped input.
///
/// The `field` of nested failures is a path such as `executors[0].ports[1].host`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("'{field}' must be {expected} (got {found}: {value})")]
    Type {
        field: String,
        expected: String,
        found: String,
        value: String,
    },

    #[error("'{field}' must be one of {allowed:?} (got {value})")]
    Value {
        field: String,
        allowed: Vec<String>,
        value: String,
    },

    #[error("{entity} is missing required field '{field}'")]
    Missing { entity: &'static str, field: String },

    #[error("{entity} got an unexpected field '{field}'")]
    Unexpected { entity: &'static str, field: String },

    #[error("invalid json: {0}")]
    Decode(String),
}

impl ConstraintError {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            ConstraintError::Type { .. } => ConstraintKind::Type,
            ConstraintError::Value { .. } => ConstraintKind::Value,
            ConstraintError::Missing { .. } => ConstraintKind::Missing,
            ConstraintError::Unexpected { .. } => ConstraintKind::Unexpected,
            ConstraintError::Decode(_) => ConstraintKind::Decode,
        }
    }

    /// Field path the failure refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConstraintError::Type { field, .. }
            | ConstraintError::Value { field, .. }
            | ConstraintError::Missing { field, .. }
            | ConstraintError::Unexpected { field, .. } => Some(field),
            ConstraintError::Decode(_) => None,
        }
    }

    /// Re-root the failure under `prefix` (used when a nested record fails).
    pub(crate) fn within(self, prefix: &str) -> Self {
        let join = |field: String| format!("{prefix}.{field}");
        match self {
            ConstraintError::Type {
                field,
                expected,
                found,
                value,
            } => ConstraintError::Type {
                field: join(field),
                expected,
                found,
                value,
            },
            ConstraintError::Value {
                field,
                allowed,
                value,
            } => ConstraintError::Value {
                field: join(field),
                allowed,
                value,
            },
            ConstraintError::Missing { entity, field } => ConstraintError::Missing {
                entity,
                field: join(field),
            },
            ConstraintError::Unexpected { entity, field } => ConstraintError::Unexpected {
                entity,
                field: join(field),
            },
            ConstraintError::Decode(msg) => ConstraintError::Decode(msg),
        }
    }
}

/// Failure while turning a record into its mapping or text form.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("serialized output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
