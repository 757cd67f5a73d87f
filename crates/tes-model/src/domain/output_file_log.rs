use serde::{Deserialize, Serialize};

use crate::{
    Entity,
    validate::{Field, INT, STRING},
};

/// A file produced by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFileLog {
    pub url: String,
    pub path: String,
    pub size_bytes: i64,
}

impl OutputFileLog {
    pub fn new(url: impl Into<String>, path: impl Into<String>, size_bytes: i64) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            size_bytes,
        }
    }
}

impl Entity for OutputFileLog {
    const NAME: &'static str = "OutputFileLog";
    const FIELDS: &'static [Field] = &[
        Field::new("url", STRING),
        Field::new("path", STRING),
        Field::new("size_bytes", INT),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstraintKind;
    use serde_json::json;

    #[test]
    fn size_bytes_is_required_int() {
        let err = OutputFileLog::from_value(json!({"url": "s3://b/o", "path": "/o"})).unwrap_err();
        assert_eq!(err.kind(), ConstraintKind::Missing);

        let err = OutputFileLog::from_value(json!({"url": "s3://b/o", "path": "/o", "size_bytes": "12"}))
            .unwrap_err();
        assert_eq!(err.kind(), ConstraintKind::Type);

        let log = OutputFileLog::from_value(json!({"url": "s3://b/o", "path": "/o", "size_bytes": 12}))
            .unwrap();
        assert_eq!(log, OutputFileLog::new("s3://b/o", "/o", 12));
    }
}
