use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    ConstraintError, EncodeError, Mapping, TextOptions,
    text::encode,
    validate::{self, Field},
    value::{drop_empty, kind_of, sort_keys},
};

/// Behavior shared by every TES record.
///
/// Records are plain structs; the typed fields make the type and enum
/// constraints hold for values built in Rust. Untyped input (a decoded
/// request body) goes through [`Entity::construct`], which runs the
/// record's [`FIELDS`](Entity::FIELDS) table before decoding.
pub trait Entity: Serialize + DeserializeOwned {
    /// Record name used in diagnostics.
    const NAME: &'static str;

    /// Validation table, in field declaration order.
    const FIELDS: &'static [Field];

    /// Check untyped construction arguments against [`FIELDS`](Entity::FIELDS).
    fn validate(args: &Mapping) -> Result<(), ConstraintError> {
        validate::fields(Self::NAME, Self::FIELDS, args)
    }

    /// Build the record from untyped arguments, failing on the first violation.
    fn construct(args: Mapping) -> Result<Self, ConstraintError> {
        Self::validate(&args)?;
        serde_json::from_value(Value::Object(args))
            .map_err(|e| ConstraintError::Decode(e.to_string()))
    }

    /// Build the record from any JSON value; only objects are accepted.
    fn from_value(value: Value) -> Result<Self, ConstraintError> {
        match value {
            Value::Object(args) => Self::construct(args),
            other => Err(ConstraintError::Type {
                field: Self::NAME.to_string(),
                expected: "mapping".to_string(),
                found: kind_of(&other).to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Parse JSON text and build the record from it.
    fn from_text(text: &str) -> Result<Self, ConstraintError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ConstraintError::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    /// Plain nested representation of the record.
    ///
    /// Absent fields are `null` unless `drop_empty` is set, in which case
    /// they are removed together with `null` entries of nested containers.
    fn as_mapping(&self, drop_empty_fields: bool) -> Result<Value, EncodeError> {
        let value = serde_json::to_value(self)?;
        Ok(if drop_empty_fields {
            drop_empty(value)
        } else {
            value
        })
    }

    /// JSON text of [`as_mapping`](Entity::as_mapping).
    fn as_text(&self, opts: &TextOptions) -> Result<String, EncodeError> {
        let mut value = self.as_mapping(opts.drop_empty)?;
        if opts.sort_keys {
            sort_keys(&mut value);
        }
        encode(&value, opts.indent)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use serde_json::json;

    use super::*;
    use crate::{
        CancelTaskRequest, CancelTaskResponse, ConstraintKind, CreateTaskResponse, Executor,
        ExecutorLog, GetTaskRequest, ListTasksRequest, ListTasksResponse, OutputFileLog, Ports,
        Resources, ServiceInfo, ServiceInfoRequest, Task, TaskLog, TaskParameter,
        validate::Check,
    };

    /// Drop each required field, then give it a wrong-typed value, and
    /// expect the matching failure; every optional field must accept `null`.
    fn check_fields<E: Entity + Debug>(sample: Value) {
        let Value::Object(args) = sample else {
            panic!("{} sample is not an object", E::NAME);
        };
        E::construct(args.clone()).expect("sample must be valid");

        for field in E::FIELDS {
            if field.is_required() {
                let mut missing = args.clone();
                missing.remove(field.name);
                let err = E::construct(missing).unwrap_err();
                assert_eq!(err.kind(), ConstraintKind::Missing, "{}.{}", E::NAME, field.name);

                let mut wrong = args.clone();
                wrong.insert(field.name.to_string(), json!(true));
                let expected = match field.check {
                    Check::OneOf(_) => ConstraintKind::Value,
                    _ => ConstraintKind::Type,
                };
                let err = E::construct(wrong).unwrap_err();
                assert_eq!(err.kind(), expected, "{}.{}", E::NAME, field.name);
            } else {
                let mut absent = args.clone();
                absent.insert(field.name.to_string(), Value::Null);
                assert!(E::construct(absent).is_ok(), "{}.{}", E::NAME, field.name);
            }
        }
    }

    #[test]
    fn every_record_enforces_its_table() {
        check_fields::<TaskParameter>(json!({"url": "s3://b/x", "path": "/x", "type": "FILE"}));
        check_fields::<Resources>(json!({}));
        check_fields::<Ports>(json!({"host": 1, "container": 2}));
        check_fields::<Executor>(json!({"image_name": "ubuntu", "cmd": ["true"]}));
        check_fields::<ExecutorLog>(json!({}));
        check_fields::<OutputFileLog>(json!({"url": "s3://b/x", "path": "/x", "size_bytes": 1}));
        check_fields::<TaskLog>(json!({}));
        check_fields::<Task>(json!({}));
        check_fields::<GetTaskRequest>(json!({"id": "t1"}));
        check_fields::<CreateTaskResponse>(json!({"id": "t1"}));
        check_fields::<ServiceInfoRequest>(json!({}));
        check_fields::<ServiceInfo>(json!({}));
        check_fields::<CancelTaskRequest>(json!({"id": "t1"}));
        check_fields::<CancelTaskResponse>(json!({}));
        check_fields::<ListTasksRequest>(json!({}));
        check_fields::<ListTasksResponse>(json!({"tasks": []}));
    }

    #[test]
    fn from_value_rejects_non_objects() {
        let err = Task::from_value(json!(["t1"])).unwrap_err();
        assert_eq!(err.kind(), ConstraintKind::Type);
        assert_eq!(err.field(), Some("Task"));
    }

    #[test]
    fn from_text_reports_bad_json() {
        let err = Task::from_text("{\"id\": ").unwrap_err();
        assert_eq!(err.kind(), ConstraintKind::Decode);
    }

    #[test]
    fn pruned_mapping_is_a_fixed_point() {
        let task = Task::from_value(json!({
            "id": "t1",
            "tags": {"a": null, "b": {"c": null}},
            "executors": [{"image_name": "ubuntu", "cmd": ["true"], "environ": {}}],
            "logs": [{"metadata": {"x": [null, 1]}}],
        }))
        .unwrap();

        let once = task.as_mapping(true).unwrap();
        assert_eq!(drop_empty(once.clone()), once);
        assert_eq!(once["tags"], json!({"b": {}}));
        assert_eq!(once["logs"][0]["metadata"], json!({"x": [1]}));
    }

    #[test]
    fn roundtrip_with_absent_markers_omitted() {
        let task = Task::from_value(json!({"id": "t1", "volumes": ["/data"]})).unwrap();
        let pruned = task.as_mapping(true).unwrap();
        assert_eq!(Task::from_value(pruned).unwrap(), task);
    }
}
