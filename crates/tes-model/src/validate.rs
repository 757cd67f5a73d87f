//! Field constraint checkers run by [`Entity::construct`](crate::Entity::construct).
//!
//! Every record declares a static table of [`Field`]s. A field whose check is
//! [`Check::Optional`] may be omitted or `null`; every other field is required.

use serde_json::Value;

use crate::{ConstraintError, Entity, Mapping, value::kind_of};

pub const STRING: Check = Check::Type(Kind::Str);
pub const INT: Check = Check::Type(Kind::Int);
pub const NUMBER: Check = Check::Type(Kind::Number);
pub const BOOL: Check = Check::Type(Kind::Bool);
pub const MAPPING: Check = Check::Type(Kind::Mapping);
pub const STRING_LIST: Check = Check::SequenceOf(Kind::Str);
pub const STRING_MAP: Check = Check::MappingOf(Kind::Str);

/// Validation hook of a nested record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordKind {
    pub name: &'static str,
    pub validate: fn(&Mapping) -> Result<(), ConstraintError>,
}

/// Runtime type a value is checked against.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Str,
    /// Integers only; booleans and floats are rejected.
    Int,
    /// Integers or floats.
    Number,
    Bool,
    /// Any JSON object.
    Mapping,
    /// A JSON object that itself constructs as the named record.
    Record(RecordKind),
}

impl Kind {
    pub const fn record<E: Entity>() -> Kind {
        Kind::Record(RecordKind {
            name: E::NAME,
            validate: E::validate,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Str => "string",
            Kind::Int => "int",
            Kind::Number => "number",
            Kind::Bool => "bool",
            Kind::Mapping => "mapping",
            Kind::Record(r) => r.name,
        }
    }

    fn admits(&self, value: &Value) -> bool {
        match self {
            Kind::Str => value.is_string(),
            Kind::Int => value.is_i64(),
            Kind::Number => value.is_number(),
            Kind::Bool => value.is_boolean(),
            Kind::Mapping | Kind::Record(_) => value.is_object(),
        }
    }

    /// Validate the inside of an admitted value; only records have one.
    fn descend(&self, path: &str, value: &Value) -> Result<(), ConstraintError> {
        match (self, value) {
            (Kind::Record(r), Value::Object(map)) => (r.validate)(map).map_err(|e| e.within(path)),
            _ => Ok(()),
        }
    }

    fn verify(&self, field: &str, value: &Value) -> Result<(), ConstraintError> {
        if !self.admits(value) {
            return Err(type_error(field, self.name().to_string(), kind_of(value), value));
        }
        self.descend(field, value)
    }
}

/// A single constraint attached to a field.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Value must be of the given kind.
    Type(Kind),
    /// Value must be a string equal to one of the listed names.
    OneOf(&'static [&'static str]),
    /// Value must be a list whose every element is of the given kind.
    SequenceOf(Kind),
    /// Value must be a mapping whose every value is of the given kind.
    MappingOf(Kind),
    /// `null` passes; anything else goes to the wrapped check.
    Optional(&'static Check),
}

impl Check {
    pub fn verify(&self, field: &str, value: &Value) -> Result<(), ConstraintError> {
        match self {
            Check::Optional(_) if value.is_null() => Ok(()),
            Check::Optional(inner) => inner.verify(field, value),
            Check::Type(kind) => kind.verify(field, value),
            Check::OneOf(allowed) => match value.as_str() {
                Some(s) if allowed.contains(&s) => Ok(()),
                _ => Err(ConstraintError::Value {
                    field: field.to_string(),
                    allowed: allowed.iter().map(|s| s.to_string()).collect(),
                    value: value.to_string(),
                }),
            },
            Check::SequenceOf(kind) => {
                let expected = || format!("a list of {}", kind.name());
                let Value::Array(items) = value else {
                    return Err(type_error(field, expected(), kind_of(value), value));
                };
                for (i, item) in items.iter().enumerate() {
                    if !kind.admits(item) {
                        let found = format!("{} at index {i}", kind_of(item));
                        return Err(type_error(field, expected(), &found, value));
                    }
                    kind.descend(&format!("{field}[{i}]"), item)?;
                }
                Ok(())
            }
            Check::MappingOf(kind) => {
                let expected = || format!("a mapping of {}", kind.name());
                let Value::Object(map) = value else {
                    return Err(type_error(field, expected(), kind_of(value), value));
                };
                for (key, item) in map {
                    if !kind.admits(item) {
                        let found = format!("{} at key '{key}'", kind_of(item));
                        return Err(type_error(field, expected(), &found, value));
                    }
                    kind.descend(&format!("{field}.{key}"), item)?;
                }
                Ok(())
            }
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Check::Optional(_))
    }
}

/// One entry of a record's validation table.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub check: Check,
}

impl Field {
    pub const fn new(name: &'static str, check: Check) -> Self {
        Self { name, check }
    }

    pub fn is_required(&self) -> bool {
        !self.check.is_optional()
    }
}

/// Run a validation table over untyped construction arguments.
///
/// Unknown keys and missing required fields are reported first; then every
/// field is checked in declaration order and the first failure is returned.
pub fn fields(entity: &'static str, table: &[Field], args: &Mapping) -> Result<(), ConstraintError> {
    if let Some(key) = args
        .keys()
        .find(|key| !table.iter().any(|f| f.name == key.as_str()))
    {
        return Err(ConstraintError::Unexpected {
            entity,
            field: key.clone(),
        });
    }

    if let Some(field) = table
        .iter()
        .find(|f| f.is_required() && !args.contains_key(f.name))
    {
        return Err(ConstraintError::Missing {
            entity,
            field: field.name.to_string(),
        });
    }

    for field in table {
        let value = args.get(field.name).unwrap_or(&Value::Null);
        field.check.verify(field.name, value)?;
    }
    Ok(())
}

fn type_error(field: &str, expected: String, found: &str, value: &Value) -> ConstraintError {
    ConstraintError::Type {
        field: field.to_string(),
        expected,
        found: found.to_string(),
        value: value.to_string(),
    }
}
