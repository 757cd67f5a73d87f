//! Records of the Task Execution Service (TES) API.
//!
//! Each record is a plain struct that can be built directly in Rust or
//! constructed from untyped JSON through [`Entity::construct`], which
//! checks every field against the record's validation table. Records render
//! to a plain [`serde_json::Value`] or to JSON text, optionally dropping
//! absent fields.

mod domain;
pub use domain::*;

mod entity;
pub use entity::Entity;

mod error;
pub use error::{ConstraintError, ConstraintKind, EncodeError};

mod text;
pub use text::TextOptions;

pub mod validate;
pub mod value;
pub use value::Mapping;
