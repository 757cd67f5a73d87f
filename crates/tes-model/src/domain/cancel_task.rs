use serde::{Deserialize, Serialize};

use crate::{
    Entity,
    validate::{Field, STRING},
};

/// Request to cancel a task by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelTaskRequest {
    pub id: String,
}

impl CancelTaskRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Entity for CancelTaskRequest {
    const NAME: &'static str = "CancelTaskRequest";
    const FIELDS: &'static [Field] = &[Field::new("id", STRING)];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelTaskResponse {}

impl Entity for CancelTaskResponse {
    const NAME: &'static str = "CancelTaskResponse";
    const FIELDS: &'static [Field] = &[];
}
