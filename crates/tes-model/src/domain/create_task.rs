use serde::{Deserialize, Serialize};

use crate::{
    Entity,
    validate::{Field, STRING},
};

/// Id assigned to a newly created task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub id: String,
}

impl CreateTaskResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Entity for CreateTaskResponse {
    const NAME: &'static str = "CreateTaskResponse";
    const FIELDS: &'static [Field] = &[Field::new("id", STRING)];
}
