use serde::{Deserialize, Serialize};

use crate::{
    Entity, TaskView,
    validate::{Check, Field, STRING},
};

/// Request for a single task by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTaskRequest {
    pub id: String,
    pub view: Option<TaskView>,
}

impl GetTaskRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view: None,
        }
    }

    pub fn with_view(mut self, view: TaskView) -> Self {
        self.view = Some(view);
        self
    }
}

impl Entity for GetTaskRequest {
    const NAME: &'static str = "GetTaskRequest";
    const FIELDS: &'static [Field] = &[
        Field::new("id", STRING),
        Field::new("view", Check::Optional(&TaskView::CHECK)),
    ];
}
