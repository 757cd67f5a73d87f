use serde::{Deserialize, Serialize};

use crate::{
    Entity, FileType,
    validate::{Check, Field, STRING},
};

/// An input or output of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskParameter {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Remote location of the data.
    pub url: String,
    /// Location inside the executor container.
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Inline content, used instead of fetching `url`.
    pub contents: Option<String>,
}

impl TaskParameter {
    pub fn new(url: impl Into<String>, path: impl Into<String>, file_type: FileType) -> Self {
        Self {
            name: None,
            description: None,
            url: url.into(),
            path: path.into(),
            file_type,
            contents: None,
        }
    }
}

impl Entity for TaskParameter {
    const NAME: &'static str = "TaskParameter";
    const FIELDS: &'static [Field] = &[
        Field::new("name", Check::Optional(&STRING)),
        Field::new("description", Check::Optional(&STRING)),
        Field::new("url", STRING),
        Field::new("path", STRING),
        Field::new("type", FileType::CHECK),
        Field::new("contents", Check::Optional(&STRING)),
    ];
}
