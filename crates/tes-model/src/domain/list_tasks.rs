use serde::{Deserialize, Serialize};

use crate::{
    Entity, Task, TaskView,
    validate::{Check, Field, INT, Kind, STRING},
};

const TASKS: Check = Check::SequenceOf(Kind::record::<Task>());

/// Paged listing of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTasksRequest {
    pub project: Option<String>,
    pub name_prefix: Option<String>,
    pub page_size: Option<i64>,
    pub page_token: Option<String>,
    pub view: Option<TaskView>,
}

impl Entity for ListTasksRequest {
    const NAME: &'static str = "ListTasksRequest";
    const FIELDS: &'static [Field] = &[
        Field::new("project", Check::Optional(&STRING)),
        Field::new("name_prefix", Check::Optional(&STRING)),
        Field::new("page_size", Check::Optional(&INT)),
        Field::new("page_token", Check::Optional(&STRING)),
        Field::new("view", Check::Optional(&TaskView::CHECK)),
    ];
}

/// One page of tasks. `tasks` is required but may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
    pub next_page_token: Option<String>,
}

impl ListTasksResponse {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            next_page_token: None,
        }
    }
}

impl Entity for ListTasksResponse {
    const NAME: &'static str = "ListTasksResponse";
    const FIELDS: &'static [Field] = &[
        Field::new("tasks", TASKS),
        Field::new("next_page_token", Check::Optional(&STRING)),
    ];
}
