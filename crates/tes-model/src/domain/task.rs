use serde::{Deserialize, Serialize};

use crate::{
    Entity, Executor, Mapping, Resources, TaskLog, TaskParameter, TaskState,
    validate::{Check, Field, Kind, MAPPING, STRING, STRING_LIST},
};

const PARAMETERS: Check = Check::SequenceOf(Kind::record::<TaskParameter>());
const RESOURCES: Check = Check::Type(Kind::record::<Resources>());
const EXECUTORS: Check = Check::SequenceOf(Kind::record::<Executor>());
const TASK_LOGS: Check = Check::SequenceOf(Kind::record::<TaskLog>());

/// A compute task: the root record of the API.
///
/// Every field is optional; the service assigns `id` and `state`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<String>,
    pub state: Option<TaskState>,
    pub name: Option<String>,
    pub project: Option<String>,
    pub description: Option<String>,
    pub inputs: Option<Vec<TaskParameter>>,
    pub outputs: Option<Vec<TaskParameter>>,
    pub resources: Option<Resources>,
    pub executors: Option<Vec<Executor>>,
    pub volumes: Option<Vec<String>>,
    pub tags: Option<Mapping>,
    pub logs: Option<Vec<TaskLog>>,
}

impl Task {
    /// Returns `true` if the reported state is terminal.
    pub fn is_finished(&self) -> bool {
        self.state.is_some_and(|s| s.is_terminal())
    }
}

impl Entity for Task {
    const NAME: &'static str = "Task";
    const FIELDS: &'static [Field] = &[
        Field::new("id", Check::Optional(&STRING)),
        Field::new("state", Check::Optional(&TaskState::CHECK)),
        Field::new("name", Check::Optional(&STRING)),
        Field::new("project", Check::Optional(&STRING)),
        Field::new("description", Check::Optional(&STRING)),
        Field::new("inputs", Check::Optional(&PARAMETERS)),
        Field::new("outputs", Check::Optional(&PARAMETERS)),
        Field::new("resources", Check::Optional(&RESOURCES)),
        Field::new("executors", Check::Optional(&EXECUTORS)),
        Field::new("volumes", Check::Optional(&STRING_LIST)),
        Field::new("tags", Check::Optional(&MAPPING)),
        Field::new("logs", Check::Optional(&TASK_LOGS)),
    ];
}
