use serde::{Deserialize, Serialize};

use crate::{
    Entity, ExecutorLog, Mapping, OutputFileLog,
    validate::{Check, Field, Kind, MAPPING, STRING},
};

const EXECUTOR_LOGS: Check = Check::SequenceOf(Kind::record::<ExecutorLog>());
const OUTPUT_LOGS: Check = Check::SequenceOf(Kind::record::<OutputFileLog>());

/// Aggregate log of one task attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskLog {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub metadata: Option<Mapping>,
    pub logs: Option<Vec<ExecutorLog>>,
    pub outputs: Option<Vec<OutputFileLog>>,
}

impl Entity for TaskLog {
    const NAME: &'static str = "TaskLog";
    const FIELDS: &'static [Field] = &[
        Field::new("start_time", Check::Optional(&STRING)),
        Field::new("end_time", Check::Optional(&STRING)),
        Field::new("metadata", Check::Optional(&MAPPING)),
        Field::new("logs", Check::Optional(&EXECUTOR_LOGS)),
        Field::new("outputs", Check::Optional(&OUTPUT_LOGS)),
    ];
}
