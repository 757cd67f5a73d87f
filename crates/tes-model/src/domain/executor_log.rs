use serde::{Deserialize, Serialize};

use crate::{
    Entity, Ports,
    domain::executor::PORTS_LIST,
    validate::{Check, Field, INT, STRING},
};

/// Runtime record of one executor run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorLog {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: Option<i64>,
    pub host_ip: Option<String>,
    pub ports: Option<Vec<Ports>>,
}

impl Entity for ExecutorLog {
    const NAME: &'static str = "ExecutorLog";
    const FIELDS: &'static [Field] = &[
        Field::new("start_time", Check::Optional(&STRING)),
        Field::new("end_time", Check::Optional(&STRING)),
        Field::new("stdout", Check::Optional(&STRING)),
        Field::new("stderr", Check::Optional(&STRING)),
        Field::new("exit_code", Check::Optional(&INT)),
        Field::new("host_ip", Check::Optional(&STRING)),
        Field::new("ports", Check::Optional(&PORTS_LIST)),
    ];
}
