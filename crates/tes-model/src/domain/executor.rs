use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    Entity, Ports,
    validate::{Check, Field, Kind, STRING, STRING_LIST, STRING_MAP},
};

pub(crate) const PORTS_LIST: Check = Check::SequenceOf(Kind::record::<Ports>());

/// One container command run as part of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Executor {
    pub image_name: String,
    /// Command line; its length is not checked.
    pub cmd: Vec<String>,
    pub work_dir: Option<String>,
    pub stdin: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub ports: Option<Vec<Ports>>,
    pub environ: Option<BTreeMap<String, String>>,
}

impl Executor {
    pub fn new<I, S>(image_name: impl Into<String>, cmd: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            image_name: image_name.into(),
            cmd: cmd.into_iter().map(Into::into).collect(),
            work_dir: None,
            stdin: None,
            stdout: None,
            stderr: None,
            ports: None,
            environ: None,
        }
    }

    /// Look up an environment variable of the executor.
    pub fn env(&self, key: &str) -> Option<&str> {
        self.environ.as_ref()?.get(key).map(String::as_str)
    }
}

impl Entity for Executor {
    const NAME: &'static str = "Executor";
    const FIELDS: &'static [Field] = &[
        Field::new("image_name", STRING),
        Field::new("cmd", STRING_LIST),
        Field::new("work_dir", Check::Optional(&STRING)),
        Field::new("stdin", Check::Optional(&STRING)),
        Field::new("stdout", Check::Optional(&STRING)),
        Field::new("stderr", Check::Optional(&STRING)),
        Field::new("ports", Check::Optional(&PORTS_LIST)),
        Field::new("environ", Check::Optional(&STRING_MAP)),
    ];
}
