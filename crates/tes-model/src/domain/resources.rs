use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::{
    Entity,
    validate::{BOOL, Check, Field, INT, NUMBER, STRING_LIST},
};

/// Compute resources requested for a task. No range checks are applied.
///
/// Sizes are kept as JSON numbers so an integer given by the caller is
/// written back as an integer; `Number` cannot hold NaN or infinities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub cpu_cores: Option<i64>,
    pub ram_gb: Option<Number>,
    pub size_gb: Option<Number>,
    pub preemptible: Option<bool>,
    pub zones: Option<Vec<String>>,
}

impl Resources {
    pub fn ram_gb_f64(&self) -> Option<f64> {
        self.ram_gb.as_ref().and_then(Number::as_f64)
    }

    pub fn size_gb_f64(&self) -> Option<f64> {
        self.size_gb.as_ref().and_then(Number::as_f64)
    }
}

impl Entity for Resources {
    const NAME: &'static str = "Resources";
    const FIELDS: &'static [Field] = &[
        Field::new("cpu_cores", Check::Optional(&INT)),
        Field::new("ram_gb", Check::Optional(&NUMBER)),
        Field::new("size_gb", Check::Optional(&NUMBER)),
        Field::new("preemptible", Check::Optional(&BOOL)),
        Field::new("zones", Check::Optional(&STRING_LIST)),
    ];
}
