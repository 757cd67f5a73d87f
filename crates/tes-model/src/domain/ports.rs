use serde::{Deserialize, Serialize};

use crate::{
    Entity,
    validate::{Field, INT},
};

/// Host-to-container port mapping. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ports {
    pub host: i64,
    pub container: i64,
}

impl Ports {
    pub fn new(host: i64, container: i64) -> Self {
        Self { host, container }
    }
}

impl Entity for Ports {
    const NAME: &'static str = "Ports";
    const FIELDS: &'static [Field] = &[Field::new("host", INT), Field::new("container", INT)];
}
