use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ConstraintError, validate::Check};

/// How much of a task the service should return.
///
/// Interpreted by the backend; this crate only carries the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskView {
    Minimal,
    Basic,
    Full,
}

impl TaskView {
    pub const ALL: [TaskView; 3] = [TaskView::Minimal, TaskView::Basic, TaskView::Full];
    pub const NAMES: &'static [&'static str] = &["MINIMAL", "BASIC", "FULL"];
    pub(crate) const CHECK: Check = Check::OneOf(Self::NAMES);

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskView::Minimal => "MINIMAL",
            TaskView::Basic => "BASIC",
            TaskView::Full => "FULL",
        }
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskView {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ConstraintError::Value {
                field: "view".to_string(),
                allowed: Self::NAMES.iter().map(|n| n.to_string()).collect(),
                value: s.to_string(),
            })
    }
}
