use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ConstraintError, validate::Check};

/// State label of a task, as reported by the backend running it.
///
/// No transition graph is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// Wire name is `UKNOWN`, kept as deployed services spell it.
    #[serde(rename = "UKNOWN")]
    Unknown,
    Queued,
    Initializing,
    Running,
    Complete,
    Paused,
    Canceled,
    Error,
    SystemError,
}

impl TaskState {
    pub const ALL: [TaskState; 9] = [
        TaskState::Unknown,
        TaskState::Queued,
        TaskState::Initializing,
        TaskState::Running,
        TaskState::Complete,
        TaskState::Paused,
        TaskState::Canceled,
        TaskState::Error,
        TaskState::SystemError,
    ];
    pub const NAMES: &'static [&'static str] = &[
        "UKNOWN",
        "QUEUED",
        "INITIALIZING",
        "RUNNING",
        "COMPLETE",
        "PAUSED",
        "CANCELED",
        "ERROR",
        "SYSTEM_ERROR",
    ];
    pub(crate) const CHECK: Check = Check::OneOf(Self::NAMES);

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Unknown => "UKNOWN",
            TaskState::Queued => "QUEUED",
            TaskState::Initializing => "INITIALIZING",
            TaskState::Running => "RUNNING",
            TaskState::Complete => "COMPLETE",
            TaskState::Paused => "PAUSED",
            TaskState::Canceled => "CANCELED",
            TaskState::Error => "ERROR",
            TaskState::SystemError => "SYSTEM_ERROR",
        }
    }

    /// Returns `true` if the task will not run again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Complete | TaskState::Canceled | TaskState::Error | TaskState::SystemError
        )
    }

    /// Returns `true` if the task has been accepted and not yet finished.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TaskState::Queued | TaskState::Initializing | TaskState::Running | TaskState::Paused
        )
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskState {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ConstraintError::Value {
                field: "state".to_string(),
                allowed: Self::NAMES.iter().map(|n| n.to_string()).collect(),
                value: s.to_string(),
            })
    }
}
