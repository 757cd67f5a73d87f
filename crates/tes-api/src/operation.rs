use std::{fmt, str::FromStr};

use crate::error::ApiError;

/// The calls of the TES API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateTask,
    GetTask,
    ListTasks,
    CancelTask,
    ServiceInfo,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CreateTask,
        Operation::GetTask,
        Operation::ListTasks,
        Operation::CancelTask,
        Operation::ServiceInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateTask => "create_task",
            Operation::GetTask => "get_task",
            Operation::ListTasks => "list_tasks",
            Operation::CancelTask => "cancel_task",
            Operation::ServiceInfo => "service_info",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ApiError::UnknownOperation(s.to_string()))
    }
}
