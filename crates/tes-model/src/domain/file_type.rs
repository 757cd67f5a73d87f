use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ConstraintError, validate::Check};

/// Whether a task parameter names a single file or a directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    File,
    Directory,
}

impl FileType {
    pub const ALL: [FileType; 2] = [FileType::File, FileType::Directory];
    pub const NAMES: &'static [&'static str] = &["FILE", "DIRECTORY"];
    pub(crate) const CHECK: Check = Check::OneOf(Self::NAMES);

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::File => "FILE",
            FileType::Directory => "DIRECTORY",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConstraintError::Value {
                field: "type".to_string(),
                allowed: Self::NAMES.iter().map(|n| n.to_string()).collect(),
                value: s.to_string(),
            })
    }
}
