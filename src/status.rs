//! Row status and label position

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormRowError;

/// Visual validation state of a control group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Error,
    Info,
    Success,
    Warning,
}

impl RowStatus {
    pub const ALL: [RowStatus; 4] = [
        RowStatus::Error,
        RowStatus::Info,
        RowStatus::Success,
        RowStatus::Warning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Error => "error",
            RowStatus::Info => "info",
            RowStatus::Success => "success",
            RowStatus::Warning => "warning",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(RowStatus::as_str).collect()
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowStatus {
    type Err = FormRowError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == lower)
            .ok_or_else(|| FormRowError::InvalidStatus {
                given: s.to_string(),
            })
    }
}

/// Where the label goes relative to the controls block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Label opens before the controls and closes after them
    Prepend,
    /// Label wraps the controls with its text after them
    Append,
    /// Complete label directly followed by the controls
    #[default]
    Default,
}

impl FromStr for LabelPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prepend" => Ok(LabelPosition::Prepend),
            "append" => Ok(LabelPosition::Append),
            "default" | "" => Ok(LabelPosition::Default),
            other => Err(format!("Unknown label position: {}", other)),
        }
    }
}
