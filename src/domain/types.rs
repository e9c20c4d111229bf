//! Shared domain enumerations.

use serde::{Deserialize, Serialize};

/// Presentation behaviour of a rail module.
///
/// `Sticky` pins the module in the viewport during scroll via a dedicated
/// wrapper class; host-defined types pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RailModuleType {
    Normal,
    Sticky,
    Custom(String),
}

impl RailModuleType {
    pub fn as_str(&self) -> &str {
        match self {
            RailModuleType::Normal => "normal",
            RailModuleType::Sticky => "sticky",
            RailModuleType::Custom(name) => name,
        }
    }

    pub fn from_config_value(value: &str) -> Self {
        match value {
            "normal" => RailModuleType::Normal,
            "sticky" => RailModuleType::Sticky,
            other => RailModuleType::Custom(other.to_string()),
        }
    }
}

/// Change-log event kinds the rail window includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    New,
    Edit,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::New => "new",
            ChangeKind::Edit => "edit",
        }
    }
}
