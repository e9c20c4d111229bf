//! Rail configuration as hydrated by the host's settings layer.
//!
//! The crate never loads files or environment itself; hosts deserialise
//! `RailConfig` from their own configuration source and hand it over.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::domain::types::RailModuleType;

/// Sentinel in `disabled_pages` standing for the wiki's designated main page.
pub const MAIN_PAGE_SENTINEL: &str = "mainpage";

/// Per-module setting: a display type, or `false` to disable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ModuleSetting {
    Toggle(bool),
    Type(String),
}

impl ModuleSetting {
    /// Display type the setting enables, or `None` when it disables the
    /// module. A bare `true` means enabled with the default behaviour.
    pub fn display_type(&self) -> Option<RailModuleType> {
        match self {
            ModuleSetting::Toggle(false) => None,
            ModuleSetting::Toggle(true) => Some(RailModuleType::Normal),
            ModuleSetting::Type(value) if value.is_empty() => None,
            ModuleSetting::Type(value) => Some(RailModuleType::from_config_value(value)),
        }
    }
}

impl Default for ModuleSetting {
    fn default() -> Self {
        ModuleSetting::Type("normal".to_string())
    }
}

/// Enablement and display type for the built-in modules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    pub recentchanges: ModuleSetting,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            recentchanges: ModuleSetting::default(),
        }
    }
}

/// One configured interface panel; array order in config is display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterfacePanelConfig {
    /// Message key whose parsed content becomes the panel body.
    pub key: String,
    #[serde(rename = "type", default)]
    pub setting: ModuleSetting,
}

/// Everything the host configures about the rail.
///
/// Defaults match a fresh wiki: rail enabled everywhere, recent changes on
/// with normal display, no interface panels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RailConfig {
    /// Namespaces where the rail never renders.
    pub disabled_namespaces: BTreeSet<i32>,
    /// Fully qualified titles the rail is disabled on, plus the
    /// [`MAIN_PAGE_SENTINEL`].
    pub disabled_pages: Vec<String>,
    pub modules: ModulesConfig,
    pub interface: Vec<InterfacePanelConfig>,
}
