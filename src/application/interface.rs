//! Interface panels declared in configuration.

use crate::application::host::Messages;
use crate::config::RailConfig;
use crate::domain::modules::{RailModule, RailModules};

const INTERFACE_MODULE_CLASS: &str = "interface-module";
const INTERFACE_KEY_PREFIX: &str = "interface-";

/// Append one module per configured interface panel, in declared order.
///
/// Panels whose setting is disabled or whose message resolves to nothing
/// are skipped silently.
pub fn append_interface_modules(
    modules: &mut RailModules,
    config: &RailConfig,
    messages: &dyn Messages,
) {
    for panel in &config.interface {
        let Some(module_type) = panel.setting.display_type() else {
            continue;
        };
        let Some(body) = messages.parse(&panel.key) else {
            continue;
        };
        modules.insert(RailModule {
            key: format!("{INTERFACE_KEY_PREFIX}{}", panel.key),
            body,
            header: None,
            classes: vec![INTERFACE_MODULE_CLASS.to_string()],
            module_type,
        });
    }
}
