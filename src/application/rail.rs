//! Rail assembly: gate, fetch, panels, hooks, and final markup.

use tracing::debug;

use crate::application::error::RailError;
use crate::application::hooks::{RailHookRegistry, SkinContext};
use crate::application::host::HostServices;
use crate::application::interface::append_interface_modules;
use crate::application::recent_changes::RecentChangesService;
use crate::application::visibility::rail_hidden;
use crate::config::RailConfig;
use crate::domain::entities::CurrentPage;
use crate::domain::modules::{RailModule, RailModules};
use crate::domain::types::RailModuleType;
use crate::presentation::views::{RailModuleView, RailTemplate, render_template};

/// Key, header label key, and wrapper class of the built-in module.
pub const RECENT_CHANGES_KEY: &str = "recentchanges";
const RECENT_CHANGES_CLASS: &str = "recentchanges-module";

/// Wrapper classes applied to every rail section.
const BASE_CLASSES: [&str; 2] = ["railModule", "module"];
const STICKY_CLASS: &str = "rail-sticky-module";

/// Style bundle the host loads when the rail has modules.
pub const RAIL_STYLE_MODULE: &str = "skins.cosmos.rail";
/// Body class the host attaches when the rail markup is non-empty.
pub const RAIL_BODY_CLASS: &str = "has-right-rail";

const SKIN_NAME: &str = "cosmos";

/// What the host receives from a rail build.
///
/// `html` is the complete fragment, or the empty string when no modules
/// were produced; in that case both side-effect lists are empty as well
/// and the host does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RailOutput {
    pub html: String,
    pub style_modules: Vec<String>,
    pub body_classes: Vec<String>,
}

#[derive(Clone)]
pub struct RailService {
    config: RailConfig,
    recent_changes: RecentChangesService,
    hooks: RailHookRegistry,
}

impl RailService {
    pub fn new(
        config: RailConfig,
        recent_changes: RecentChangesService,
        hooks: RailHookRegistry,
    ) -> Self {
        Self {
            config,
            recent_changes,
            hooks,
        }
    }

    /// Build the ordered module collection for `page`.
    ///
    /// A hidden rail yields an empty collection without touching the store
    /// or running hooks. Otherwise: the recent-changes module when enabled
    /// and the fetched window is non-empty, then the configured interface
    /// panels, then every registered hook in order.
    pub async fn assemble(
        &self,
        page: &CurrentPage,
        norail: bool,
        host: HostServices<'_>,
    ) -> Result<RailModules, RailError> {
        let mut modules = RailModules::new();

        if rail_hidden(&self.config, page, norail) {
            debug!(page = %page.prefixed_title, "rail hidden; skipping assembly");
            return Ok(modules);
        }

        if let Some(module_type) = self.config.modules.recentchanges.display_type() {
            let records = self.recent_changes.fetch().await?;
            if !records.is_empty() {
                let body = self.recent_changes.render(&records, host)?;
                modules.insert(RailModule {
                    key: RECENT_CHANGES_KEY.to_string(),
                    body,
                    header: Some(RECENT_CHANGES_KEY.to_string()),
                    classes: vec![RECENT_CHANGES_CLASS.to_string()],
                    module_type,
                });
            }
        }

        append_interface_modules(&mut modules, &self.config, host.messages);

        let context = SkinContext {
            page,
            skin: SKIN_NAME,
        };
        self.hooks.run(&mut modules, &context);

        debug!(modules = modules.len(), "rail assembled");
        Ok(modules)
    }

    /// Assemble and serialise the rail for `page`.
    ///
    /// Module bodies are inserted verbatim; header labels are resolved
    /// through the host's messages, falling back to the raw key when the
    /// message is missing or disabled.
    pub async fn build(
        &self,
        page: &CurrentPage,
        norail: bool,
        host: HostServices<'_>,
    ) -> Result<RailOutput, RailError> {
        let modules = self.assemble(page, norail, host).await?;
        if modules.is_empty() {
            return Ok(RailOutput::default());
        }

        let views = modules
            .iter()
            .map(|module| RailModuleView {
                header: module
                    .header
                    .as_ref()
                    .map(|key| host.messages.text(key).unwrap_or_else(|| key.clone())),
                class_attr: class_attr(module),
                body: module.body.clone(),
            })
            .collect();

        let html = render_template(RailTemplate { modules: views })?;

        Ok(RailOutput {
            html,
            style_modules: vec![RAIL_STYLE_MODULE.to_string()],
            body_classes: vec![RAIL_BODY_CLASS.to_string()],
        })
    }
}

/// Base classes, the sticky flag, and the module's declared classes,
/// deduplicated in that order.
fn class_attr(module: &RailModule) -> String {
    let mut classes: Vec<&str> = BASE_CLASSES.to_vec();
    if module.module_type == RailModuleType::Sticky {
        classes.push(STICKY_CLASS);
    }
    for class in &module.classes {
        if !classes.contains(&class.as_str()) {
            classes.push(class);
        }
    }
    classes.join(" ")
}
