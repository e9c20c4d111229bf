//! Extension point over the in-progress module collection.

use std::sync::Arc;

use crate::domain::entities::CurrentPage;
use crate::domain::modules::RailModules;

/// Read-only context handed to rail hooks alongside the collection.
pub struct SkinContext<'a> {
    pub page: &'a CurrentPage,
    /// Name of the active skin, e.g. `"cosmos"`.
    pub skin: &'a str,
}

/// One registered external collaborator.
///
/// Handlers run synchronously, one at a time, in registration order, and
/// observe each other's mutations. They may insert, remove, or reorder
/// (remove and re-insert) entries under keys of their choosing. Failure
/// policy belongs to the host's dispatch mechanism; handlers are
/// infallible at this seam.
pub trait RailModulesHook: Send + Sync {
    fn on_rail_modules(&self, modules: &mut RailModules, context: &SkinContext<'_>);
}

/// Ordered registry of rail hooks.
#[derive(Clone, Default)]
pub struct RailHookRegistry {
    hooks: Vec<Arc<dyn RailModulesHook>>,
}

impl RailHookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn RailModulesHook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Give every handler its exclusive synchronous turn.
    pub fn run(&self, modules: &mut RailModules, context: &SkinContext<'_>) {
        for hook in &self.hooks {
            hook.on_rail_modules(modules, context);
        }
    }
}
