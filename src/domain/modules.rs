//! The rail module collection built up during assembly.

use crate::domain::types::RailModuleType;

/// One panel in the rail.
#[derive(Debug, Clone, PartialEq)]
pub struct RailModule {
    /// Unique key within the collection; also the ordering handle hooks
    /// address modules by.
    pub key: String,
    /// Pre-rendered content fragment, inserted verbatim.
    pub body: String,
    /// Translatable label key; `None` renders no header.
    pub header: Option<String>,
    /// Extra wrapper classes merged with the base classes.
    pub classes: Vec<String>,
    pub module_type: RailModuleType,
}

/// Ordered, key-unique collection of rail modules.
///
/// Mapping semantics: `insert` replaces in place when the key already
/// exists (position preserved) and appends otherwise; iteration yields
/// insertion order, which is display order. Backed by a `Vec` since the
/// collection stays small.
#[derive(Debug, Clone, Default)]
pub struct RailModules {
    entries: Vec<RailModule>,
}

impl RailModules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, module: RailModule) {
        match self.entries.iter_mut().find(|entry| entry.key == module.key) {
            Some(existing) => *existing = module,
            None => self.entries.push(module),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<RailModule> {
        let index = self.entries.iter().position(|entry| entry.key == key)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, key: &str) -> Option<&RailModule> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RailModule> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }
}

impl<'a> IntoIterator for &'a RailModules {
    type Item = &'a RailModule;
    type IntoIter = std::slice::Iter<'a, RailModule>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
