//! Domain model: rail modules, change records, shared enumerations.

pub mod entities;
pub mod modules;
pub mod types;
