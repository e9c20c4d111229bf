//! Application services orchestrating the rail build.

pub mod error;
pub mod hooks;
pub mod host;
pub mod interface;
pub mod rail;
pub mod recent_changes;
pub mod repos;
pub mod visibility;
