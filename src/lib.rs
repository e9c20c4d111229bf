//! Rail assembly for the Cosmos wiki skin.
//!
//! A host embeds this crate to build the sidebar ("rail") next to page
//! content: a cached recent-changes panel, configuration-driven interface
//! panels, and an ordered hook chain through which extensions adjust the
//! module collection before the final markup is serialised.
//!
//! The host supplies page context, configuration, message resolution, link
//! rendering, and the backing stores; the crate returns a [`RailOutput`]
//! fragment for the host to place.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

pub use application::error::RailError;
pub use application::rail::{RailOutput, RailService};
