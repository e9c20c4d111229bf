//! Capabilities the embedding host supplies per request.
//!
//! Each trait carries one concern; components receive only the traits they
//! use. Message resolution and the viewer's display language travel
//! together in [`Messages`].

use time::OffsetDateTime;

use crate::domain::entities::PageRef;

/// Message resolution in the viewer's display language.
pub trait Messages: Send + Sync {
    /// Fully parsed markup for `key`, or `None` when missing/disabled.
    fn parse(&self, key: &str) -> Option<String>;

    /// Plain text for `key`, or `None` when missing/disabled.
    fn text(&self, key: &str) -> Option<String>;

    /// Human-readable age of `when` in the display language.
    fn relative_time(&self, when: OffsetDateTime) -> String;
}

/// Anchor markup for page targets. The produced markup is inserted into
/// the rail verbatim.
pub trait LinkRenderer: Send + Sync {
    /// Link to a page known to exist.
    fn known_link(&self, page: &PageRef, label: &str) -> String;

    /// Generic link; the target may not exist.
    fn link(&self, page: &PageRef, label: &str) -> String;
}

/// Resolves host "special page" logical names to concrete pages, localised
/// for the wiki's content language.
pub trait SpecialPages: Send + Sync {
    fn page_for(&self, canonical_name: &str, param: &str) -> PageRef;
}

/// Per-request bundle of the rendering capabilities above.
#[derive(Clone, Copy)]
pub struct HostServices<'a> {
    pub messages: &'a dyn Messages,
    pub links: &'a dyn LinkRenderer,
    pub special_pages: &'a dyn SpecialPages,
}
