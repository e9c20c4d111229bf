//! Record structs exchanged with host collaborators and the shared cache.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identity of a wiki page: numeric namespace plus title text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub namespace: i32,
    pub title: String,
}

impl PageRef {
    pub fn new(namespace: i32, title: impl Into<String>) -> Self {
        Self {
            namespace,
            title: title.into(),
        }
    }
}

/// The page a rail build is rendered next to.
#[derive(Debug, Clone)]
pub struct CurrentPage {
    pub namespace: i32,
    /// Fully qualified title, namespace prefix included.
    pub prefixed_title: String,
    pub is_main_page: bool,
}

/// Resolved acting identity behind a change row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    pub registered: bool,
    /// Profile page the identity's name links to when registered.
    pub profile: PageRef,
}

/// One qualifying change event, never mutated after fetch.
///
/// The resolved list is what the shared cache stores, so the struct
/// round-trips through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentChangeRecord {
    pub user: UserIdentity,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub page: PageRef,
}
