//! Store traits describing the read-replica and identity adapters.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use crate::domain::entities::UserIdentity;
use crate::domain::types::ChangeKind;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Actor reference as recorded in the change log.
pub type ActorId = i64;

/// Predicate applied to the change log.
///
/// The filter is part of the call contract so fake stores enforce the same
/// exclusions the SQL does: only the listed kinds qualify, and bot-flagged
/// or deletion-suppressed rows are excluded unless opted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeQueryFilter {
    pub kinds: Vec<ChangeKind>,
    pub include_bots: bool,
    pub include_suppressed: bool,
}

impl Default for ChangeQueryFilter {
    fn default() -> Self {
        Self {
            kinds: vec![ChangeKind::New, ChangeKind::Edit],
            include_bots: false,
            include_suppressed: false,
        }
    }
}

/// One raw change-log row before actor resolution.
#[derive(Debug, Clone)]
pub struct ChangeRow {
    pub actor: ActorId,
    pub namespace: i32,
    pub title: String,
    pub timestamp: OffsetDateTime,
}

#[async_trait]
pub trait ChangesRepo: Send + Sync {
    /// Newest-first qualifying rows, at most `limit`.
    async fn recent_changes(
        &self,
        filter: &ChangeQueryFilter,
        limit: u32,
    ) -> Result<Vec<ChangeRow>, RepoError>;
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve_actor(&self, actor: ActorId) -> Result<UserIdentity, RepoError>;
}
