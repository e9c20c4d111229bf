//! Postgres read-replica adapter.
//!
//! Implements [`ChangesRepo`] and [`IdentityResolver`] over the host's
//! replica pool. Strictly read-only: no transactions, no writes.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::QueryBuilder;
use sqlx::postgres::{PgPool, PgPoolOptions};
use time::OffsetDateTime;

use crate::application::repos::{
    ActorId, ChangeQueryFilter, ChangeRow, ChangesRepo, IdentityResolver, RepoError,
};
use crate::domain::entities::{PageRef, UserIdentity};

/// Namespace of user profile pages.
const USER_NAMESPACE: i32 = 2;

pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::Database(db)
            if db
                .message()
                .contains("canceling statement due to user request") =>
        {
            RepoError::Timeout
        }
        other => RepoError::from_persistence(other),
    }
}

#[derive(Clone)]
pub struct ReplicaStore {
    pool: Arc<PgPool>,
}

impl ReplicaStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
    }

    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(self.pool()).await.map(|_| ())
    }
}

#[derive(sqlx::FromRow)]
struct RecentChangeRow {
    actor_id: i64,
    namespace: i32,
    title: String,
    changed_at: OffsetDateTime,
}

impl From<RecentChangeRow> for ChangeRow {
    fn from(row: RecentChangeRow) -> Self {
        Self {
            actor: row.actor_id,
            namespace: row.namespace,
            title: row.title,
            timestamp: row.changed_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ActorRow {
    name: String,
    user_id: Option<i64>,
}

impl From<ActorRow> for UserIdentity {
    fn from(row: ActorRow) -> Self {
        let profile = PageRef::new(USER_NAMESPACE, row.name.clone());
        Self {
            name: row.name,
            registered: row.user_id.is_some(),
            profile,
        }
    }
}

#[async_trait]
impl ChangesRepo for ReplicaStore {
    async fn recent_changes(
        &self,
        filter: &ChangeQueryFilter,
        limit: u32,
    ) -> Result<Vec<ChangeRow>, RepoError> {
        let mut qb = QueryBuilder::new(
            "SELECT rc.actor_id, rc.namespace, rc.title, rc.changed_at \
             FROM recent_changes rc \
             WHERE 1=1 ",
        );

        if !filter.kinds.is_empty() {
            qb.push(" AND rc.kind IN (");
            let mut kinds = qb.separated(", ");
            for kind in &filter.kinds {
                kinds.push_bind(kind.as_str());
            }
            qb.push(") ");
        }

        if !filter.include_bots {
            qb.push(" AND rc.bot = FALSE ");
        }

        if !filter.include_suppressed {
            qb.push(" AND rc.suppressed = FALSE ");
        }

        qb.push(" ORDER BY rc.changed_at DESC LIMIT ");
        qb.push_bind(i64::from(limit));

        let rows = qb
            .build_query_as::<RecentChangeRow>()
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ChangeRow::from).collect())
    }
}

#[async_trait]
impl IdentityResolver for ReplicaStore {
    async fn resolve_actor(&self, actor: ActorId) -> Result<UserIdentity, RepoError> {
        let mut qb = QueryBuilder::new("SELECT a.name, a.user_id FROM actors a WHERE a.actor_id = ");
        qb.push_bind(actor);

        let row = qb
            .build_query_as::<ActorRow>()
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(UserIdentity::from(row))
    }
}
