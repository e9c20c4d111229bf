//! Recent-changes window: cached fetch and list rendering.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tracing::debug;

use crate::application::error::RailError;
use crate::application::host::HostServices;
use crate::application::repos::{ChangeQueryFilter, ChangesRepo, IdentityResolver, RepoError};
use crate::cache::{self, SharedCache};
use crate::domain::entities::{PageRef, RecentChangeRecord};
use crate::presentation::views::{RecentChangeItemView, RecentChangesTemplate, render_template};

/// Window size for the rail's recent-changes list.
pub const RECENT_CHANGES_LIMIT: u32 = 4;

/// How long a fetched window (including an empty one) stays cached.
pub const RECENT_CHANGES_TTL: Duration = Duration::from_secs(30);

/// Canonical special page listing an identity's edits; the link target for
/// unregistered identities.
const CONTRIBUTIONS_PAGE: &str = "Contributions";

#[derive(Clone)]
pub struct RecentChangesService {
    changes: Arc<dyn ChangesRepo>,
    identities: Arc<dyn IdentityResolver>,
    cache: Arc<dyn SharedCache>,
}

impl RecentChangesService {
    pub fn new(
        changes: Arc<dyn ChangesRepo>,
        identities: Arc<dyn IdentityResolver>,
        cache: Arc<dyn SharedCache>,
    ) -> Self {
        Self {
            changes,
            identities,
            cache,
        }
    }

    /// Up to [`RECENT_CHANGES_LIMIT`] qualifying records, newest first.
    ///
    /// Served from the shared cache when a window is already cached. An
    /// empty window is cached too, so a quiet wiki does not re-query the
    /// replica on every request. A replica read failure is fatal for the
    /// request; there is no local fallback.
    pub async fn fetch(&self) -> Result<Vec<RecentChangeRecord>, RailError> {
        let key = cache::recent_changes_key();
        cache::get_or_compute(self.cache.as_ref(), &key, RECENT_CHANGES_TTL, || {
            self.load_from_store()
        })
        .await
    }

    async fn load_from_store(&self) -> Result<Vec<RecentChangeRecord>, RailError> {
        let filter = ChangeQueryFilter::default();
        let rows = self
            .changes
            .recent_changes(&filter, RECENT_CHANGES_LIMIT)
            .await?;
        debug!(rows = rows.len(), "loaded recent changes from replica");

        let records = try_join_all(rows.into_iter().map(|row| {
            let identities = Arc::clone(&self.identities);
            async move {
                let user = identities.resolve_actor(row.actor).await?;
                Ok::<_, RepoError>(RecentChangeRecord {
                    user,
                    timestamp: row.timestamp,
                    page: PageRef::new(row.namespace, row.title),
                })
            }
        }))
        .await?;

        Ok(records)
    }

    /// Render the record list into the module body.
    ///
    /// Only called with a non-empty list: an empty fetch means the module
    /// is never assembled at all.
    pub fn render(
        &self,
        records: &[RecentChangeRecord],
        host: HostServices<'_>,
    ) -> Result<String, RailError> {
        let items = records
            .iter()
            .map(|record| {
                let page_link = host.links.known_link(&record.page, &record.page.title);
                let user_link = if record.user.registered {
                    // The profile page may not exist yet; generic link form.
                    host.links.link(&record.user.profile, &record.user.name)
                } else {
                    let target = host
                        .special_pages
                        .page_for(CONTRIBUTIONS_PAGE, &record.user.name);
                    host.links.known_link(&target, &record.user.name)
                };
                RecentChangeItemView {
                    page_link,
                    user_link,
                    relative_time: host.messages.relative_time(record.timestamp),
                }
            })
            .collect();

        Ok(render_template(RecentChangesTemplate { items })?)
    }
}
