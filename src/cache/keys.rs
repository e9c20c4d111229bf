//! Cache key construction.

/// Schema version baked into every recent-changes key. Bump it whenever the
/// cached record shape changes; previously cached windows become unreachable
/// and expire on their own.
pub const RECENT_CHANGES_CACHE_VERSION: u32 = 2;

/// Key under which the recent-changes window is cached.
pub fn recent_changes_key() -> String {
    format!("cosmos-rail:recent-changes:v{RECENT_CHANGES_CACHE_VERSION}")
}
