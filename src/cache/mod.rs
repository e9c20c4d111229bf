//! Shared-cache seam: key construction, storage contract, memoising accessor.

pub mod keys;
mod lock;
pub mod memo;
pub mod store;

pub use keys::recent_changes_key;
pub use memo::get_or_compute;
pub use store::{CacheError, MemoryCache, SharedCache};
