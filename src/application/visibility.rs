//! Visibility gate: decides whether the rail renders at all.

use crate::config::{MAIN_PAGE_SENTINEL, RailConfig};
use crate::domain::entities::CurrentPage;

/// True when the rail must not render for `page`.
///
/// `norail` is the host's out-of-band per-response suppression flag. The
/// gate runs before any data fetch so a hidden rail never touches the
/// store. No side effects.
pub fn rail_hidden(config: &RailConfig, page: &CurrentPage, norail: bool) -> bool {
    if norail {
        return true;
    }
    if config.disabled_namespaces.contains(&page.namespace) {
        return true;
    }
    if page.is_main_page
        && config
            .disabled_pages
            .iter()
            .any(|entry| entry == MAIN_PAGE_SENTINEL)
    {
        return true;
    }
    config
        .disabled_pages
        .iter()
        .any(|entry| entry == &page.prefixed_title)
}
