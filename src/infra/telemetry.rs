use std::sync::Once;

use metrics::{Unit, describe_counter};

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Describe the crate's metrics once. Hosts call this at boot; the crate
/// never installs a tracing subscriber or metrics recorder itself.
pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "cosmos_rail_cache_hit_total",
            Unit::Count,
            "Total number of shared-cache hits for the recent-changes window."
        );
        describe_counter!(
            "cosmos_rail_cache_miss_total",
            Unit::Count,
            "Total number of shared-cache misses for the recent-changes window."
        );
        describe_counter!(
            "cosmos_rail_cache_write_fail_total",
            Unit::Count,
            "Total number of non-fatal shared-cache write failures."
        );
    });
}
