use scenario_core::{PriceZone, ZoneKind};

use crate::catalog::PatternCatalog;

/// Extract every price band of the given polarity. Unlike levels, zones are
/// collected from all non-overlapping matches across the whole text.
pub(crate) fn extract_zones(catalog: &PatternCatalog, text: &str, kind: ZoneKind) -> Vec<PriceZone> {
    let mut zones = Vec::new();

    for template in catalog.zones.iter().filter(|t| t.kind == kind) {
        for (lower, upper) in template.bounds(text) {
            zones.push(PriceZone::new(lower, upper, kind));
        }
    }

    zones
}
