use scenario_core::{LevelKind, PriceLevel};

use crate::catalog::PatternCatalog;

/// Extract every level of the given polarity, walking the catalog templates
/// in timeframe order (daily, weekly, then monthly where a template exists).
///
/// Each template is searched once, first occurrence only; its captured clause
/// is the only text the price scanner sees, so prices mentioned elsewhere in
/// the narrative (inside a zone phrase, in commentary) never leak in.
pub(crate) fn extract_levels(
    catalog: &PatternCatalog,
    text: &str,
    kind: LevelKind,
) -> Vec<PriceLevel> {
    let mut levels = Vec::new();

    for template in catalog.levels.iter().filter(|t| t.kind == kind) {
        if let Some(clause) = template.first_clause(text) {
            for price in catalog.scan_price_tokens(clause) {
                levels.push(PriceLevel::new(price, kind, template.timeframe));
            }
        }
    }

    levels
}
