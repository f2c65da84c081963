//! Scenario narrative extraction engine.
//!
//! Turns free-form Japanese trading narratives ("日足ベースのサポートラインは
//! 4317近辺と4218近辺…") into a structured [`ScenarioDocument`]: price levels
//! tagged by timeframe and polarity, price zones, an inferred instrument
//! symbol, an analysis timestamp, and alert notes. Recognition is strictly
//! template-based; text outside the known phrase shapes is ignored rather
//! than guessed at.

mod catalog;
mod date;
mod levels;
mod notes;
mod symbol;
mod zones;


pub use scenario_core::{
    LevelKind, NarrativeParser, PriceLevel, PriceZone, ScenarioDocument, Timeframe, TrendLine,
    ZoneKind,
};
pub use symbol::GOLD_TICKER;

use catalog::PatternCatalog;

/// Parses analysis narratives into structured scenario documents.
///
/// The phrase templates are compiled once in [`ScenarioParser::new`]; the
/// parser holds no other state, so one instance can serve concurrent `parse`
/// calls on different inputs without coordination.
pub struct ScenarioParser {
    catalog: PatternCatalog,
}

impl ScenarioParser {
    pub fn new() -> Self {
        Self {
            catalog: PatternCatalog::new(),
        }
    }

    /// Parse one narrative into a document.
    ///
    /// Total for every input: text that matches no template yields a document
    /// with empty lists, an empty analysis date, and the default symbol.
    pub fn parse(&self, text: &str) -> ScenarioDocument {
        ScenarioDocument {
            raw_text: text.to_string(),
            symbol: symbol::resolve_symbol(text),
            analysis_date: date::resolve_analysis_date(&self.catalog, text),
            support_levels: levels::extract_levels(&self.catalog, text, LevelKind::Support),
            resistance_levels: levels::extract_levels(&self.catalog, text, LevelKind::Resistance),
            support_zones: zones::extract_zones(&self.catalog, text, ZoneKind::Support),
            resistance_zones: zones::extract_zones(&self.catalog, text, ZoneKind::Resistance),
            // No narrative phrase produces trend lines; the list rides along
            // so stored scenarios keep their hand-attached entries.
            trend_lines: Vec::new(),
            notes: notes::detect_notes(text),
        }
    }
}

impl NarrativeParser for ScenarioParser {
    fn parse(&self, text: &str) -> ScenarioDocument {
        ScenarioParser::parse(self, text)
    }
}

impl Default for ScenarioParser {
    fn default() -> Self {
        Self::new()
    }
}
