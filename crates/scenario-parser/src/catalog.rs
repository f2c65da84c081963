use regex::Regex;
use scenario_core::{LevelKind, Timeframe, ZoneKind};

/// Phrase template recognizing the level list for one polarity and timeframe,
/// e.g. `日足ベースのサポートラインは4317近辺と4218近辺`.
pub(crate) struct LevelTemplate {
    pub kind: LevelKind,
    pub timeframe: Timeframe,
    pattern: Regex,
}

impl LevelTemplate {
    fn new(kind: LevelKind, timeframe: Timeframe) -> Self {
        let pattern = Regex::new(&format!(
            r"{}ベースの{}ラインは([\d\.]+近辺(?:と[\d\.]+近辺)*)",
            timeframe.label(),
            kind.label(),
        ))
        .unwrap();

        Self {
            kind,
            timeframe,
            pattern,
        }
    }

    /// Price-list clause of the first occurrence in `text`, if any.
    /// Later occurrences of the same phrase are intentionally not scanned.
    pub fn first_clause<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Phrase template recognizing a price band,
/// e.g. `4317近辺～4320近辺のサポート帯`.
pub(crate) struct ZoneTemplate {
    pub kind: ZoneKind,
    pattern: Regex,
}

impl ZoneTemplate {
    fn new(kind: ZoneKind) -> Self {
        let pattern = Regex::new(&format!(
            r"([\d\.]+)近辺～([\d\.]+)近辺の{}",
            kind.label()
        ))
        .unwrap();

        Self { kind, pattern }
    }

    /// All non-overlapping occurrences in `text`, as (lower, upper) pairs in
    /// the order the narrative wrote them. A band with an unparseable bound
    /// is dropped, not an error.
    pub fn bounds(&self, text: &str) -> Vec<(f64, f64)> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
                    (Ok(lower), Ok(upper)) => Some((lower, upper)),
                    _ => {
                        tracing::debug!(phrase = &caps[0], "skipping zone with unparseable bound");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Compiled phrase templates for one parser instance.
///
/// Built once and immutable afterwards; every field is `Send + Sync`, so a
/// single catalog can back concurrent parses.
pub(crate) struct PatternCatalog {
    price_token: Regex,
    pub levels: Vec<LevelTemplate>,
    pub zones: Vec<ZoneTemplate>,
    pub analysis_date: Regex,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self {
            price_token: Regex::new(r"\d{4,5}(?:\.\d{1,2})?").unwrap(),
            // Monthly resistance is deliberately absent: the narrative format
            // this catalog recognizes has never carried one. Completing the
            // matrix would change what existing texts parse to.
            levels: vec![
                LevelTemplate::new(LevelKind::Support, Timeframe::Daily),
                LevelTemplate::new(LevelKind::Support, Timeframe::Weekly),
                LevelTemplate::new(LevelKind::Support, Timeframe::Monthly),
                LevelTemplate::new(LevelKind::Resistance, Timeframe::Daily),
                LevelTemplate::new(LevelKind::Resistance, Timeframe::Weekly),
            ],
            zones: vec![
                ZoneTemplate::new(ZoneKind::Support),
                ZoneTemplate::new(ZoneKind::Resistance),
            ],
            analysis_date: Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日\s*(\d{1,2})時(\d{1,2})分")
                .unwrap(),
        }
    }

    /// Price tokens in a captured clause, in reading order. The token rule is
    /// a 4-5 digit integer part with an optional 1-2 digit fraction; it is
    /// only ever applied to a template's clause, never to the whole text.
    /// A token the pattern accepts but `f64` rejects is dropped with a
    /// diagnostic (the pattern matches fullwidth digits, `f64` does not).
    pub fn scan_price_tokens(&self, clause: &str) -> Vec<f64> {
        self.price_token
            .find_iter(clause)
            .filter_map(|m| match m.as_str().parse::<f64>() {
                Ok(price) => Some(price),
                Err(_) => {
                    tracing::debug!(token = m.as_str(), "skipping unparseable price token");
                    None
                }
            })
            .collect()
    }
}
