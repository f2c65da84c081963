use crate::catalog::PatternCatalog;

/// Normalize the analysis timestamp phrase to `YYYY-MM-DD HH:MM`.
///
/// Exactly one calendar phrase shape is recognized, e.g.
/// `2025年10月21日 8時00分`; month, day, hour and minute may be one or two
/// digits and are zero-padded on output. Returns the empty string when no
/// phrase is present — callers treat that as "not determined", never as an
/// error or a literal date.
pub(crate) fn resolve_analysis_date(catalog: &PatternCatalog, text: &str) -> String {
    match catalog.analysis_date.captures(text) {
        Some(caps) => format!(
            "{}-{:0>2}-{:0>2} {:0>2}:{:0>2}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
        ),
        None => String::new(),
    }
}
