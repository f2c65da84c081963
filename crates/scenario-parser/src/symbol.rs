/// Canonical gold futures ticker. Also the fallback for text with no
/// recognized instrument cue at all, so a resolved `GC=F` does not prove the
/// narrative was about gold.
pub const GOLD_TICKER: &str = "GC=F";

/// Japanese currency-pair names, checked in order after the gold cues
const PAIR_TICKERS: &[(&str, &str)] = &[
    ("ドル円", "USDJPY=X"),
    ("ユーロドル", "EURUSD=X"),
    ("ポンドドル", "GBPUSD=X"),
];

/// Map lexical cues in the narrative to an instrument ticker.
/// Never fails and never returns an empty value.
pub(crate) fn resolve_symbol(text: &str) -> String {
    if text.to_uppercase().contains("GOLD") || text.contains("ゴールド") {
        return GOLD_TICKER.to_string();
    }

    for (name, ticker) in PAIR_TICKERS {
        if text.contains(name) {
            return ticker.to_string();
        }
    }

    GOLD_TICKER.to_string()
}
