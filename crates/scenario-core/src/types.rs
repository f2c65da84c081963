use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ScenarioError;

/// Chart basis granularity for an extracted level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "日足")]
    Daily,
    #[serde(rename = "週足")]
    Weekly,
    #[serde(rename = "月足")]
    Monthly,
}

impl Timeframe {
    /// Japanese chart label, as written in scenario narratives
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Daily => "日足",
            Timeframe::Weekly => "週足",
            Timeframe::Monthly => "月足",
        }
    }
}

/// Whether a level acts as a floor or a ceiling for price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    Support,
    Resistance,
}

impl LevelKind {
    pub fn label(&self) -> &'static str {
        match self {
            LevelKind::Support => "サポート",
            LevelKind::Resistance => "レジスタンス",
        }
    }
}

/// Band counterpart of [`LevelKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    #[serde(rename = "support_zone")]
    Support,
    #[serde(rename = "resistance_zone")]
    Resistance,
}

impl ZoneKind {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneKind::Support => "サポート帯",
            ZoneKind::Resistance => "レジスタンス帯",
        }
    }
}

/// A single price point with polarity and timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    #[serde(rename = "level_type")]
    pub kind: LevelKind,
    pub timeframe: Timeframe,
    pub description: String,
}

impl PriceLevel {
    /// Build a level with the canonical description for its kind and timeframe
    pub fn new(price: f64, kind: LevelKind, timeframe: Timeframe) -> Self {
        Self {
            price,
            kind,
            timeframe,
            description: format!("{}ベースの{}", timeframe.label(), kind.label()),
        }
    }
}

/// A price band with polarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceZone {
    #[serde(rename = "price_lower")]
    pub lower: f64,
    #[serde(rename = "price_upper")]
    pub upper: f64,
    #[serde(rename = "zone_type")]
    pub kind: ZoneKind,
    pub description: String,
}

impl PriceZone {
    /// Bounds stay in the order the narrative gave them; a band written
    /// upper-first is stored upper-first.
    pub fn new(lower: f64, upper: f64, kind: ZoneKind) -> Self {
        Self {
            lower,
            upper,
            kind,
            description: format!("{}～{}の{}", lower, upper, kind.label()),
        }
    }
}

/// A projected price path between two points in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub start_price: f64,
    pub end_price: f64,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub description: String,
}

/// Fully assembled result of one parse pass over a scenario narrative.
///
/// Treated as an immutable value after construction. Note that `symbol`
/// silently falls back to the gold futures ticker when the text carries no
/// recognized instrument cue, so consumers keying market-data lookups off it
/// cannot distinguish "gold" from "nothing matched".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDocument {
    pub raw_text: String,
    pub symbol: String,
    /// Normalized `YYYY-MM-DD HH:MM`, or `""` when no date phrase was found
    pub analysis_date: String,
    pub support_levels: Vec<PriceLevel>,
    pub resistance_levels: Vec<PriceLevel>,
    pub support_zones: Vec<PriceZone>,
    pub resistance_zones: Vec<PriceZone>,
    pub trend_lines: Vec<TrendLine>,
    pub notes: Vec<String>,
}

impl ScenarioDocument {
    /// Analysis timestamp as a typed value, when one was found in the text
    pub fn analysis_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.analysis_date, "%Y-%m-%d %H:%M").ok()
    }

    /// Plain key/value representation for persistence as serialized text
    pub fn to_record(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("scenario document serializes to JSON")
    }

    /// Rebuild a document from its stored record form
    pub fn from_record(record: serde_json::Value) -> Result<Self, ScenarioError> {
        serde_json::from_value(record).map_err(|e| ScenarioError::MalformedRecord(e.to_string()))
    }
}
