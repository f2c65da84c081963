#[cfg(test)]
mod document_tests {
    use crate::{
        LevelKind, PriceLevel, PriceZone, ScenarioDocument, Timeframe, TrendLine, ZoneKind,
    };
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;

    fn sample_document() -> ScenarioDocument {
        ScenarioDocument {
            raw_text: "日足ベースのサポートラインは4317近辺".to_string(),
            symbol: "GC=F".to_string(),
            analysis_date: "2025-10-21 08:00".to_string(),
            support_levels: vec![
                PriceLevel::new(4317.0, LevelKind::Support, Timeframe::Daily),
                PriceLevel::new(4209.0, LevelKind::Support, Timeframe::Weekly),
            ],
            resistance_levels: vec![PriceLevel::new(
                4443.0,
                LevelKind::Resistance,
                Timeframe::Daily,
            )],
            support_zones: vec![PriceZone::new(4317.0, 4320.0, ZoneKind::Support)],
            resistance_zones: vec![PriceZone::new(4500.0, 4540.0, ZoneKind::Resistance)],
            trend_lines: vec![TrendLine {
                start_price: 4300.0,
                end_price: 4400.0,
                start_time: "2025-10-01".to_string(),
                end_time: "2025-10-21".to_string(),
                description: "上昇チャネル下限".to_string(),
            }],
            notes: vec!["急落に注意が必要".to_string()],
        }
    }

    #[test]
    fn test_level_description_derived_from_kind_and_timeframe() {
        let level = PriceLevel::new(4317.0, LevelKind::Support, Timeframe::Daily);
        assert_eq!(level.description, "日足ベースのサポート");

        let level = PriceLevel::new(4734.0, LevelKind::Resistance, Timeframe::Weekly);
        assert_eq!(level.description, "週足ベースのレジスタンス");

        let level = PriceLevel::new(3989.0, LevelKind::Support, Timeframe::Monthly);
        assert_eq!(level.description, "月足ベースのサポート");
    }

    #[test]
    fn test_zone_keeps_bounds_as_given() {
        // A band written upper-first must not be reordered
        let zone = PriceZone::new(4500.0, 4300.0, ZoneKind::Resistance);

        assert_eq!(zone.lower, 4500.0);
        assert_eq!(zone.upper, 4300.0);
        assert_eq!(zone.description, "4500～4300のレジスタンス帯");
    }

    #[test]
    fn test_record_uses_storage_field_names() {
        let record = sample_document().to_record();

        assert_eq!(record["symbol"], "GC=F");
        assert_eq!(record["analysis_date"], "2025-10-21 08:00");
        assert_eq!(record["support_levels"][0]["price"], 4317.0);
        assert_eq!(record["support_levels"][0]["level_type"], "support");
        assert_eq!(record["support_levels"][0]["timeframe"], "日足");
        assert_eq!(record["resistance_levels"][0]["level_type"], "resistance");
        assert_eq!(record["support_zones"][0]["price_lower"], 4317.0);
        assert_eq!(record["support_zones"][0]["price_upper"], 4320.0);
        assert_eq!(record["support_zones"][0]["zone_type"], "support_zone");
        assert_eq!(record["resistance_zones"][0]["zone_type"], "resistance_zone");
        assert_eq!(record["trend_lines"][0]["start_price"], 4300.0);
        assert_eq!(record["notes"][0], "急落に注意が必要");
    }

    #[test]
    fn test_record_round_trip_is_lossless() {
        let document = sample_document();
        let rebuilt = ScenarioDocument::from_record(document.to_record()).unwrap();

        assert_eq!(rebuilt, document);
    }

    #[test]
    fn test_from_record_rejects_malformed_input() {
        assert!(ScenarioDocument::from_record(json!("not a document")).is_err());
        assert!(ScenarioDocument::from_record(json!({ "raw_text": 42 })).is_err());
        assert!(ScenarioDocument::from_record(json!({
            "raw_text": "x",
            "symbol": "GC=F",
            "analysis_date": "",
            "support_levels": [{ "price": "not a number" }],
            "resistance_levels": [],
            "support_zones": [],
            "resistance_zones": [],
            "trend_lines": [],
            "notes": [],
        }))
        .is_err());
    }

    #[test]
    fn test_analysis_datetime_parses_normalized_date() {
        let document = sample_document();
        let expected: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 10, 21)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        assert_eq!(document.analysis_datetime(), Some(expected));
    }

    #[test]
    fn test_analysis_datetime_absent_for_empty_sentinel() {
        let mut document = sample_document();
        document.analysis_date = String::new();

        assert_eq!(document.analysis_datetime(), None);
    }
}
