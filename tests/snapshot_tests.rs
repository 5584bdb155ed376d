use std::time::Instant;

use series_highlight::api::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, HighlightMode, PresentationConfig,
};
use series_highlight::core::{ConstantUnitSource, GeneratorConfig, SeriesGroup};
use series_highlight::render::NullRenderer;
use series_highlight::{ChartError, HighlightEngine, HighlightEngineConfig};

fn engine_with_state() -> HighlightEngine<NullRenderer> {
    let mut engine = HighlightEngine::with_source(
        NullRenderer::default(),
        HighlightEngineConfig::default().with_generator(GeneratorConfig::default().with_years(2015, 1)),
        &mut ConstantUnitSource::midpoint(),
    )
    .expect("engine init");
    engine.toggle_series("LH").expect("series");
    engine.toggle_group(SeriesGroup::Retired).expect("group");
    engine.series_enter("BA").expect("enter");
    engine.pointer_move(6, Instant::now()).expect("move");
    engine.set_single_series_mode(true).expect("mode");
    engine
}

#[test]
fn snapshot_contract_round_trips() {
    let engine = engine_with_state();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.mode, HighlightMode::SingleSeries);
    assert_eq!(snapshot.sample_count, 12);
    assert_eq!(snapshot.series_count, 12);

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["schema_version"], ENGINE_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(value["snapshot"]["mode"], "single_series");

    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let engine = engine_with_state();
    let json = engine.snapshot_json_pretty().expect("serialize");
    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, engine.snapshot());
    assert!(parsed.visibility.is_series_hidden("LH"));
    assert!(parsed.hover.is_hovered("BA"));
}

#[test]
fn unsupported_contract_version_is_rejected() {
    let engine = engine_with_state();
    let json = engine
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");

    let err = EngineSnapshot::from_json_compat_str(&json).expect_err("version 9");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("9")));
}

#[test]
fn malformed_snapshot_json_is_rejected() {
    let err = EngineSnapshot::from_json_compat_str("{\"mode\":").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn matrix_export_lists_samples_in_time_order() {
    let engine = engine_with_state();
    let json = engine.matrix_json_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    let samples = value["samples"].as_array().expect("samples");
    assert_eq!(samples.len(), 12);
    assert_eq!(samples[0]["values"]["BA"], 90);
    assert_eq!(samples[0]["values"]["SR"], 28);
}

#[test]
fn empty_config_json_yields_defaults() {
    let config = HighlightEngineConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, HighlightEngineConfig::default());
    assert_eq!(config.pointer_throttle_ms, 16);
    assert_eq!(config.initial_mode(), HighlightMode::Classic);
}

#[test]
fn partial_config_json_keeps_remaining_defaults() {
    let config = HighlightEngineConfig::from_json_str(
        r#"{"generator":{"years":2},"presentation":{"faded_opacity":0.15},"single_series_mode":true}"#,
    )
    .expect("parse");

    assert_eq!(config.generator.years, 2);
    assert_eq!(config.generator.start_year, 2015);
    assert_eq!(config.generator.steps_per_year, 12);
    assert_eq!(config.presentation.faded_opacity, 0.15);
    assert_eq!(config.presentation.base_width, PresentationConfig::default().base_width);
    assert_eq!(config.initial_mode(), HighlightMode::SingleSeries);
}

#[test]
fn config_json_round_trips() {
    let config = HighlightEngineConfig::default()
        .with_pointer_throttle_ms(33)
        .with_presentation(PresentationConfig::soft_fade());
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(HighlightEngineConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn invalid_config_json_is_reported() {
    let err = HighlightEngineConfig::from_json_str(r#"{"pointer_throttle_ms":"fast"}"#)
        .expect_err("wrong type");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
