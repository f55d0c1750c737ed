use chart_motion::animation::Easing;
use chart_motion::api::{
    LineChartConfig, LineChartStyle, PieChartConfig, PieChartStyle, PlotPadding,
};
use chart_motion::core::{DataPoint, Viewport};
use chart_motion::particles::ParticleConfig;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

#[test]
fn line_config_fills_missing_fields_with_defaults() {
    let json = r#"{ "viewport": { "width": 320, "height": 240 }, "tolerance_radius_px": 24.0 }"#;
    let config: LineChartConfig = serde_json::from_str(json).expect("parse config");

    assert_eq!(config.viewport, Viewport::new(320, 240));
    assert_eq!(config.tolerance_radius_px, 24.0);
    assert_eq!(config.entry_duration_ms, 1_000.0);
    assert_eq!(config.entry_easing, Easing::Decelerate);
    assert_eq!(config.primary_name, "Income");
    assert_eq!(config.secondary_name, "Expense");
    assert_eq!(config.padding, PlotPadding::default());
    assert_eq!(config.style, LineChartStyle::default());
}

#[test]
fn pie_config_fills_missing_fields_with_defaults() {
    let json = r#"{ "viewport": { "width": 300, "height": 300 }, "rotation_enabled": false }"#;
    let config: PieChartConfig = serde_json::from_str(json).expect("parse config");

    assert!(!config.rotation_enabled);
    assert_eq!(config.inner_radius_ratio, 0.55);
    assert_eq!(config.rotation_period_ms, 20_000.0);
    assert_eq!(config.style, PieChartStyle::default());
}

#[test]
fn builders_override_defaults() {
    let config = LineChartConfig::new(Viewport::new(100, 100))
        .with_padding(PlotPadding::uniform(4.0))
        .with_entry_animation(250.0, Easing::EaseInOut)
        .with_series_names("In", "Out");
    assert_eq!(config.padding.bottom, 4.0);
    assert_eq!(config.entry_easing, Easing::EaseInOut);
    assert_eq!(config.secondary_name, "Out");
}

#[test]
fn particle_config_serializes() {
    let config = ParticleConfig::default().with_count(12);
    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: ParticleConfig = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed.count, 12);
    assert_eq!(parsed.palette.len(), config.palette.len());
}

#[test]
fn data_points_accept_decimal_amounts_and_times() {
    let amount = Decimal::new(125_050, 2);
    let time = Utc
        .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
        .single()
        .expect("valid time");
    let point = DataPoint::from_decimal(0, amount, "Mar")
        .expect("decimal converts")
        .with_time(time);

    assert_eq!(point.value, 1_250.5);
    assert_eq!(point.timestamp, time.timestamp_millis());
    assert_eq!(point.label, "Mar");
}
