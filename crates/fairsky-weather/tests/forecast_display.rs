//! End-to-end checks of the display data built from a provider-shaped
//! forecast snapshot.

use fairsky_weather::format::utc;
use fairsky_weather::{
    colors_for_range, forecast_rows, normalize_hourly, ForecastSnapshot, Rgb, UnitSystem,
    HOURLY_WINDOW,
};

fn snapshot_json() -> serde_json::Value {
    let hourly: Vec<serde_json::Value> = (0..48)
        .map(|i| {
            let mut hour = serde_json::json!({
                // 2020-10-17 15:00 UTC onwards
                "dt": 1_602_946_800.0 + f64::from(i) * 3600.0,
                "temp": 58.0 + f64::from(i % 7),
                "humidity": 70
            });
            if i % 3 == 0 {
                hour["rain"] = serde_json::json!({ "1h": f64::from(i) * 0.1 });
            }
            hour
        })
        .collect();

    serde_json::json!({
        "timezone_offset": -25200,
        "hourly": hourly,
        "daily": [
            { "dt": 1_602_961_200.0, "temp": { "min": 12.0, "max": 39.0 }, "weather": [{ "id": 601, "description": "snow" }] },
            { "dt": 1_603_047_600.0, "temp": { "min": 55.0, "max": 88.0 }, "weather": [{ "id": 800, "description": "clear sky" }] }
        ]
    })
}

fn snapshot() -> ForecastSnapshot {
    serde_json::from_value(snapshot_json()).unwrap()
}

#[test]
fn test_hourly_bars_from_snapshot() {
    let snapshot = snapshot();
    let tz = snapshot.offset_or(utc());
    let bars = normalize_hourly(&snapshot.hourly, UnitSystem::Imperial, &tz);

    assert_eq!(bars.len(), HOURLY_WINDOW);
    // 15:00 UTC is 8am at UTC-7
    assert_eq!(bars[0].hour_label, "8a");
    assert_eq!(bars[4].hour_label, "12p");
    assert_eq!(bars[5].hour_label, "1p");

    for (i, bar) in bars.iter().enumerate() {
        assert_eq!(bar.index, i);
        assert!((0.0..=1.0).contains(&bar.temperature_height_fraction));
        assert!((0.0..=1.0).contains(&bar.rain_height_fraction));
        assert!(!bar.hour_label.contains('m'));
        assert_eq!(bar.hour_label, bar.hour_label.to_lowercase());
    }

    // Hour 9 reports 0.9 mm, hour 1 reports none
    assert_eq!(bars[9].rain_label, "90%");
    assert_eq!(bars[1].rain_label, "0%");
}

#[test]
fn test_unit_switch_changes_padding_only() {
    let snapshot = snapshot();
    let imperial = normalize_hourly(&snapshot.hourly, UnitSystem::Imperial, &utc());
    let metric = normalize_hourly(&snapshot.hourly, UnitSystem::Metric, &utc());

    for (a, b) in imperial.iter().zip(&metric) {
        assert_eq!(a.hour_label, b.hour_label);
        assert_eq!(a.temperature_label, b.temperature_label);
        assert_eq!(a.rain_height_fraction, b.rain_height_fraction);
    }
    // A tighter pad stretches the same temperatures over more of the bar
    let spread = |bars: &[fairsky_weather::HourlyBar]| {
        let fractions = bars.iter().map(|b| b.temperature_height_fraction);
        fractions.clone().fold(f64::MIN, f64::max) - fractions.fold(f64::MAX, f64::min)
    };
    assert!(spread(&metric) > spread(&imperial));
}

#[test]
fn test_daily_rows_from_snapshot() {
    let snapshot = snapshot();
    let tz = snapshot.offset_or(utc());
    let rows = forecast_rows(&snapshot.daily, UnitSystem::Imperial, &tz);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].icon.as_deref(), Some("Snow-Day"));
    assert_eq!(rows[0].range_colors, colors_for_range(39.0, 12.0, UnitSystem::Imperial));
    assert_eq!(rows[1].condition, "clear sky");
    assert_eq!(rows[1].range_colors.first(), Some(&Rgb::new(255, 0, 153)));
}

#[test]
fn test_range_colors_read_hot_to_cold() {
    let colors = colors_for_range(39.0, 12.0, UnitSystem::Imperial);
    assert_eq!(
        colors,
        vec![
            Rgb::new(0, 255, 13),
            Rgb::new(0, 255, 179),
            Rgb::new(67, 158, 255),
            Rgb::new(0, 102, 255),
            Rgb::new(134, 190, 249),
            Rgb::new(189, 208, 244),
        ]
    );

    let freezing = colors_for_range(0.0, -20.0, UnitSystem::Metric);
    assert_eq!(freezing.len(), 8);
    assert_eq!(freezing.first(), Some(&Rgb::new(0, 255, 179)));
    assert_eq!(freezing.last(), Some(&Rgb::new(255, 255, 255)));
}

#[test]
fn test_degenerate_inputs() {
    assert!(normalize_hourly(&[], UnitSystem::Metric, &utc()).is_empty());
    assert!(colors_for_range(10.0, 20.0, UnitSystem::Metric).is_empty());
}
