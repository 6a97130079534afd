//! Multi-day forecast rows: weekday, condition, hi/lo labels and the
//! temperature range capsule.

use crate::conditions::{ConditionEntry, WeatherCondition};
use crate::format;
use crate::temp_range::TemperatureRange;
use crate::types::{Rgb, UnitSystem};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Range drawn when the provider omits a day's high
pub const DEFAULT_HIGH: f64 = 100.0;
/// Range drawn when the provider omits a day's low
pub const DEFAULT_LOW: f64 = 0.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperature {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// One day of forecast data, as the weather provider reports it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    #[serde(rename = "dt", default)]
    pub timestamp_seconds: Option<f64>,
    #[serde(default)]
    pub temp: Option<DailyTemperature>,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

impl DailySample {
    pub fn high(&self) -> Option<f64> {
        self.temp.as_ref().and_then(|t| t.max)
    }

    pub fn low(&self) -> Option<f64> {
        self.temp.as_ref().and_then(|t| t.min)
    }

    pub fn condition(&self) -> Option<WeatherCondition> {
        ConditionEntry::primary_condition(&self.weather)
    }

    pub fn description(&self) -> &str {
        ConditionEntry::primary_description(&self.weather)
    }
}

/// Display-ready forecast row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub weekday: String,
    pub condition: String,
    /// Daily rows always use the daytime icon
    pub icon: Option<String>,
    pub hi_label: String,
    pub lo_label: String,
    pub range_colors: Vec<Rgb>,
}

pub fn forecast_row(day: &DailySample, units: UnitSystem, tz: &FixedOffset) -> ForecastRow {
    let range = TemperatureRange::new(
        day.high().unwrap_or(DEFAULT_HIGH),
        day.low().unwrap_or(DEFAULT_LOW),
        units,
    );

    ForecastRow {
        weekday: day
            .timestamp_seconds
            .map(|ts| format::weekday_label(ts, tz))
            .unwrap_or_default(),
        condition: day.description().to_string(),
        icon: day.condition().map(|c| c.icon_name(true)),
        hi_label: day.high().map(format::degrees).unwrap_or_default(),
        lo_label: day.low().map(format::degrees).unwrap_or_default(),
        range_colors: range.colors(),
    }
}

pub fn forecast_rows(days: &[DailySample], units: UnitSystem, tz: &FixedOffset) -> Vec<ForecastRow> {
    days.iter().map(|day| forecast_row(day, units, tz)).collect()
}
