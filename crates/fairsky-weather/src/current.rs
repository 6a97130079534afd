//! Current conditions screen: temperature, feels-like, the detail grid
//! (humidity, dew point, clouds, pressure, UV, visibility, wind) and
//! sunrise/sunset.
//!
//! Each label has its own fallback for a missing reading, matching what the
//! screen has always shown for it.

use crate::conditions::{is_daytime, ConditionEntry, WeatherCondition};
use crate::format;
use crate::snapshot::ForecastSnapshot;
use crate::types::UnitSystem;
use crate::{uv, wind};
use serde::{Deserialize, Serialize};

/// Current conditions as the weather provider reports them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentSample {
    #[serde(rename = "dt", default)]
    pub timestamp_seconds: Option<f64>,
    #[serde(default)]
    pub sunrise: Option<f64>,
    #[serde(default)]
    pub sunset: Option<f64>,
    #[serde(rename = "temp", default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub dew_point: Option<f64>,
    #[serde(default)]
    pub uvi: Option<f64>,
    #[serde(default)]
    pub clouds: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(rename = "wind_deg", default)]
    pub wind_direction: Option<f64>,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

impl CurrentSample {
    pub fn is_day(&self) -> bool {
        is_daytime(self.timestamp_seconds, self.sunrise, self.sunset)
    }

    pub fn condition(&self) -> Option<WeatherCondition> {
        ConditionEntry::primary_condition(&self.weather)
    }

    pub fn description(&self) -> &str {
        ConditionEntry::primary_description(&self.weather)
    }

    /// Day or night icon, by where `dt` falls between sunrise and sunset
    pub fn icon_name(&self) -> Option<String> {
        self.condition().map(|c| c.icon_name(self.is_day()))
    }

    pub fn temperature_label(&self) -> String {
        self.temperature.map(format::degrees).unwrap_or_default()
    }

    pub fn feels_like_label(&self) -> String {
        self.feels_like.map(format::degrees).unwrap_or_default()
    }

    pub fn humidity_label(&self) -> String {
        self.humidity
            .map(format::percent)
            .unwrap_or_else(|| "?%".to_string())
    }

    // "?%" rather than "?°" is what the dew point tile has always shown
    pub fn dew_point_label(&self) -> String {
        self.dew_point
            .map(format::degrees)
            .unwrap_or_else(|| "?%".to_string())
    }

    pub fn cloudiness_label(&self) -> String {
        format::percent(self.clouds.unwrap_or(0.0))
    }

    pub fn pressure_label(&self) -> String {
        self.pressure
            .map(|p| format!("{:.0} mb", p))
            .unwrap_or_else(|| "? mb".to_string())
    }

    pub fn uv_index_label(&self) -> String {
        format!("{:.0}", self.uvi.unwrap_or(0.0))
    }

    pub fn visibility_label(&self) -> String {
        format!("{:.0} m", self.visibility.unwrap_or(0.0))
    }
}

/// Display-ready current conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature: String,
    pub feels_like: String,
    pub condition: String,
    pub icon: Option<String>,
    pub is_day: bool,
    pub humidity: String,
    pub dew_point: String,
    pub cloudiness: String,
    pub pressure: String,
    pub uv_index: String,
    pub uv_fraction: f64,
    pub visibility: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub sunrise: String,
    pub sunset: String,
}

impl CurrentConditions {
    /// `None` when the snapshot has no current section
    pub fn from_snapshot(snapshot: &ForecastSnapshot, units: UnitSystem) -> Option<Self> {
        let current = snapshot.current.as_ref()?;
        let is_day = snapshot.is_day();

        Some(Self {
            temperature: current.temperature_label(),
            feels_like: current.feels_like_label(),
            condition: current.description().to_string(),
            icon: current.icon_name(),
            is_day,
            humidity: current.humidity_label(),
            dew_point: current.dew_point_label(),
            cloudiness: current.cloudiness_label(),
            pressure: current.pressure_label(),
            uv_index: current.uv_index_label(),
            uv_fraction: uv::uv_fraction(current.uvi, is_day),
            visibility: current.visibility_label(),
            wind_speed: wind::speed_label(current.wind_speed, units),
            wind_direction: wind::compass_label(current.wind_direction).to_string(),
            sunrise: snapshot.sunrise_time(),
            sunset: snapshot.sunset_time(),
        })
    }
}
