//! Hourly chart data: turns raw hourly samples into bar heights and labels
//! for the temperature and rain charts.

use crate::format;
use crate::types::{HourlySample, UnitSystem};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Number of hours charted
pub const HOURLY_WINDOW: usize = 10;

/// Height drawn for a rain bar with no rain, so the hour still shows a stub
pub const EMPTY_RAIN_BAR_HEIGHT: f64 = 1.0;

/// One hour of display-ready chart data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBar {
    pub index: usize,
    pub hour_label: String,
    pub temperature_label: String,
    pub temperature_height_fraction: f64,
    pub rain_label: String,
    pub rain_height_fraction: f64,
}

impl HourlyBar {
    pub fn temperature_bar_height(&self, max_height: f64) -> f64 {
        self.temperature_height_fraction * max_height
    }

    pub fn rain_bar_height(&self, max_height: f64) -> f64 {
        if self.rain_height_fraction == 0.0 {
            EMPTY_RAIN_BAR_HEIGHT
        } else {
            self.rain_height_fraction * max_height
        }
    }
}

fn resolved_temperature(sample: &HourlySample) -> f64 {
    sample.temperature.filter(|t| t.is_finite()).unwrap_or(0.0)
}

fn rain_fraction(sample: &HourlySample) -> f64 {
    sample
        .rain_volume_mm()
        .filter(|mm| mm.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 1.0)
}

/// Build the hourly bars for the first [`HOURLY_WINDOW`] samples.
///
/// The temperature range is padded outward by the unit system's padding so
/// the coldest hour still gets a visible bar. Fractions are not clamped
/// beyond that padding. Labels are rendered in `tz`.
pub fn normalize_hourly(
    samples: &[HourlySample],
    units: UnitSystem,
    tz: &FixedOffset,
) -> Vec<HourlyBar> {
    let window = &samples[..samples.len().min(HOURLY_WINDOW)];
    if window.is_empty() {
        return Vec::new();
    }

    let temps: Vec<f64> = window.iter().map(resolved_temperature).collect();
    let pad = units.temperature_padding();
    let min_temp = temps.iter().copied().fold(f64::INFINITY, f64::min) - pad;
    let max_temp = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max) + pad;
    // Halve before subtracting when the full span overflows f64
    let halved = !(max_temp - min_temp).is_finite();
    let (min_temp, max_temp) = if halved {
        (min_temp / 2.0, max_temp / 2.0)
    } else {
        (min_temp, max_temp)
    };
    let span = max_temp - min_temp;

    tracing::debug!(
        "Normalizing {} hourly samples ({} given), range {:.1}..{:.1} {}",
        window.len(),
        samples.len(),
        min_temp,
        max_temp,
        units
    );

    window
        .iter()
        .zip(temps)
        .enumerate()
        .map(|(index, (sample, temp))| {
            let rain = rain_fraction(sample);
            let scaled = if halved { temp / 2.0 } else { temp };
            HourlyBar {
                index,
                hour_label: format::hour_label(sample.timestamp_seconds, tz),
                temperature_label: format::degrees(temp),
                temperature_height_fraction: (scaled - min_temp) / span,
                rain_label: format::percent(rain * 100.0),
                rain_height_fraction: rain,
            }
        })
        .collect()
}
