//! Temperature range capsule colors.
//!
//! A day's high/low pair is mapped onto a fixed table of Fahrenheit bands,
//! black at the hot end through purples, reds, oranges, yellows, greens and
//! blues to white at the cold end. The colors of every band the range
//! touches become the stops of the capsule's gradient.

use crate::types::{Rgb, UnitSystem};
use serde::Serialize;

/// Half-open Fahrenheit interval `[low_inclusive, high_exclusive)` and its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperatureBand {
    pub low_inclusive: i32,
    pub high_exclusive: i32,
    pub color: Rgb,
}

impl TemperatureBand {
    const fn new(low_inclusive: i32, high_exclusive: i32, color: Rgb) -> Self {
        Self {
            low_inclusive,
            high_exclusive,
            color,
        }
    }

    /// Whether this band shares any degree with the inclusive range `[lo, hi]`
    pub fn overlaps(&self, lo: i64, hi: i64) -> bool {
        lo <= hi
            && lo < i64::from(self.high_exclusive)
            && i64::from(self.low_inclusive) <= hi
    }
}

pub static TEMPERATURE_BANDS: [TemperatureBand; 24] = [
    TemperatureBand::new(110, 212, Rgb::new(0, 0, 0)),
    TemperatureBand::new(105, 110, Rgb::new(127, 0, 166)),
    TemperatureBand::new(100, 105, Rgb::new(180, 2, 235)),
    TemperatureBand::new(95, 100, Rgb::new(196, 2, 255)),
    TemperatureBand::new(90, 95, Rgb::new(247, 2, 255)),
    TemperatureBand::new(85, 90, Rgb::new(255, 0, 153)),
    TemperatureBand::new(80, 85, Rgb::new(255, 0, 0)),
    TemperatureBand::new(75, 80, Rgb::new(255, 102, 0)),
    TemperatureBand::new(70, 75, Rgb::new(255, 149, 0)),
    TemperatureBand::new(65, 70, Rgb::new(255, 179, 0)),
    TemperatureBand::new(60, 65, Rgb::new(255, 208, 0)),
    TemperatureBand::new(55, 60, Rgb::new(255, 238, 0)),
    TemperatureBand::new(50, 55, Rgb::new(255, 255, 0)),
    TemperatureBand::new(45, 50, Rgb::new(217, 255, 0)),
    TemperatureBand::new(40, 45, Rgb::new(115, 255, 0)),
    TemperatureBand::new(35, 40, Rgb::new(0, 255, 13)),
    TemperatureBand::new(30, 35, Rgb::new(0, 255, 179)),
    TemperatureBand::new(25, 30, Rgb::new(67, 158, 255)),
    TemperatureBand::new(20, 25, Rgb::new(0, 102, 255)),
    TemperatureBand::new(15, 20, Rgb::new(134, 190, 249)),
    TemperatureBand::new(10, 15, Rgb::new(189, 208, 244)),
    TemperatureBand::new(5, 10, Rgb::new(216, 216, 216)),
    TemperatureBand::new(0, 5, Rgb::new(239, 239, 239)),
    TemperatureBand::new(-100, 0, Rgb::new(255, 255, 255)),
];

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Whole Fahrenheit degrees, truncated toward zero
fn whole_fahrenheit(temp: f64, units: UnitSystem) -> i64 {
    let fahrenheit = if units.is_metric() {
        celsius_to_fahrenheit(temp)
    } else {
        temp
    };
    fahrenheit.trunc() as i64
}

/// Bands ordered hot to cold
fn bands_descending() -> Vec<&'static TemperatureBand> {
    let mut bands: Vec<&TemperatureBand> = TEMPERATURE_BANDS.iter().collect();
    bands.sort_by(|a, b| b.low_inclusive.cmp(&a.low_inclusive));
    bands
}

/// Colors of every band overlapping `[lo_temp, hi_temp]`, hot end first.
///
/// Temperatures are in `units`. An inverted range (`hi_temp < lo_temp`)
/// overlaps nothing and yields no colors; callers fall back to a solid fill.
pub fn colors_for_range(hi_temp: f64, lo_temp: f64, units: UnitSystem) -> Vec<Rgb> {
    let hi = whole_fahrenheit(hi_temp, units);
    let lo = whole_fahrenheit(lo_temp, units);

    let colors: Vec<Rgb> = bands_descending()
        .into_iter()
        .filter(|band| band.overlaps(lo, hi))
        .map(|band| band.color)
        .collect();

    tracing::debug!(
        "Temperature range {}..={} F matched {} bands",
        lo,
        hi,
        colors.len()
    );
    colors
}

/// A high/low pair ready to be drawn as a gradient capsule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub hi: f64,
    pub lo: f64,
    pub units: UnitSystem,
}

impl TemperatureRange {
    pub fn new(hi: f64, lo: f64, units: UnitSystem) -> Self {
        Self { hi, lo, units }
    }

    pub fn colors(&self) -> Vec<Rgb> {
        colors_for_range(self.hi, self.lo, self.units)
    }

    /// Colors spread evenly over `0.0..=1.0`, the way a linear gradient
    /// distributes a plain color list.
    pub fn gradient_stops(&self) -> Vec<(f64, Rgb)> {
        let colors = self.colors();
        let last = colors.len().saturating_sub(1);
        colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| {
                let offset = if last == 0 {
                    0.0
                } else {
                    i as f64 / last as f64
                };
                (offset, color)
            })
            .collect()
    }
}
