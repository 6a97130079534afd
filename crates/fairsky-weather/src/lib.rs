//! Forecast presentation for fairsky
//!
//! Turns forecast samples from the weather provider into display-ready data:
//! current conditions, hourly temperature/rain bars, temperature range gradient colors and the
//! labels shown on the forecast screens. Everything here is pure and
//! synchronous.

pub mod conditions;
pub mod current;
pub mod daily;
pub mod format;
pub mod hourly;
pub mod snapshot;
pub mod temp_range;
pub mod types;
pub mod uv;
pub mod wind;

pub use conditions::{ConditionEntry, WeatherCondition};
pub use current::{CurrentConditions, CurrentSample};
pub use daily::{forecast_row, forecast_rows, DailySample, ForecastRow};
pub use hourly::{normalize_hourly, HourlyBar, HOURLY_WINDOW};
pub use snapshot::ForecastSnapshot;
pub use temp_range::{colors_for_range, TemperatureBand, TemperatureRange, TEMPERATURE_BANDS};
pub use types::*;
