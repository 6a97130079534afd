use crate::current::CurrentSample;
use crate::daily::DailySample;
use crate::format;
use crate::types::HourlySample;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// The slice of a forecast response the display layer works from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// Seconds east of UTC for the forecast location
    #[serde(default)]
    pub timezone_offset: Option<i32>,
    #[serde(default)]
    pub current: Option<CurrentSample>,
    #[serde(default)]
    pub hourly: Vec<HourlySample>,
    #[serde(default)]
    pub daily: Vec<DailySample>,
}

impl ForecastSnapshot {
    /// Location offset, or `fallback` when the snapshot carries none
    pub fn offset_or(&self, fallback: FixedOffset) -> FixedOffset {
        self.timezone_offset
            .map(format::offset_from_seconds)
            .unwrap_or(fallback)
    }

    /// Day/night for the whole screen; night when there are no current conditions
    pub fn is_day(&self) -> bool {
        self.current.as_ref().is_some_and(CurrentSample::is_day)
    }

    /// Local sunrise, or [`format::UNKNOWN_CLOCK_TIME`] without an offset or reading
    pub fn sunrise_time(&self) -> String {
        self.local_clock_time(self.current.as_ref().and_then(|c| c.sunrise))
    }

    pub fn sunset_time(&self) -> String {
        self.local_clock_time(self.current.as_ref().and_then(|c| c.sunset))
    }

    fn local_clock_time(&self, timestamp_seconds: Option<f64>) -> String {
        match (self.timezone_offset, timestamp_seconds) {
            (Some(offset), Some(_)) => {
                format::clock_time(timestamp_seconds, &format::offset_from_seconds(offset))
            }
            _ => format::UNKNOWN_CLOCK_TIME.to_string(),
        }
    }
}
