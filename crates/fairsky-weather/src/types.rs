use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Unit system preference (affects formatting and conversion only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, meters per second
    Metric,
    /// Fahrenheit, miles per hour
    #[default]
    Imperial,
}

impl UnitSystem {
    pub fn is_metric(self) -> bool {
        matches!(self, Self::Metric)
    }

    /// Amount the hourly temperature range is widened on each side before
    /// bar heights are computed. Fahrenheit spans a wider numeric range than
    /// Celsius for the same physical difference, hence the larger pad.
    pub fn temperature_padding(self) -> f64 {
        match self {
            Self::Metric => 2.0,
            Self::Imperial => 10.0,
        }
    }

    /// Short label for wind speeds
    pub fn speed_unit(self) -> &'static str {
        match self {
            Self::Metric => "mps",
            Self::Imperial => "mph",
        }
    }

    /// Value the weather provider expects for its `units` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit system: {0} (expected metric or imperial)")]
pub struct ParseUnitSystemError(pub String);

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "celsius" | "c" => Ok(Self::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(Self::Imperial),
            _ => Err(ParseUnitSystemError(s.to_string())),
        }
    }
}

/// Rain volume buckets keyed by accumulation window (e.g. `"1h"`), in mm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RainVolume(BTreeMap<String, f64>);

impl RainVolume {
    pub const LAST_HOUR: &'static str = "1h";

    pub fn last_hour(mm: f64) -> Self {
        let mut buckets = BTreeMap::new();
        buckets.insert(Self::LAST_HOUR.to_string(), mm);
        Self(buckets)
    }

    pub fn bucket(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn last_hour_mm(&self) -> Option<f64> {
        self.bucket(Self::LAST_HOUR)
    }
}

/// One hourly forecast data point, as the weather provider reports it.
///
/// Every field is optional; defaults are applied when the sample is turned
/// into display data, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    #[serde(rename = "dt", default)]
    pub timestamp_seconds: Option<f64>,
    #[serde(rename = "temp", default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub rain: Option<RainVolume>,
}

impl HourlySample {
    pub fn new(timestamp_seconds: f64, temperature: f64) -> Self {
        Self {
            timestamp_seconds: Some(timestamp_seconds),
            temperature: Some(temperature),
            rain: None,
        }
    }

    pub fn with_rain(mut self, mm: f64) -> Self {
        self.rain = Some(RainVolume::last_hour(mm));
        self
    }

    /// Rain volume for the hour, if the provider reported one
    pub fn rain_volume_mm(&self) -> Option<f64> {
        self.rain.as_ref().and_then(RainVolume::last_hour_mm)
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to `0.0..=1.0` for renderers that take float colors
    pub fn to_unit_floats(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_padding() {
        assert_eq!(UnitSystem::Metric.temperature_padding(), 2.0);
        assert_eq!(UnitSystem::Imperial.temperature_padding(), 10.0);
    }

    #[test]
    fn test_unit_default_is_imperial() {
        assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
        assert!(!UnitSystem::default().is_metric());
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!("Imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!(" C ".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!("fahrenheit".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert!("kelvin".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_unit_serde_lowercase() {
        let json = serde_json::to_string(&UnitSystem::Metric).unwrap();
        assert_eq!(json, "\"metric\"");
        let parsed: UnitSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(parsed, UnitSystem::Imperial);
    }

    #[test]
    fn test_hourly_sample_from_provider_json() {
        let sample: HourlySample = serde_json::from_value(serde_json::json!({
            "dt": 1_602_950_400.0,
            "temp": 61.3,
            "humidity": 80,
            "rain": { "1h": 0.42 }
        }))
        .unwrap();
        assert_eq!(sample.timestamp_seconds, Some(1_602_950_400.0));
        assert_eq!(sample.temperature, Some(61.3));
        assert_eq!(sample.rain_volume_mm(), Some(0.42));
    }

    #[test]
    fn test_hourly_sample_missing_fields() {
        let sample: HourlySample = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(sample, HourlySample::default());
        assert_eq!(sample.rain_volume_mm(), None);
    }

    #[test]
    fn test_rain_other_bucket_ignored() {
        let sample: HourlySample =
            serde_json::from_value(serde_json::json!({ "rain": { "3h": 2.0 } })).unwrap();
        assert_eq!(sample.rain_volume_mm(), None);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(255, 102, 0).to_hex(), "#ff6600");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(Rgb::new(255, 0, 0).to_unit_floats(), [1.0, 0.0, 0.0]);
    }
}
