use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from the provider's condition codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Thunder,
    ThunderHeavy,
    ThunderDrizzle,
    ScatteredShowers,
    RainDrizzle,
    Rain,
    RainHeavy,
    Sleet,
    Snow,
    SnowHeavy,
    Mist,
    Smoke,
    Haze,
    Fog,
    Dust,
    Ash,
    Squalls,
    Tornado,
    Clear,
    MostlyClear,
    FewClouds,
    Cloudy,
}

impl WeatherCondition {
    /// Convert a provider condition code to a WeatherCondition.
    /// See: https://openweathermap.org/weather-conditions
    pub fn from_code(code: i32) -> Option<Self> {
        let condition = match code {
            200 | 201 | 210 | 211 | 221 => Self::Thunder,
            202 | 212 => Self::ThunderHeavy,
            230..=232 => Self::ThunderDrizzle,
            300 | 302 | 310 | 312 | 313 | 314 => Self::ScatteredShowers,
            301 | 311 | 321 => Self::RainDrizzle,
            500 | 501 | 520 | 521 | 522 | 531 => Self::Rain,
            502..=504 => Self::RainHeavy,
            511 | 611 | 612 | 613 => Self::Sleet, // Freezing rain
            600 | 601 | 615 | 616 | 620 | 621 | 622 => Self::Snow,
            602 => Self::SnowHeavy,
            701 => Self::Mist,
            711 => Self::Smoke,
            721 => Self::Haze,
            741 => Self::Fog,
            761 => Self::Dust,
            762 => Self::Ash,
            771 => Self::Squalls,
            781 => Self::Tornado,
            800 => Self::Clear,
            801 => Self::MostlyClear,
            802 => Self::FewClouds,
            803 | 804 => Self::Cloudy,
            _ => return None,
        };
        Some(condition)
    }

    /// Icon asset name without the day/night suffix
    pub fn asset_stem(&self) -> &'static str {
        match self {
            Self::Thunder => "Thunder",
            Self::ThunderHeavy => "Thunder-Heavy",
            Self::ThunderDrizzle => "Thunder-Drizzle",
            Self::ScatteredShowers => "Scattered-Showers",
            Self::RainDrizzle => "Rain-Drizzle",
            Self::Rain => "Rain",
            Self::RainHeavy => "Rain-Heavy",
            Self::Sleet => "Sleet",
            Self::Snow => "Snow",
            Self::SnowHeavy => "Snow-Heavy",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Fog => "Fog",
            Self::Dust => "Dust",
            Self::Ash => "Ash",
            Self::Squalls => "Squalls",
            Self::Tornado => "Tornado",
            Self::Clear => "Clear",
            Self::MostlyClear => "Mostly-Clear",
            Self::FewClouds => "Few-Clouds",
            Self::Cloudy => "Cloudy",
        }
    }

    /// Full icon asset name, e.g. `Rain-Heavy-Night`
    pub fn icon_name(&self, is_day: bool) -> String {
        format!(
            "{}-{}",
            self.asset_stem(),
            if is_day { "Day" } else { "Night" }
        )
    }
}

/// Shown when the provider sends no condition description
pub const UNKNOWN_CONDITION: &str = "unknown";

/// One entry of the provider's `weather` list; only the first is displayed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ConditionEntry {
    pub fn primary_condition(entries: &[ConditionEntry]) -> Option<WeatherCondition> {
        entries
            .first()
            .and_then(|w| w.id)
            .and_then(WeatherCondition::from_code)
    }

    pub fn primary_description(entries: &[ConditionEntry]) -> &str {
        entries
            .first()
            .and_then(|w| w.description.as_deref())
            .unwrap_or(UNKNOWN_CONDITION)
    }
}

/// Whether `now` falls between sunrise and sunset. Missing data counts as day.
pub fn is_daytime(now: Option<f64>, sunrise: Option<f64>, sunset: Option<f64>) -> bool {
    match (now, sunrise, sunset) {
        (Some(now), Some(sunrise), Some(sunset)) => sunrise <= now && now <= sunset,
        _ => true,
    }
}
