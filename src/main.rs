//! fairsky - print forecast display data from a forecast snapshot file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fairsky_core::{AppError, Config, InputError};
use fairsky_weather::{
    forecast_rows, normalize_hourly, CurrentConditions, ForecastRow, ForecastSnapshot, HourlyBar,
    Rgb, TemperatureRange, UnitSystem,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fairsky",
    version,
    about = "Forecast chart and gradient data for the fairsky screens"
)]
struct Cli {
    /// Unit system; defaults to the configured one
    #[arg(long, global = true)]
    units: Option<UnitSystem>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Current conditions, details and sunrise/sunset
    Current {
        /// Forecast snapshot (JSON)
        snapshot: PathBuf,
    },
    /// Ten-hour temperature and rain bars
    Hourly {
        /// Forecast snapshot (JSON)
        snapshot: PathBuf,
    },
    /// Multi-day forecast rows
    Daily {
        /// Forecast snapshot (JSON)
        snapshot: PathBuf,
    },
    /// Gradient colors for a high/low temperature pair
    Range {
        #[arg(long, allow_hyphen_values = true)]
        hi: f64,
        #[arg(long, allow_hyphen_values = true)]
        lo: f64,
    },
}

fn load_snapshot(path: &Path) -> Result<ForecastSnapshot, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| InputError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn render_current(title: &str, current: &CurrentConditions) -> Vec<String> {
    vec![
        title.to_string(),
        format!(
            "{}  {} (feels like {})  [{}]",
            current.temperature,
            current.condition,
            current.feels_like,
            current.icon.as_deref().unwrap_or("-"),
        ),
        format!("Humidity    {}", current.humidity),
        format!("Dew point   {}", current.dew_point),
        format!("Clouds      {}", current.cloudiness),
        format!("Pressure    {}", current.pressure),
        format!("UV index    {} ({:.0}%)", current.uv_index, current.uv_fraction * 100.0),
        format!("Visibility  {}", current.visibility),
        format!("Wind        {} {}", current.wind_speed, current.wind_direction),
        format!("Sunrise     {}", current.sunrise),
        format!("Sunset      {}", current.sunset),
    ]
}

fn render_bars(bars: &[HourlyBar], bar_max_height: f64) -> Vec<String> {
    bars.iter()
        .map(|bar| {
            format!(
                "{:>3}  {:>5} {:>6.1}  {:>4} {:>6.1}",
                bar.hour_label,
                bar.temperature_label,
                bar.temperature_bar_height(bar_max_height),
                bar.rain_label,
                bar.rain_bar_height(bar_max_height),
            )
        })
        .collect()
}

fn render_rows(rows: &[ForecastRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let colors: Vec<String> = row.range_colors.iter().map(|c| c.to_hex()).collect();
            format!(
                "{:<3}  {:>4} {:>4}  {:<24} {}",
                row.weekday,
                row.hi_label,
                row.lo_label,
                row.condition,
                colors.join(" ")
            )
        })
        .collect()
}

fn render_stops(stops: &[(f64, Rgb)]) -> Vec<String> {
    if stops.is_empty() {
        return vec!["(no bands in range)".to_string()];
    }
    stops
        .iter()
        .map(|(offset, color)| format!("{:.3}  {}", offset, color))
        .collect()
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn run(cli: Cli, config: &Config) -> Result<(), AppError> {
    let units = cli.units.unwrap_or(config.weather.units);
    let fallback_tz = config.display.fallback_offset();

    match cli.command {
        Command::Current { snapshot: path } => {
            let snapshot = load_snapshot(&path)?;
            let current = CurrentConditions::from_snapshot(&snapshot, units)
                .ok_or(InputError::MissingCurrent { path })?;
            tracing::info!("Built current conditions ({}, day: {})", units, current.is_day);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&current)?);
            } else {
                print_lines(render_current(&config.weather.location_title, &current));
            }
        }
        Command::Hourly { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            let tz = snapshot.offset_or(fallback_tz);
            let bars = normalize_hourly(&snapshot.hourly, units, &tz);
            tracing::info!("Built {} hourly bars ({})", bars.len(), units);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&bars)?);
            } else {
                print_lines(render_bars(&bars, config.display.bar_max_height));
            }
        }
        Command::Daily { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            let tz = snapshot.offset_or(fallback_tz);
            let rows = forecast_rows(&snapshot.daily, units, &tz);
            tracing::info!("Built {} forecast rows ({})", rows.len(), units);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_lines(render_rows(&rows));
            }
        }
        Command::Range { hi, lo } => {
            let range = TemperatureRange::new(hi, lo, units);
            let stops = range.gradient_stops();
            if stops.is_empty() {
                tracing::warn!("No temperature bands between {} and {}", lo, hi);
            }
            if cli.json {
                let stops: Vec<(f64, String)> =
                    stops.iter().map(|(o, c)| (*o, c.to_hex())).collect();
                println!("{}", serde_json::to_string_pretty(&stops)?);
            } else {
                print_lines(render_stops(&stops));
            }
        }
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    fairsky_core::init()?;

    let cli = Cli::parse();
    let outcome = Config::load_validated()
        .map_err(AppError::from)
        .and_then(|(config, _)| run(cli, &config));

    if let Err(e) = outcome {
        tracing::error!("{}", e);
        eprintln!("{}", e.user_message());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairsky_weather::format::utc;
    use fairsky_weather::HourlySample;

    #[test]
    fn test_parse_range_with_negative_temps() {
        let cli = Cli::try_parse_from([
            "fairsky", "range", "--hi", "0", "--lo", "-20", "--units", "metric",
        ])
        .unwrap();
        assert_eq!(cli.units, Some(UnitSystem::Metric));
        assert!(matches!(cli.command, Command::Range { hi, lo } if hi == 0.0 && lo == -20.0));
    }

    #[test]
    fn test_parse_rejects_unknown_units() {
        assert!(Cli::try_parse_from(["fairsky", "--units", "kelvin", "hourly", "x.json"]).is_err());
    }

    #[test]
    fn test_load_snapshot_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_snapshot(&missing), Err(InputError::Read { .. })));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert!(matches!(load_snapshot(&bad), Err(InputError::Malformed { .. })));

        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"{"hourly": [{"dt": 0, "temp": 50}]}"#).unwrap();
        assert_eq!(load_snapshot(&good).unwrap().hourly.len(), 1);
    }

    #[test]
    fn test_render_bars() {
        let samples = vec![
            HourlySample::new(0.0, 50.0).with_rain(0.5),
            HourlySample::new(3600.0, 70.0),
        ];
        let bars = normalize_hourly(&samples, UnitSystem::Imperial, &utc());
        let lines = render_bars(&bars, 90.0);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("12a"));
        assert!(lines[0].contains("50°"));
        assert!(lines[0].contains("50%"));
        assert!(lines[1].contains("1a"));
    }

    #[test]
    fn test_parse_current() {
        let cli = Cli::try_parse_from(["fairsky", "current", "today.json", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Command::Current { ref snapshot } if snapshot == Path::new("today.json")
        ));
    }

    #[test]
    fn test_render_current() {
        let snapshot: ForecastSnapshot = serde_json::from_value(serde_json::json!({
            "timezone_offset": 0,
            "current": {
                "dt": 1_602_946_800.0,
                "sunrise": 1_602_936_000.0,
                "sunset": 1_602_975_600.0,
                "temp": 61.6,
                "humidity": 72.0,
                "wind_speed": 6.4,
                "wind_deg": 45.0,
                "weather": [{ "id": 800, "description": "clear sky" }]
            }
        }))
        .unwrap();
        let current = CurrentConditions::from_snapshot(&snapshot, UnitSystem::Imperial).unwrap();
        let lines = render_current("Seattle", &current);
        assert_eq!(lines[0], "Seattle");
        assert!(lines[1].starts_with("62°  clear sky"));
        assert!(lines[1].contains("Clear-Day"));
        assert!(lines.contains(&"Pressure    ? mb".to_string()));
        assert!(lines.contains(&"Wind        6 mph NE".to_string()));
        assert!(lines.contains(&"Sunrise     12:00 PM".to_string()));
    }

    #[test]
    fn test_current_without_section_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hourly_only.json");
        std::fs::write(&path, r#"{"hourly": []}"#).unwrap();

        let cli = Cli::try_parse_from(["fairsky", "current", path.to_str().unwrap()]).unwrap();
        let err = run(cli, &Config::default()).unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::MissingCurrent { .. })));
        assert_eq!(err.user_message(), "The forecast file has no current conditions.");
    }

    #[test]
    fn test_render_empty_stops() {
        assert_eq!(render_stops(&[]), vec!["(no bands in range)".to_string()]);
    }
}
