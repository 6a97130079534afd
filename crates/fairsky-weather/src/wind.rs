//! Wind speed and direction labels.
//!
//! The direction arrow on screen is rotated by `-direction`, so the compass
//! sectors here follow that on-screen convention rather than a true bearing.

use crate::types::UnitSystem;

pub fn compass_label(direction_degrees: Option<f64>) -> &'static str {
    let Some(direction) = direction_degrees else {
        return "";
    };
    match direction {
        d if (30.0..60.0).contains(&d) => "NE",
        d if (60.0..120.0).contains(&d) => "N",
        d if (120.0..150.0).contains(&d) => "NW",
        d if (150.0..210.0).contains(&d) => "W",
        d if (210.0..240.0).contains(&d) => "SW",
        d if (240.0..300.0).contains(&d) => "S",
        d if (300.0..330.0).contains(&d) => "SE",
        _ => "E",
    }
}

/// e.g. `6 mph`
pub fn speed_label(speed: Option<f64>, units: UnitSystem) -> String {
    speed
        .map(|s| format!("{:.0} {}", s, units.speed_unit()))
        .unwrap_or_default()
}

pub fn arrow_rotation_degrees(direction_degrees: Option<f64>) -> f64 {
    0.0 - direction_degrees.unwrap_or(0.0)
}
