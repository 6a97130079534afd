/// Scale maximum; some regions report higher values, which are capped
pub const UV_SCALE_MAX: f64 = 10.0;

/// Position of the UV index on its scale, `0.0..=1.0`. Zero at night.
pub fn uv_fraction(uvi: Option<f64>, is_day: bool) -> f64 {
    if !is_day {
        return 0.0;
    }
    uvi.filter(|u| u.is_finite())
        .map(|u| u.clamp(0.0, UV_SCALE_MAX) / UV_SCALE_MAX)
        .unwrap_or(0.0)
}

/// Horizontal offset of the marker from the center of a scale `width` wide.
/// Night pins it to the low end; a missing daytime reading leaves it centered.
pub fn uv_marker_offset(uvi: Option<f64>, is_day: bool, width: f64) -> f64 {
    if is_day && !uvi.is_some_and(f64::is_finite) {
        return 0.0;
    }
    width * uv_fraction(uvi, is_day) - width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        assert_eq!(uv_fraction(Some(5.0), true), 0.5);
        assert_eq!(uv_fraction(Some(13.0), true), 1.0);
        assert_eq!(uv_fraction(Some(-1.0), true), 0.0);
        assert_eq!(uv_fraction(None, true), 0.0);
    }

    #[test]
    fn test_night_is_zero() {
        assert_eq!(uv_fraction(Some(8.0), false), 0.0);
    }

    #[test]
    fn test_marker_offset() {
        assert_eq!(uv_marker_offset(Some(8.0), false, 100.0), -50.0);
        assert_eq!(uv_marker_offset(Some(5.0), true, 100.0), 0.0);
        assert_eq!(uv_marker_offset(Some(10.0), true, 100.0), 50.0);
    }

    #[test]
    fn test_marker_centered_without_daytime_reading() {
        assert_eq!(uv_marker_offset(None, true, 100.0), 0.0);
        assert_eq!(uv_marker_offset(Some(f64::NAN), true, 100.0), 0.0);
        assert_eq!(uv_marker_offset(None, false, 100.0), -50.0);
        assert_eq!(uv_marker_offset(Some(0.0), true, 100.0), -50.0);
    }
}
