//! Presentation helpers: calendar labels, clock strings, dial angles and
//! chart grid lines.
//!
//! Calendar mapping is approximate: day 0 is 1 January of a fixed leap
//! reference year, fractional days are truncated, and no timezone is
//! involved.

use crate::config::PlotConfig;
use crate::solar::SolarState;

/// Year that day 0 is anchored to when producing calendar labels.
pub const REFERENCE_YEAR: i32 = 2024;

/// Three-letter English month abbreviations.
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_400_YEARS: i64 = 146_097;

/// Label used for days that cannot be mapped to a date.
pub const UNKNOWN_DATE_LABEL: &str = "--";

/// Pixels between horizontal hour lines on the daylight chart.
pub const HOUR_GRID_PITCH_PX: f64 = 12.0;

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) { 366 } else { 365 }
}

fn days_in_month(year: i64, month: u32) -> i64 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Calendar `(year, month, day)` for a day offset from 1 January of
/// [`REFERENCE_YEAR`]. Fractional days are truncated toward minus infinity.
///
/// Returns `None` for non-finite days. Whole 400-year cycles are skipped
/// arithmetically, so the per-year walk covers at most 400 years.
pub fn calendar_date(day: f64) -> Option<(i64, u32, u32)> {
    if !day.is_finite() {
        return None;
    }
    let offset = day.floor() as i64;
    let cycles = offset.div_euclid(DAYS_PER_400_YEARS);
    let mut remaining = offset.rem_euclid(DAYS_PER_400_YEARS);
    let mut year = i64::from(REFERENCE_YEAR).saturating_add(cycles.saturating_mul(400));
    while remaining >= days_in_year(year) {
        remaining -= days_in_year(year);
        year += 1;
    }
    let mut month = 1;
    while remaining >= days_in_month(year, month) {
        remaining -= days_in_month(year, month);
        month += 1;
    }
    Some((year, month, remaining as u32 + 1))
}

/// Short label such as `"Mar 21"` for a day of year, or
/// [`UNKNOWN_DATE_LABEL`] for a non-finite day.
pub fn calendar_label(day: f64) -> String {
    match calendar_date(day) {
        Some((_, month, dom)) => format!("{} {dom}", MONTH_ABBR[(month - 1) as usize]),
        None => UNKNOWN_DATE_LABEL.to_string(),
    }
}

/// Format decimal hours as `H:MM`.
///
/// Minutes are rounded to the nearest whole minute and carry into the
/// hour, so `5.999` renders as `6:00`.
pub fn format_clock_hour(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let h = total_minutes.div_euclid(60);
    let m = total_minutes.rem_euclid(60);
    format!("{h}:{m:02}")
}

/// Angle on a 24-hour dial, in degrees clockwise from midnight.
pub fn dial_angle_deg(hour: f64) -> f64 {
    hour / 24.0 * 360.0
}

/// Sunrise and sunset positions on a 24-hour dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialAngles {
    pub sunrise_deg: f64,
    pub sunset_deg: f64,
}

impl DialAngles {
    pub fn from_solar(solar: &SolarState) -> Self {
        Self {
            sunrise_deg: dial_angle_deg(solar.sunrise_hour),
            sunset_deg: dial_angle_deg(solar.sunset_hour),
        }
    }
}

/// A labelled grid line on the daylight chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    /// Pixel offset along the axis the line is placed on.
    pub offset_px: f64,
    pub label: String,
}

/// Thirteen vertical month lines, first of each month from January
/// through the following January.
pub fn month_gridlines(plot: &PlotConfig) -> Vec<GridLine> {
    let spacing = plot.width / 12.0;
    (0..13)
        .map(|i| GridLine {
            offset_px: i as f64 * spacing,
            label: MONTH_ABBR[i % 12].to_string(),
        })
        .collect()
}

/// Twenty-five horizontal hour lines labelled `24:00` at the top down to
/// `0:00`, spaced [`HOUR_GRID_PITCH_PX`] apart. Lines past the chart
/// height are dropped.
pub fn hour_gridlines(plot: &PlotConfig) -> Vec<GridLine> {
    (0..25)
        .filter(|&i| i as f64 * HOUR_GRID_PITCH_PX <= plot.height)
        .map(|i| GridLine {
            offset_px: i as f64 * HOUR_GRID_PITCH_PX,
            label: format!("{}:00", 24 - i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::compute_solar_time;

    #[test]
    fn first_day_is_jan_1() {
        assert_eq!(calendar_label(0.0), "Jan 1");
        assert_eq!(calendar_label(0.9), "Jan 1");
    }

    #[test]
    fn leap_day() {
        assert_eq!(calendar_label(59.0), "Feb 29");
        assert_eq!(calendar_label(60.0), "Mar 1");
    }

    #[test]
    fn end_of_reference_year() {
        assert_eq!(calendar_date(365.0), Some((2024, 12, 31)));
        assert_eq!(calendar_date(366.0), Some((2025, 1, 1)));
    }

    #[test]
    fn negative_day_rolls_back() {
        assert_eq!(calendar_date(-1.0), Some((2023, 12, 31)));
    }

    #[test]
    fn whole_cycles_keep_the_date() {
        // 146_097 days is exactly 400 Gregorian years
        assert_eq!(calendar_date(146_097.0 + 59.0), Some((2424, 2, 29)));
        assert_eq!(calendar_date(-146_097.0), Some((1624, 1, 1)));
    }

    #[test]
    fn huge_day_returns_promptly() {
        let label = calendar_label(1e15);
        assert!(label.len() >= 5, "label = {label}");
        assert!(calendar_date(1e300).is_some());
        assert!(calendar_date(-1e300).is_some());
    }

    #[test]
    fn non_finite_day_has_fallback_label() {
        assert_eq!(calendar_date(f64::INFINITY), None);
        assert_eq!(calendar_date(f64::NAN), None);
        assert_eq!(calendar_label(f64::INFINITY), UNKNOWN_DATE_LABEL);
        assert_eq!(calendar_label(f64::NEG_INFINITY), UNKNOWN_DATE_LABEL);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock_hour(6.5), "6:30");
        assert_eq!(format_clock_hour(7.05), "7:03");
        assert_eq!(format_clock_hour(0.0), "0:00");
        assert_eq!(format_clock_hour(24.0), "24:00");
    }

    #[test]
    fn clock_minutes_carry() {
        assert_eq!(format_clock_hour(5.999), "6:00");
    }

    #[test]
    fn dial_angles_at_equinox() {
        let s = compute_solar_time(91.25, 45.0, 23.5, 365.0);
        let d = DialAngles::from_solar(&s);
        assert!((d.sunrise_deg - 90.0).abs() < 1e-9);
        assert!((d.sunset_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn month_grid() {
        let g = month_gridlines(&PlotConfig::default());
        assert_eq!(g.len(), 13);
        assert_eq!(g[1].offset_px, 50.0);
        assert_eq!(g[12].label, "Jan");
    }

    #[test]
    fn hour_grid() {
        let g = hour_gridlines(&PlotConfig::default());
        assert_eq!(g.len(), 25);
        assert_eq!(g[0].label, "24:00");
        assert_eq!(g[24].label, "0:00");
        assert_eq!(g[1].offset_px, 12.0);
        assert_eq!(g[24].offset_px, 288.0);
    }
}
