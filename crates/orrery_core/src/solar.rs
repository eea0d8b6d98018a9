//! Solar declination and sunrise/sunset clock hours.
//!
//! Uses the sunrise equation `cos(H) = -tan(phi)·tan(delta)` with a
//! sinusoidal declination model. Refraction and the solar disc are
//! ignored, so sunrise and sunset are symmetric around 12:00.
//!
//! When `|cos(H)| > 1` the value is clamped: the day length saturates at
//! 0 or 24 hours and no separate polar day/night signal is produced.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::angle::{orbital_angle, round_to};
use crate::config::OrreryConfig;

/// Decimal places kept on reported clock hours.
pub const HOUR_PRECISION: i32 = 2;

/// Solar geometry and day length for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarState {
    /// Orbital anomaly in radians, identical to [`crate::OrbitalState::angle_rad`].
    pub angle_rad: f64,
    /// Declination of the Sun in degrees, bounded by the tilt.
    pub declination_deg: f64,
    /// Half-day hour angle in radians after clamping, range [0, pi].
    pub hour_angle_rad: f64,
    /// Daylight duration in hours, 2 decimal places.
    pub day_length_hours: f64,
    /// Local sunrise in decimal hours, 2 decimal places.
    pub sunrise_hour: f64,
    /// Local sunset in decimal hours, 2 decimal places.
    pub sunset_hour: f64,
}

impl SolarState {
    /// Unrounded day length derived from the hour angle.
    pub fn raw_day_length_hours(&self) -> f64 {
        self.hour_angle_rad * 24.0 / PI
    }
}

/// Declination in degrees for an orbital angle.
///
/// `delta = tilt · sin(angle - pi/2)`, so the minimum falls on day 0 and
/// zero crossings at a quarter and three quarters of the year.
pub fn declination_deg(angle_rad: f64, tilt_deg: f64) -> f64 {
    tilt_deg * (angle_rad - FRAC_PI_2).sin()
}

/// Cosine of the sunset hour angle, before clamping.
pub fn cos_hour_angle(latitude_deg: f64, declination_deg: f64) -> f64 {
    -latitude_deg.to_radians().tan() * declination_deg.to_radians().tan()
}

/// Compute declination and sunrise/sunset for a day at a latitude.
///
/// Sunrise is rounded to [`HOUR_PRECISION`] places and sunset is its
/// mirror around noon, rounded again to strip binary noise, so
/// `sunrise + sunset == 24` survives rounding.
pub fn compute_solar_time(
    day: f64,
    latitude_deg: f64,
    tilt_deg: f64,
    year_days: f64,
) -> SolarState {
    let angle_rad = orbital_angle(day, year_days);
    let declination_deg = declination_deg(angle_rad, tilt_deg);

    let cos_h = cos_hour_angle(latitude_deg, declination_deg).clamp(-1.0, 1.0);
    let hour_angle_rad = cos_h.acos();
    let raw_day_length = hour_angle_rad * 24.0 / PI;

    // adding 0.0 turns a rounded -0.0 into 0.0
    let sunrise_hour = round_to(12.0 - raw_day_length / 2.0, HOUR_PRECISION) + 0.0;
    let sunset_hour = round_to(24.0 - sunrise_hour, HOUR_PRECISION);

    SolarState {
        angle_rad,
        declination_deg,
        hour_angle_rad,
        day_length_hours: round_to(sunset_hour - sunrise_hour, HOUR_PRECISION),
        sunrise_hour,
        sunset_hour,
    }
}

/// [`compute_solar_time`] with latitude, tilt and year length from a config.
pub fn solar_state(day: f64, config: &OrreryConfig) -> SolarState {
    compute_solar_time(day, config.latitude_deg, config.tilt_deg, config.year_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winter_solstice_on_day_zero() {
        let s = compute_solar_time(0.0, 45.0, 23.5, 365.0);
        assert!((s.declination_deg + 23.5).abs() < 1e-12);
        assert!(s.day_length_hours < 12.0);
    }

    #[test]
    fn equinox_declination_zero() {
        let s = compute_solar_time(91.25, 45.0, 23.5, 365.0);
        assert!(s.declination_deg.abs() < 1e-9, "dec = {}", s.declination_deg);
        assert!((s.sunrise_hour - 6.0).abs() < 1e-9);
        assert!((s.sunset_hour - 18.0).abs() < 1e-9);
    }

    #[test]
    fn summer_solstice_long_day() {
        let s = compute_solar_time(182.5, 45.0, 23.5, 365.0);
        assert!((s.declination_deg - 23.5).abs() < 1e-9);
        // tan(45)·tan(23.5) = 0.4348 → H = 115.77 deg → 15.44 h
        assert!(
            (s.day_length_hours - 15.44).abs() < 0.011,
            "day length = {}",
            s.day_length_hours
        );
    }

    #[test]
    fn equator_always_twelve_hours() {
        for day in [0.0, 50.0, 182.5, 300.0] {
            let s = compute_solar_time(day, 0.0, 23.5, 365.0);
            assert!((s.day_length_hours - 12.0).abs() < 1e-9, "day {day}");
        }
    }

    #[test]
    fn two_decimal_places() {
        let s = compute_solar_time(17.3, 45.0, 23.5, 365.0);
        let scaled = s.sunrise_hour * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "sunrise = {}", s.sunrise_hour);
    }

    #[test]
    fn every_reported_hour_is_two_decimal() {
        let mut day = 0.0;
        while day < 365.0 {
            let s = compute_solar_time(day, 45.0, 23.5, 365.0);
            for v in [s.sunrise_hour, s.sunset_hour, s.day_length_hours] {
                assert_eq!(v, round_to(v, HOUR_PRECISION), "day {day}: {v}");
            }
            assert!((s.sunrise_hour + s.sunset_hour - 24.0).abs() < 1e-9, "day {day}");
            day += 0.7;
        }
    }

    #[test]
    fn polar_night_saturates() {
        let s = compute_solar_time(0.0, 80.0, 23.5, 365.0);
        assert_eq!(s.hour_angle_rad, 0.0);
        assert_eq!(s.day_length_hours, 0.0);
        assert_eq!(s.sunrise_hour, 12.0);
    }

    #[test]
    fn midnight_sun_saturates() {
        let s = compute_solar_time(182.5, 80.0, 23.5, 365.0);
        assert_eq!(s.sunrise_hour, 0.0);
        assert_eq!(s.sunset_hour, 24.0);
        assert_eq!(s.day_length_hours, 24.0);
    }

    #[test]
    fn unclamped_cosine_exceeds_one_at_high_latitude() {
        let c = cos_hour_angle(80.0, -23.5);
        assert!(c > 1.0, "cos_h = {c}");
    }

    #[test]
    fn config_wrapper_matches() {
        let cfg = OrreryConfig::default();
        assert_eq!(solar_state(42.0, &cfg), compute_solar_time(42.0, 45.0, 23.5, 365.0));
    }

    #[test]
    fn southern_hemisphere_mirrors() {
        let n = compute_solar_time(10.0, 45.0, 23.5, 365.0);
        let s = compute_solar_time(10.0, -45.0, 23.5, 365.0);
        assert!((n.raw_day_length_hours() + s.raw_day_length_hours() - 24.0).abs() < 1e-9);
    }
}
