//! Day-of-year wrapping and the shared orbital phase.

use std::f64::consts::TAU;

/// Wrap a day value into `[0, year_days)`.
///
/// Negative days wrap forward, so `-1` becomes `year_days - 1`.
pub fn wrap_day(day: f64, year_days: f64) -> f64 {
    let r = day.rem_euclid(year_days);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if r >= year_days { 0.0 } else { r }
}

/// Orbital anomaly in radians for a day, range [0, 2pi).
///
/// Both the orbit and the solar calculator derive their phase here, which
/// keeps the two views of the diagram locked together.
pub fn orbital_angle(day: f64, year_days: f64) -> f64 {
    let angle = (wrap_day(day, year_days) / year_days) * TAU;
    if angle >= TAU { 0.0 } else { angle }
}

/// Round to `places` decimal digits, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
