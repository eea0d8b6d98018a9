//! Earth's position on a fixed elliptical orbit.
//!
//! The Sun sits at the origin (one focus). Angle zero is perihelion and
//! falls on day 0; the "Jan 3" perihelion label drawn by the UI is not
//! phase-shifted to match.

use crate::angle::orbital_angle;
use crate::config::OrreryConfig;

/// Position on the orbit ellipse for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// X coordinate in diagram units, +x toward perihelion.
    pub x: f64,
    /// Y coordinate in diagram units.
    pub y: f64,
    /// Orbital anomaly in radians, range [0, 2pi).
    pub angle_rad: f64,
    /// Distance from the Sun in diagram units.
    pub radius: f64,
}

/// Heliocentric distance from the polar conic equation.
///
/// `r = a(1 - e²) / (1 + e·cos(angle))`
pub fn orbital_radius(angle_rad: f64, config: &OrreryConfig) -> f64 {
    let a = config.semi_major_axis;
    let e = config.eccentricity;
    a * (1.0 - e * e) / (1.0 + e * angle_rad.cos())
}

/// Compute Earth's orbit position for a (fractional) day of year.
pub fn compute_position(day: f64, config: &OrreryConfig) -> OrbitalState {
    let angle_rad = orbital_angle(day, config.year_days);
    let radius = orbital_radius(angle_rad, config);
    OrbitalState {
        x: radius * angle_rad.cos(),
        y: radius * angle_rad.sin(),
        angle_rad,
        radius,
    }
}
