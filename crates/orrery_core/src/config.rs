//! Immutable orbit, observer and plot parameters.
//!
//! Both calculators take an [`OrreryConfig`] explicitly instead of reading
//! module-level constants, so alternate latitudes and tilts can be tested
//! side by side.

use crate::error::OrreryError;

/// Days in the simulated year.
pub const DEFAULT_YEAR_DAYS: f64 = 365.0;
/// Longest accepted year, in days.
pub const MAX_YEAR_DAYS: f64 = 10_000.0;
/// Axial tilt in degrees.
pub const DEFAULT_TILT_DEG: f64 = 23.5;
/// Observer latitude in degrees, north positive.
pub const DEFAULT_LATITUDE_DEG: f64 = 45.0;
/// Orbit semi-major axis in diagram units.
pub const DEFAULT_SEMI_MAJOR_AXIS: f64 = 160.0;
/// Earth's orbital eccentricity.
pub const DEFAULT_ECCENTRICITY: f64 = 0.0167;

/// Orbit and observer parameters, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrreryConfig {
    /// Length of the year in days. Range: (0, [`MAX_YEAR_DAYS`]].
    pub year_days: f64,
    /// Axial tilt in degrees. Range: [0, 90].
    pub tilt_deg: f64,
    /// Observer latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Semi-major axis of the orbit ellipse, in diagram units.
    pub semi_major_axis: f64,
    /// Orbital eccentricity. Range: [0, 1).
    pub eccentricity: f64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            year_days: DEFAULT_YEAR_DAYS,
            tilt_deg: DEFAULT_TILT_DEG,
            latitude_deg: DEFAULT_LATITUDE_DEG,
            semi_major_axis: DEFAULT_SEMI_MAJOR_AXIS,
            eccentricity: DEFAULT_ECCENTRICITY,
        }
    }
}

impl OrreryConfig {
    /// Build a validated config.
    pub fn new(
        year_days: f64,
        tilt_deg: f64,
        latitude_deg: f64,
        semi_major_axis: f64,
        eccentricity: f64,
    ) -> Result<Self, OrreryError> {
        let config = Self {
            year_days,
            tilt_deg,
            latitude_deg,
            semi_major_axis,
            eccentricity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default orbit seen from a different latitude.
    pub fn with_latitude(latitude_deg: f64) -> Result<Self, OrreryError> {
        let config = Self {
            latitude_deg,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its physical range.
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !self.year_days.is_finite() || self.year_days <= 0.0 {
            return Err(OrreryError::InvalidConfig("year_days must be positive"));
        }
        if self.year_days > MAX_YEAR_DAYS {
            return Err(OrreryError::InvalidConfig(
                "year_days must not exceed 10000",
            ));
        }
        if !(0.0..=90.0).contains(&self.tilt_deg) {
            return Err(OrreryError::InvalidConfig("tilt_deg must be within [0, 90]"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(OrreryError::InvalidConfig(
                "latitude_deg must be within [-90, 90]",
            ));
        }
        if !self.semi_major_axis.is_finite() || self.semi_major_axis <= 0.0 {
            return Err(OrreryError::InvalidConfig(
                "semi_major_axis must be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrreryError::InvalidConfig(
                "eccentricity must be within [0, 1)",
            ));
        }
        Ok(())
    }

    /// Semi-minor axis `b = a·sqrt(1 - e²)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Closest approach `a(1 - e)`.
    pub fn perihelion_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance `a(1 + e)`.
    pub fn aphelion_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

/// Daylight chart geometry.
///
/// Hours map to `y = mid - hour * scale`, so with the defaults 0h sits at
/// y=150 and 24h at y=-90. Days map linearly onto `[0, width)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Chart width in pixels spanned by one year.
    pub width: f64,
    /// Vertical pixel position of hour zero.
    pub mid: f64,
    /// Pixels per hour.
    pub scale: f64,
    /// Chart height in pixels.
    pub height: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            mid: 150.0,
            scale: 10.0,
            height: 300.0,
        }
    }
}

impl PlotConfig {
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(OrreryError::InvalidPlot("width must be positive"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(OrreryError::InvalidPlot("scale must be positive"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(OrreryError::InvalidPlot("height must be positive"));
        }
        if !self.mid.is_finite() {
            return Err(OrreryError::InvalidPlot("mid must be finite"));
        }
        Ok(())
    }

    /// Horizontal pixel offset of a day.
    pub fn day_to_x(&self, day: f64, year_days: f64) -> f64 {
        (day / year_days) * self.width
    }

    /// Vertical pixel position of a clock hour.
    pub fn hour_to_y(&self, hour: f64) -> f64 {
        self.mid - hour * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(OrreryConfig::default().validate().is_ok());
        assert!(PlotConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_year_rejected() {
        let err = OrreryConfig::new(0.0, 23.5, 45.0, 160.0, 0.0167).unwrap_err();
        assert_eq!(err, OrreryError::InvalidConfig("year_days must be positive"));
    }

    #[test]
    fn nan_year_rejected() {
        assert!(OrreryConfig::new(f64::NAN, 23.5, 45.0, 160.0, 0.0167).is_err());
    }

    #[test]
    fn oversized_year_rejected() {
        let err = OrreryConfig::new(1e20, 23.5, 45.0, 160.0, 0.0167).unwrap_err();
        assert_eq!(err, OrreryError::InvalidConfig("year_days must not exceed 10000"));
        assert!(OrreryConfig::new(MAX_YEAR_DAYS, 23.5, 45.0, 160.0, 0.0167).is_ok());
    }

    #[test]
    fn parabolic_orbit_rejected() {
        assert!(OrreryConfig::new(365.0, 23.5, 45.0, 160.0, 1.0).is_err());
    }

    #[test]
    fn latitude_out_of_range() {
        assert!(OrreryConfig::with_latitude(91.0).is_err());
        assert!(OrreryConfig::with_latitude(-90.0).is_ok());
    }

    #[test]
    fn tilt_out_of_range() {
        assert!(OrreryConfig::new(365.0, -1.0, 45.0, 160.0, 0.0167).is_err());
    }

    #[test]
    fn axis_helpers() {
        let c = OrreryConfig::default();
        assert!((c.perihelion_distance() - 160.0 * 0.9833).abs() < 1e-9);
        assert!((c.aphelion_distance() - 160.0 * 1.0167).abs() < 1e-9);
        let b = c.semi_minor_axis();
        assert!(b < 160.0 && b > 159.9, "b = {b}");
    }

    #[test]
    fn plot_mapping() {
        let p = PlotConfig::default();
        assert!((p.day_to_x(182.5, 365.0) - 300.0).abs() < 1e-12);
        assert!((p.hour_to_y(12.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn plot_rejects_zero_scale() {
        let p = PlotConfig {
            scale: 0.0,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(OrreryError::InvalidPlot("scale must be positive")));
    }
}
