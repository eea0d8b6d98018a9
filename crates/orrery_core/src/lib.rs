//! Orbital position and daylight engine for a seasons diagram.
//!
//! This crate provides:
//! - Earth's position on a fixed elliptical orbit for a fractional day of year
//! - Solar declination and sunrise/sunset hours at a single latitude
//! - A year-long daylight curve sampled for plotting, with a regenerating cache
//! - A play/pause animation driver that feeds the calculators once per frame
//! - Calendar, clock and chart-grid helpers for a rendering front end
//!
//! Every calculator is a pure function of its inputs and an explicit
//! [`OrreryConfig`]; there is no global state.
//!
//! ```
//! use orrery_core::{OrreryConfig, compute_position, solar_state};
//!
//! let config = OrreryConfig::default();
//! let orbit = compute_position(91.25, &config);
//! let sun = solar_state(91.25, &config);
//! assert_eq!(orbit.angle_rad, sun.angle_rad);
//! assert!((sun.sunrise_hour - 6.0).abs() < 1e-9);
//! ```

pub mod angle;
pub mod config;
pub mod curve;
pub mod display;
pub mod driver;
pub mod error;
pub mod orbit;
pub mod solar;

pub use angle::{orbital_angle, round_to, wrap_day};
pub use config::{
    DEFAULT_ECCENTRICITY, DEFAULT_LATITUDE_DEG, DEFAULT_SEMI_MAJOR_AXIS, DEFAULT_TILT_DEG,
    DEFAULT_YEAR_DAYS, MAX_YEAR_DAYS, OrreryConfig, PlotConfig,
};
pub use curve::{
    DEFAULT_STEP_DAYS, DaylightCurveCache, DaylightSample, PlotMarker, plot_marker,
    sample_count, sample_year, sunrise_polyline, sunset_polyline,
};
pub use display::{
    DialAngles, GridLine, HOUR_GRID_PITCH_PX, UNKNOWN_DATE_LABEL, calendar_date, calendar_label,
    dial_angle_deg, format_clock_hour, hour_gridlines, month_gridlines,
};
pub use driver::{AnimationDriver, DEFAULT_DAY_STEP, Frame};
pub use error::OrreryError;
pub use orbit::{OrbitalState, compute_position, orbital_radius};
pub use solar::{
    HOUR_PRECISION, SolarState, compute_solar_time, cos_hour_angle, declination_deg, solar_state,
};
