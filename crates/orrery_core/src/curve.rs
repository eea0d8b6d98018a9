//! Year-long daylight curve sampled at a fixed day step.
//!
//! Samples are generated in ascending day order and are meant to be drawn
//! as two connected polylines (sunrise and sunset), so the order of the
//! returned vector is significant.

use crate::config::{OrreryConfig, PlotConfig};
use crate::error::OrreryError;
use crate::solar::{SolarState, solar_state};

/// Day step used by the reference chart.
pub const DEFAULT_STEP_DAYS: u32 = 5;

/// One point of the daylight chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightSample {
    /// Day of year this sample was taken at.
    pub day: f64,
    /// Horizontal pixel offset of the day.
    pub day_offset_px: f64,
    /// Vertical pixel position of sunrise.
    pub sunrise_y: f64,
    /// Vertical pixel position of sunset.
    pub sunset_y: f64,
}

impl DaylightSample {
    fn from_solar(day: f64, solar: &SolarState, config: &OrreryConfig, plot: &PlotConfig) -> Self {
        Self {
            day,
            day_offset_px: plot.day_to_x(day, config.year_days),
            sunrise_y: plot.hour_to_y(solar.sunrise_hour),
            sunset_y: plot.hour_to_y(solar.sunset_hour),
        }
    }
}

/// Number of samples [`sample_year`] produces for a step.
///
/// Counts `day = 0, step, 2·step, ...` while `day < year_days`.
pub fn sample_count(step_days: u32, year_days: f64) -> usize {
    if step_days == 0 {
        return 0;
    }
    (year_days / step_days as f64).ceil() as usize
}

/// Sample the daylight curve across one year.
///
/// Returns one [`DaylightSample`] per `step_days`, ascending by day.
pub fn sample_year(
    step_days: u32,
    config: &OrreryConfig,
    plot: &PlotConfig,
) -> Result<Vec<DaylightSample>, OrreryError> {
    if step_days == 0 {
        return Err(OrreryError::InvalidStep);
    }
    config.validate()?;
    plot.validate()?;

    let step = step_days as f64;
    let mut samples = Vec::with_capacity(sample_count(step_days, config.year_days));
    let mut i: u32 = 0;
    loop {
        let day = i as f64 * step;
        if day >= config.year_days {
            break;
        }
        let solar = solar_state(day, config);
        samples.push(DaylightSample::from_solar(day, &solar, config, plot));
        i += 1;
    }
    Ok(samples)
}

/// Sunrise polyline as `(x, y)` pairs.
pub fn sunrise_polyline(samples: &[DaylightSample]) -> Vec<(f64, f64)> {
    samples.iter().map(|s| (s.day_offset_px, s.sunrise_y)).collect()
}

/// Sunset polyline as `(x, y)` pairs.
pub fn sunset_polyline(samples: &[DaylightSample]) -> Vec<(f64, f64)> {
    samples.iter().map(|s| (s.day_offset_px, s.sunset_y)).collect()
}

/// Current-day marker on the daylight chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMarker {
    /// Horizontal pixel offset of the vertical day line.
    pub x: f64,
    /// Vertical pixel position of the sunrise dot.
    pub sunrise_y: f64,
    /// Vertical pixel position of the sunset dot.
    pub sunset_y: f64,
}

/// Marker position for a (fractional) day.
///
/// The day is not wrapped here; callers pass the driver's current day,
/// which is already in range.
pub fn plot_marker(day: f64, config: &OrreryConfig, plot: &PlotConfig) -> PlotMarker {
    let solar = solar_state(day, config);
    PlotMarker {
        x: plot.day_to_x(day, config.year_days),
        sunrise_y: plot.hour_to_y(solar.sunrise_hour),
        sunset_y: plot.hour_to_y(solar.sunset_hour),
    }
}

/// Cached daylight curve, regenerated whenever its inputs change.
///
/// The curve is a pure function of config, plot geometry and step, so one
/// generation per distinct input set is enough for any number of frames.
#[derive(Debug, Clone, Default)]
pub struct DaylightCurveCache {
    key: Option<(OrreryConfig, PlotConfig, u32)>,
    samples: Vec<DaylightSample>,
    generations: usize,
}

impl DaylightCurveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached curve, sampling again if any input changed.
    pub fn get_or_generate(
        &mut self,
        step_days: u32,
        config: &OrreryConfig,
        plot: &PlotConfig,
    ) -> Result<&[DaylightSample], OrreryError> {
        let key = (*config, *plot, step_days);
        if self.key != Some(key) {
            let samples = sample_year(step_days, config, plot)?;
            self.generations += 1;
            log::debug!(
                "daylight curve regenerated: {} samples, step {step_days} d, lat {:.2}, tilt {:.2} (generation {})",
                samples.len(),
                config.latitude_deg,
                config.tilt_deg,
                self.generations
            );
            self.samples = samples;
            self.key = Some(key);
        }
        Ok(&self.samples)
    }

    /// Drop the cached curve.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.samples.clear();
    }

    /// How many times the curve has been sampled.
    pub fn generations(&self) -> usize {
        self.generations
    }
}
