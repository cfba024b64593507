//! Lambert cylindrical equal-area projection with a standard parallel.
//!
//! forward: x = (λ - λ₀)·cos(φs), y = sin(φ) / cos(φs)
//! inverse: λ = λ₀ + x / cos(φs), φ = asin(y·cos(φs))

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::{adjust_lon, asin_clamped};
use crate::proj::Projection;

/// Raw forward on the unit sphere, without central meridian handling.
///
/// Shared with the lobed projection, which uses it for its equatorial band.
#[inline]
pub fn cea_raw(cos_parallel: f64, lon: f64, lat: f64) -> (f64, f64) {
    (lon * cos_parallel, lat.sin() / cos_parallel)
}

pub struct CylindricalEqualArea {
    lon0: f64,
    cos_parallel: f64,
}

impl CylindricalEqualArea {
    /// `parallel` is the standard parallel φs in radians, `|φs| < π/2`.
    pub fn new(lon0: f64, parallel: f64) -> Result<Self, ProjError> {
        if !parallel.is_finite() || parallel.abs() >= FRAC_PI_2 {
            return Err(ProjError::InvalidParameter(format!(
                "standard parallel must be within (-90°, 90°), got {}°",
                parallel.to_degrees()
            )));
        }
        if !lon0.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "central meridian must be finite, got {lon0}"
            )));
        }
        Ok(Self {
            lon0,
            cos_parallel: parallel.cos(),
        })
    }

    pub fn cos_parallel(&self) -> f64 {
        self.cos_parallel
    }
}

impl Projection for CylindricalEqualArea {
    fn lon0(&self) -> f64 {
        self.lon0
    }

    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok(cea_raw(self.cos_parallel, lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let lon = adjust_lon(self.lon0 + x / self.cos_parallel);
        let lat = asin_clamped(y * self.cos_parallel);
        Ok((lon, lat))
    }

    fn name(&self) -> &'static str {
        "cea"
    }
}
