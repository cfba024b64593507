//! Spherical Mercator projection.
//!
//!   forward: x = λ - λ₀, y = ln(tan(π/4 + φ/2))
//!   inverse: λ = λ₀ + x, φ = 2·atan(exp(y)) - π/2

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::ProjError;
use crate::proj::common::adjust_lon;
use crate::proj::Projection;

/// Maximum latitude (≈85.0511°), where the world map becomes a square.
const MAX_LAT: f64 = 1.484_422_229_745_332_4; // atan(sinh(π)) in radians

pub struct Mercator {
    lon0: f64,
}

impl Mercator {
    pub fn new(lon0: f64) -> Self {
        Self { lon0 }
    }
}

impl Projection for Mercator {
    fn lon0(&self) -> f64 {
        self.lon0
    }

    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        // Clamp latitude to valid range
        let lat = lat.clamp(-MAX_LAT, MAX_LAT);
        let y = (FRAC_PI_4 + lat / 2.0).tan().ln();
        Ok((lon, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let lon = adjust_lon(self.lon0 + x);
        let lat = 2.0 * y.exp().atan() - FRAC_PI_2;
        Ok((lon, lat))
    }

    fn name(&self) -> &'static str {
        "mercator"
    }
}
