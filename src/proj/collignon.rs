//! Collignon projection (equal-area, triangular).
//!
//! forward: α = √(1 - sin φ), x = (2/√π)·λ·α, y = √π·(1 - α)
//! inverse: t = (y/√π - 1)², λ = x·√(π/t)/2, φ = asin(1 - t)
//!
//! The north pole maps to the apex (0, √π); the south pole row is y = √π·(1 - √2).

use std::f64::consts::PI;

use crate::error::ProjError;
use crate::proj::common::{adjust_lon, asin_clamped, asqrt};
use crate::proj::Projection;

/// Raw forward on the unit sphere, without central meridian handling.
#[inline]
pub fn collignon_raw(lon: f64, lat: f64) -> (f64, f64) {
    let sqrt_pi = PI.sqrt();
    let alpha = asqrt(1.0 - lat.sin());
    (2.0 / sqrt_pi * lon * alpha, sqrt_pi * (1.0 - alpha))
}

pub struct Collignon {
    lon0: f64,
}

impl Collignon {
    pub fn new(lon0: f64) -> Self {
        Self { lon0 }
    }
}

impl Projection for Collignon {
    fn lon0(&self) -> f64 {
        self.lon0
    }

    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok(collignon_raw(lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let sqrt_pi = PI.sqrt();
        let a = y / sqrt_pi - 1.0;
        let t = a * a;
        // t = 0 is the apex, where every meridian meets
        let lon = if t > 0.0 { x * (PI / t).sqrt() / 2.0 } else { 0.0 };
        let lat = asin_clamped(1.0 - t);
        Ok((adjust_lon(self.lon0 + lon), lat))
    }

    fn name(&self) -> &'static str {
        "collignon"
    }
}
