//! Eckert IV pseudocylindrical equal-area projection.
//!
//! θ solves θ + sin θ·cos θ + 2 sin θ = (2 + π/2)·sin φ (Newton iteration), then
//!   x = 2/√(π(4+π))·λ·(1 + cos θ), y = 2·√(π/(4+π))·sin θ

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::ProjError;
use crate::proj::common::{adjust_lon, asin_clamped};
use crate::proj::Projection;

// The pole is a double root, where Newton only halves the error per step
const MAX_ITER: usize = 60;
const TOLERANCE: f64 = 1e-12;

pub struct EckertIV {
    lon0: f64,
}

impl EckertIV {
    pub fn new(lon0: f64) -> Self {
        Self { lon0 }
    }
}

fn cx() -> f64 {
    2.0 / (PI * (4.0 + PI)).sqrt()
}

fn cy() -> f64 {
    2.0 * (PI / (4.0 + PI)).sqrt()
}

impl Projection for EckertIV {
    fn lon0(&self) -> f64 {
        self.lon0
    }

    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let sin_lat = lat.sin();
        if sin_lat.abs() >= 1.0 {
            // Poles: θ = ±π/2, where the Newton derivative vanishes
            return Ok((cx() * lon, cy() * sin_lat.signum()));
        }
        let k = (2.0 + FRAC_PI_2) * sin_lat;
        let mut theta = lat / 2.0;
        for _ in 0..MAX_ITER {
            let cos_t = theta.cos();
            let slope = 2.0 * cos_t * (1.0 + cos_t);
            if slope == 0.0 {
                break;
            }
            let delta = (theta + theta.sin() * (cos_t + 2.0) - k) / slope;
            theta -= delta;
            if delta.abs() <= TOLERANCE {
                break;
            }
        }
        Ok((cx() * lon * (1.0 + theta.cos()), cy() * theta.sin()))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let a = y / cy();
        let theta = asin_clamped(a);
        let c = theta.cos();
        let lon = x / (cx() * (1.0 + c));
        let lat = asin_clamped((theta + a * (c + 2.0)) / (2.0 + FRAC_PI_2));
        Ok((adjust_lon(self.lon0 + lon), lat))
    }

    fn name(&self) -> &'static str {
        "eckert4"
    }
}
