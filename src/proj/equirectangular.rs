//! Equirectangular (Plate Carrée) projection on the unit sphere.
//!
//! forward: x = λ - λ₀, y = φ
//! inverse: λ = λ₀ + x, φ = y

use crate::error::ProjError;
use crate::proj::common::adjust_lon;
use crate::proj::Projection;

pub struct Equirectangular {
    lon0: f64,
}

impl Equirectangular {
    pub fn new(lon0: f64) -> Self {
        Self { lon0 }
    }
}

impl Projection for Equirectangular {
    fn lon0(&self) -> f64 {
        self.lon0
    }

    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok((lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        Ok((adjust_lon(self.lon0 + x), y))
    }

    fn name(&self) -> &'static str {
        "equirectangular"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_roundtrip() {
        let proj = Equirectangular::new(0.0);
        let lon = 10.0_f64.to_radians();
        let lat = 45.0_f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon2, lon, epsilon = 1e-12);
        assert_relative_eq!(lat2, lat, epsilon = 1e-12);
    }

    #[test]
    fn test_dateline() {
        let proj = Equirectangular::new(0.0);
        let (xe, _) = proj.forward(PI, 0.0).unwrap();
        let (xw, _) = proj.forward(-PI, 0.0).unwrap();
        assert_relative_eq!(xe, -xw, epsilon = 1e-12);
    }

    #[test]
    fn test_central_meridian_wraps() {
        // Centered on 150°E, 170°W sits 40° east of center
        let proj = Equirectangular::new(150.0_f64.to_radians());
        let (x, _) = proj.forward((-170.0_f64).to_radians(), 0.0).unwrap();
        assert_relative_eq!(x, 40.0_f64.to_radians(), epsilon = 1e-12);
    }
}
