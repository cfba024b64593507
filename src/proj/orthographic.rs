//! Orthographic projection (globe view) centered on (λ₀, φ₁).
//!
//! forward: x = cos φ·sin(λ - λ₀), y = cos φ₁·sin φ - sin φ₁·cos φ·cos(λ - λ₀)
//! Points with cos c = sin φ₁·sin φ + cos φ₁·cos φ·cos(λ - λ₀) < 0 lie on the
//! far hemisphere and have no image.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::{adjust_lon, asin_clamped};
use crate::proj::Projection;

pub struct Orthographic {
    lon0: f64,
    sin_lat0: f64,
    cos_lat0: f64,
}

impl Orthographic {
    pub fn new(lon0: f64, lat0: f64) -> Result<Self, ProjError> {
        if !lat0.is_finite() || lat0.abs() > FRAC_PI_2 {
            return Err(ProjError::InvalidParameter(format!(
                "center latitude must be within [-90°, 90°], got {}°",
                lat0.to_degrees()
            )));
        }
        let (sin_lat0, cos_lat0) = lat0.sin_cos();
        Ok(Self {
            lon0,
            sin_lat0,
            cos_lat0,
        })
    }
}

impl Projection for Orthographic {
    fn lon0(&self) -> f64 {
        self.lon0
    }

    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_dlon, cos_dlon) = lon.sin_cos();
        let cos_c = self.sin_lat0 * sin_lat + self.cos_lat0 * cos_lat * cos_dlon;
        if cos_c < 0.0 {
            return Err(ProjError::OutOfDomain(format!(
                "{}° from the center meridian at {}° latitude is on the far hemisphere",
                lon.to_degrees(),
                lat.to_degrees()
            )));
        }
        Ok((
            cos_lat * sin_dlon,
            self.cos_lat0 * sin_lat - self.sin_lat0 * cos_lat * cos_dlon,
        ))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let rho = x.hypot(y);
        if rho > 1.0 {
            return Err(ProjError::OutOfDomain(format!(
                "({x}, {y}) is outside the unit disk"
            )));
        }
        if rho < 1e-15 {
            return Ok((self.lon0, asin_clamped(self.sin_lat0)));
        }
        let (sin_c, cos_c) = (rho.min(1.0).asin()).sin_cos();
        let lat = asin_clamped(cos_c * self.sin_lat0 + y * sin_c * self.cos_lat0 / rho);
        let lon = self.lon0
            + (x * sin_c).atan2(rho * self.cos_lat0 * cos_c - y * self.sin_lat0 * sin_c);
        Ok((adjust_lon(lon), lat))
    }

    fn name(&self) -> &'static str {
        "orthographic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip() {
        let proj = Orthographic::new(60.0_f64.to_radians(), 10.0_f64.to_radians()).unwrap();
        let cases: &[(f64, f64)] = &[(60.0, 10.0), (40.0, 45.0), (100.0, -20.0), (20.0, 0.0)];
        for &(lon_deg, lat_deg) in cases {
            let lon = lon_deg.to_radians();
            let lat = lat_deg.to_radians();
            let (x, y) = proj.forward(lon, lat).unwrap();
            let (lon2, lat2) = proj.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-10);
            assert_relative_eq!(lat2, lat, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_center_maps_to_origin() {
        let proj = Orthographic::new(0.3, 0.2).unwrap();
        let (x, y) = proj.forward(0.3, 0.2).unwrap();
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_far_side_rejected() {
        let proj = Orthographic::new(0.0, 0.0).unwrap();
        assert!(matches!(
            proj.forward(std::f64::consts::PI, 0.0),
            Err(ProjError::OutOfDomain(_))
        ));
        assert!(proj.inverse(1.0, 1.0).is_err());
    }

    #[test]
    fn test_invalid_center() {
        assert!(Orthographic::new(0.0, 2.0).is_err());
    }
}
