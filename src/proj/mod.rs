pub mod collignon;
pub mod common;
pub mod cylindrical_equal_area;
pub mod eckert4;
pub mod equirectangular;
pub mod kind;
pub mod lobed;
pub mod mercator;
pub mod orthographic;

use crate::error::ProjError;
use crate::proj::common::adjust_lon;

/// Trait for map projections of the unit sphere supporting forward and inverse transforms.
pub trait Projection: Send + Sync {
    /// Central meridian in radians.
    fn lon0(&self) -> f64;

    /// Forward on a longitude already measured from the central meridian.
    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError>;

    /// Forward: (lon_rad, lat_rad) -> (x, y)
    ///
    /// Non-finite input, or output the projection cannot represent, is `OutOfDomain`.
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(ProjError::OutOfDomain(format!("({lon}, {lat})")));
        }
        let (x, y) = self.forward_centered(adjust_lon(lon - self.lon0()), lat)?;
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjError::OutOfDomain(format!(
                "({lon}, {lat}) maps to ({x}, {y})"
            )));
        }
        Ok((x, y))
    }

    /// Inverse: (x, y) -> (lon_rad, lat_rad)
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError>;

    /// Batch forward transform (default: loop).
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }

    /// Short lowercase name, matching what `ProjectionKind` parses.
    fn name(&self) -> &'static str;
}
