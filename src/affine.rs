use crate::error::MapError;

/// A 2D affine transform from projected plane coordinates to screen pixels.
///
/// Maps planar coordinates (x, y) to screen coordinates (px, py):
///   px = a * x + b * y + c
///   py = d * x + e * y + f
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }
}

impl Affine {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Uniform scale with the plane origin placed at `(tx, ty)` and y pointing down,
    /// the usual layout for SVG and canvas output.
    pub fn screen(scale: f64, tx: f64, ty: f64) -> Self {
        Self::new(scale, 0.0, tx, 0.0, -scale, ty)
    }

    /// Apply the forward transform: (x, y) -> (px, py).
    pub fn forward(&self, x: f64, y: f64) -> (f64, f64) {
        let px = self.a * x + self.b * y + self.c;
        let py = self.d * x + self.e * y + self.f;
        (px, py)
    }

    /// Compute the inverse affine transform.
    pub fn inverse(&self) -> Result<Affine, MapError> {
        let det = self.a * self.e - self.b * self.d;
        if det.abs() < f64::EPSILON {
            return Err(MapError::Affine(
                "Singular affine transform (determinant is zero)".into(),
            ));
        }
        let inv_det = 1.0 / det;
        Ok(Affine {
            a: self.e * inv_det,
            b: -self.b * inv_det,
            c: (self.b * self.f - self.e * self.c) * inv_det,
            d: -self.d * inv_det,
            e: self.a * inv_det,
            f: (self.d * self.c - self.a * self.f) * inv_det,
        })
    }
}
