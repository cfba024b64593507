//! Lobed (HEALPix-like) interrupted projection.
//!
//! The sphere is split at the cut parallel φ0. Between -φ0 and φ0 the map is a
//! single Lambert cylindrical equal-area strip. Poleward of φ0 each of the `h`
//! longitude slots of width 2π/h is drawn as its own Collignon triangle,
//! rescaled so that its base matches the strip's width at φ0 and its apex sits
//! at a fixed height above it. Lobes meet the strip continuously and are
//! interrupted from each other above the cut.
//!
//! The horizontal axis is halved at the end of the forward map.
//!
//! No inverse exists: `inverse` always returns [`ProjError::Unsupported`].

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::debug;

use crate::error::ProjError;
use crate::proj::collignon::collignon_raw;
use crate::proj::cylindrical_equal_area::cea_raw;
use crate::proj::Projection;

/// Longitude nudge (degrees) keeping outline samples off the lobe seams.
const OUTLINE_EPSILON_DEG: f64 = 0.1;

/// Largest lobe count accepted. The outline ring holds `6h + 5` samples and its
/// seam nudge needs lobes wider than a few tenths of a degree.
pub const MAX_LOBES: u32 = 360;

/// Largest equal-area parallel allowed, as a fraction of the cut parallel.
pub const LAMPAR_CUT_RATIO: f64 = 0.8;

/// User-facing parameters, all angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LobedParams {
    /// Number of polar lobes `h`, at least 1.
    pub lobes: u32,
    /// Cut parallel φ0 in `[0, 90)`.
    pub cut_parallel: f64,
    /// Standard parallel of the equatorial equal-area strip.
    pub lampar: f64,
    /// Central meridian; longitudes are measured from it.
    pub central_meridian: f64,
}

impl Default for LobedParams {
    fn default() -> Self {
        Self {
            lobes: 6,
            cut_parallel: 60.0,
            lampar: 0.0,
            central_meridian: 0.0,
        }
    }
}

impl LobedParams {
    /// Check ranges and clamp `lampar` to `0.8 × cut_parallel`.
    pub fn validated(self) -> Result<Self, ProjError> {
        if !(1..=MAX_LOBES).contains(&self.lobes) {
            return Err(ProjError::InvalidParameter(format!(
                "lobe count must be within [1, {MAX_LOBES}], got {}",
                self.lobes
            )));
        }
        if !self.cut_parallel.is_finite() || !(0.0..90.0).contains(&self.cut_parallel) {
            return Err(ProjError::InvalidParameter(format!(
                "cut parallel must be within [0°, 90°), got {}°",
                self.cut_parallel
            )));
        }
        if !self.lampar.is_finite() || self.lampar < 0.0 {
            return Err(ProjError::InvalidParameter(format!(
                "equal-area parallel must be a non-negative angle, got {}°",
                self.lampar
            )));
        }
        if !self.central_meridian.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "central meridian must be finite, got {}",
                self.central_meridian
            )));
        }

        let max_lampar = LAMPAR_CUT_RATIO * self.cut_parallel;
        let lampar = if self.lampar > max_lampar {
            debug!(
                lampar = self.lampar,
                max = max_lampar,
                "clamping equal-area parallel to cut parallel ratio"
            );
            max_lampar
        } else {
            self.lampar
        };

        Ok(Self { lampar, ..self })
    }
}

/// The lobed projection with its derived constants and outline ring.
#[derive(Clone, Debug)]
pub struct LobedProjection {
    params: LobedParams,
    lobes: usize,
    lon0: f64,
    /// Cut parallel φ0 in radians.
    phi0: f64,
    /// cos of the equal-area standard parallel.
    cos_lampar: f64,
    /// Width of the equal-area strip at the equator.
    lam_width: f64,
    /// Width of the Collignon map at φ0.
    col_width: f64,
    /// Strip height at φ0.
    y0: f64,
    /// Collignon height at φ0.
    y1: f64,
    /// Collignon height from φ0 to the pole.
    dy1: f64,
    /// Height of a rescaled lobe from φ0 to its apex.
    col_height: f64,
    /// Longitude width of one lobe slot.
    lobe_width: f64,
    outline: Vec<(f64, f64)>,
}

impl LobedProjection {
    pub fn new(params: LobedParams) -> Result<Self, ProjError> {
        let params = params.validated()?;

        let phi0 = params.cut_parallel.to_radians();
        let cos_lampar = params.lampar.to_radians().cos();

        let lam_width = cea_raw(cos_lampar, PI, 0.0).0 - cea_raw(cos_lampar, -PI, 0.0).0;
        let col_width = collignon_raw(PI, phi0).0 - collignon_raw(-PI, phi0).0;
        let y0 = cea_raw(cos_lampar, 0.0, phi0).1;
        let y1 = collignon_raw(0.0, phi0).1;
        let dy1 = collignon_raw(0.0, FRAC_PI_2).1 - y1;
        let col_height = 4.0 * dy1 * dy1 / lam_width;
        let lobes = params.lobes as usize;
        let lobe_width = TAU / lobes as f64;

        let derived = [lam_width, col_width, y0, y1, dy1, col_height, lobe_width];
        if derived.iter().any(|v| !v.is_finite()) || col_width == 0.0 || dy1 == 0.0 {
            return Err(ProjError::InvalidParameter(format!(
                "parameters {params:?} produce degenerate projection constants"
            )));
        }

        debug!(
            lobes,
            cut_parallel = params.cut_parallel,
            lampar = params.lampar,
            central_meridian = params.central_meridian,
            lam_width,
            col_height,
            "built lobed projection"
        );

        let mut proj = Self {
            params,
            lobes,
            lon0: params.central_meridian.to_radians(),
            phi0,
            cos_lampar,
            lam_width,
            col_width,
            y0,
            y1,
            dy1,
            col_height,
            lobe_width,
            outline: Vec::new(),
        };
        proj.outline = proj.build_outline();
        Ok(proj)
    }

    /// The validated parameters, with `lampar` after clamping.
    pub fn params(&self) -> &LobedParams {
        &self.params
    }

    pub fn lobes(&self) -> usize {
        self.lobes
    }

    /// Width of the equal-area strip at the equator, before halving.
    pub fn lam_width(&self) -> f64 {
        self.lam_width
    }

    /// Height of the strip at the cut parallel.
    pub fn cut_height(&self) -> f64 {
        self.y0
    }

    /// Height of each lobe above the cut parallel.
    pub fn col_height(&self) -> f64 {
        self.col_height
    }

    /// Index of the lobe slot containing `lon` (radians, relative to the central meridian).
    pub fn lobe_index(&self, lon: f64) -> usize {
        let slot = ((lon + PI) / self.lobe_width).floor();
        // Clamp in float space: NaN and -inf fall to 0, overflow to the last lobe
        slot.max(0.0).min((self.lobes - 1) as f64) as usize
    }

    /// Offset of a lobe's center from the map center, as a fraction of the full width.
    pub fn lobe_offset(&self, lobe: usize) -> f64 {
        let h = self.lobes as f64;
        (2.0 * lobe as f64 + 1.0 - h) / (2.0 * h)
    }

    /// Forward map on longitudes already relative to the central meridian.
    pub fn forward_raw(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = if lat.abs() > self.phi0 {
            let offset = self.lobe_offset(self.lobe_index(lon));
            let (cx, cy) = collignon_raw(lon - TAU * offset, lat.abs());

            let grid_x = cx / self.col_width;
            let grid_y = (cy - self.y1) / self.dy1;
            let x = self.lam_width * (grid_x + offset);
            let y = self.y0 + grid_y * self.col_height;
            if lat < 0.0 {
                (x, -y)
            } else {
                (x, y)
            }
        } else {
            cea_raw(self.cos_lampar, lon, lat)
        };
        (x / 2.0, y)
    }

    /// Closed boundary ring of the projected surface as (lon, lat) radians,
    /// relative to the central meridian. Computed once at construction.
    pub fn outline(&self) -> &[(f64, f64)] {
        &self.outline
    }

    /// The outline ring mapped through [`Self::forward_raw`].
    pub fn outline_projected(&self) -> Vec<(f64, f64)> {
        self.outline
            .iter()
            .map(|&(lon, lat)| self.forward_raw(lon, lat))
            .collect()
    }

    fn build_outline(&self) -> Vec<(f64, f64)> {
        let step = 180.0 / self.lobes as f64;
        let eps = OUTLINE_EPSILON_DEG;
        let cut = self.params.cut_parallel;
        let mut ring = Vec::with_capacity(6 * self.lobes + 5);

        // North: zig-zag eastward from cut to apex and back for each lobe
        for lobe in 0..self.lobes {
            let west = -180.0 + 2.0 * step * lobe as f64;
            ring.push((west + eps, cut));
            ring.push((west + step, 90.0));
            ring.push((west + 2.0 * step - eps, cut));
        }
        ring.push((180.0, cut));
        ring.push((180.0, -cut));

        // South: mirror zig-zag westward
        for lobe in (0..self.lobes).rev() {
            let east = -180.0 + 2.0 * step * (lobe + 1) as f64;
            ring.push((east - eps, -cut));
            ring.push((east - step, -90.0));
            ring.push((east - 2.0 * step + eps, -cut));
        }
        ring.push((-180.0, -cut));
        ring.push((-180.0, cut));
        ring.push(ring[0]);

        ring.into_iter()
            .map(|(lon, lat): (f64, f64)| (lon.to_radians(), lat.to_radians()))
            .collect()
    }
}

impl Projection for LobedProjection {
    fn lon0(&self) -> f64 {
        self.lon0
    }

    fn forward_centered(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok(self.forward_raw(lon, lat))
    }

    fn inverse(&self, _x: f64, _y: f64) -> Result<(f64, f64), ProjError> {
        Err(ProjError::Unsupported(
            "the lobed projection has no inverse".into(),
        ))
    }

    fn name(&self) -> &'static str {
        "healpix"
    }
}
