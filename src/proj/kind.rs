//! Projection selection by name.
//!
//! `ProjectionKind` is the closed set of projections a map view can show. It
//! parses from the names a UI selector would hand over and builds a boxed
//! [`Projection`] centered on a given meridian.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ProjError;
use crate::proj::collignon::Collignon;
use crate::proj::cylindrical_equal_area::CylindricalEqualArea;
use crate::proj::eckert4::EckertIV;
use crate::proj::equirectangular::Equirectangular;
use crate::proj::lobed::{LobedParams, LobedProjection};
use crate::proj::mercator::Mercator;
use crate::proj::orthographic::Orthographic;
use crate::proj::Projection;

/// Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionKind {
    /// Interrupted lobed projection. Its own `central_meridian` is overridden by `build`.
    Lobed(LobedParams),
    CylindricalEqualArea { parallel: f64 },
    Collignon,
    Equirectangular,
    Mercator,
    Orthographic { center_lat: f64 },
    EckertIV,
}

impl ProjectionKind {
    /// Build the projection with `central_meridian` (degrees) at the map center.
    pub fn build(&self, central_meridian: f64) -> Result<Box<dyn Projection>, ProjError> {
        let lon0 = central_meridian.to_radians();
        if !lon0.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "central meridian must be finite, got {central_meridian}"
            )));
        }
        debug!(kind = %self, central_meridian, "building projection");

        let proj: Box<dyn Projection> = match *self {
            ProjectionKind::Lobed(params) => Box::new(LobedProjection::new(LobedParams {
                central_meridian,
                ..params
            })?),
            ProjectionKind::CylindricalEqualArea { parallel } => Box::new(
                CylindricalEqualArea::new(lon0, parallel.to_radians())?,
            ),
            ProjectionKind::Collignon => Box::new(Collignon::new(lon0)),
            ProjectionKind::Equirectangular => Box::new(Equirectangular::new(lon0)),
            ProjectionKind::Mercator => Box::new(Mercator::new(lon0)),
            ProjectionKind::Orthographic { center_lat } => {
                Box::new(Orthographic::new(lon0, center_lat.to_radians())?)
            }
            ProjectionKind::EckertIV => Box::new(EckertIV::new(lon0)),
        };
        Ok(proj)
    }

    /// Whether the built projection supports `inverse`.
    pub fn is_invertible(&self) -> bool {
        !matches!(self, ProjectionKind::Lobed(_))
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectionKind::Lobed(_) => "healpix",
            ProjectionKind::CylindricalEqualArea { .. } => "cea",
            ProjectionKind::Collignon => "collignon",
            ProjectionKind::Equirectangular => "equirectangular",
            ProjectionKind::Mercator => "mercator",
            ProjectionKind::Orthographic { .. } => "orthographic",
            ProjectionKind::EckertIV => "eckert4",
        };
        f.write_str(name)
    }
}

/// Parses a projection name with default parameters for the variants that carry any.
impl FromStr for ProjectionKind {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "healpix" | "lobed" => Ok(ProjectionKind::Lobed(LobedParams::default())),
            "cea" | "cylindrical-equal-area" | "cylindricalequalarea" => {
                Ok(ProjectionKind::CylindricalEqualArea { parallel: 0.0 })
            }
            "collignon" => Ok(ProjectionKind::Collignon),
            "equirectangular" | "plate-carree" => Ok(ProjectionKind::Equirectangular),
            "mercator" => Ok(ProjectionKind::Mercator),
            "orthographic" => Ok(ProjectionKind::Orthographic { center_lat: 0.0 }),
            "eckert4" | "eckert-iv" => Ok(ProjectionKind::EckertIV),
            _ => Err(ProjError::UnknownProjection(s.to_string())),
        }
    }
}
