//! MapView: geographic degrees → projection → screen pixels.
//!
//! Callers work in degrees; projections work in radians on the unit sphere.
//! The screen step is an [`Affine`] that scales, translates and flips y.

use crate::affine::Affine;
use crate::error::{MapError, ProjError};
use crate::proj::kind::ProjectionKind;
use crate::proj::Projection;

pub struct MapView {
    projection: Box<dyn Projection>,
    screen: Affine,
}

impl MapView {
    pub fn new(projection: Box<dyn Projection>, screen: Affine) -> Self {
        Self { projection, screen }
    }

    /// Build the projection for `kind` centered on `central_meridian` (degrees).
    pub fn from_kind(
        kind: &ProjectionKind,
        central_meridian: f64,
        screen: Affine,
    ) -> Result<Self, ProjError> {
        Ok(Self::new(kind.build(central_meridian)?, screen))
    }

    pub fn projection(&self) -> &dyn Projection {
        self.projection.as_ref()
    }

    pub fn screen(&self) -> &Affine {
        &self.screen
    }

    /// Replace the screen transform, keeping the projection.
    pub fn set_screen(&mut self, screen: Affine) {
        self.screen = screen;
    }

    /// Project a point from (lon, lat) degrees to screen pixels.
    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), MapError> {
        let (x, y) = self
            .projection
            .forward(lon.to_radians(), lat.to_radians())?;
        Ok(self.screen.forward(x, y))
    }

    /// Batch variant of [`Self::project`]; coordinates are replaced in place.
    pub fn project_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), MapError> {
        for c in coords.iter_mut() {
            *c = self.project(c.0, c.1)?;
        }
        Ok(())
    }

    /// Map screen pixels back to (lon, lat) degrees.
    pub fn invert(&self, px: f64, py: f64) -> Result<(f64, f64), MapError> {
        let (x, y) = self.screen.inverse()?.forward(px, py);
        let (lon, lat) = self.projection.inverse(x, y)?;
        Ok((lon.to_degrees(), lat.to_degrees()))
    }

    /// Project a (lon, lat) radian ring measured from the central meridian, such as
    /// [`LobedProjection::outline`](crate::proj::lobed::LobedProjection::outline),
    /// to screen pixels. The ring is not rotated, so its silhouette stays put when
    /// the central meridian changes.
    pub fn project_ring(&self, ring: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, MapError> {
        ring.iter()
            .map(|&(lon, lat)| -> Result<(f64, f64), MapError> {
                let (x, y) = self.projection.forward_centered(lon, lat)?;
                if !x.is_finite() || !y.is_finite() {
                    return Err(ProjError::OutOfDomain(format!(
                        "ring sample ({lon}, {lat}) maps to ({x}, {y})"
                    ))
                    .into());
                }
                Ok(self.screen.forward(x, y))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::lobed::{LobedParams, LobedProjection};
    use approx::assert_relative_eq;

    #[test]
    fn test_project_origin_to_screen_center() {
        let view = MapView::from_kind(
            &ProjectionKind::Mercator,
            0.0,
            Affine::screen(180.0, 480.0, 250.0),
        )
        .unwrap();
        let (px, py) = view.project(0.0, 0.0).unwrap();
        assert_relative_eq!(px, 480.0, epsilon = 1e-9);
        assert_relative_eq!(py, 250.0, epsilon = 1e-9);

        // North is up on screen
        let (_, py_north) = view.project(0.0, 45.0).unwrap();
        assert!(py_north < 250.0);
    }

    #[test]
    fn test_invert_roundtrip() {
        let view = MapView::from_kind(
            &ProjectionKind::EckertIV,
            20.0,
            Affine::screen(180.0, 480.0, 250.0),
        )
        .unwrap();
        let (px, py) = view.project(-30.0, 40.0).unwrap();
        let (lon, lat) = view.invert(px, py).unwrap();
        assert_relative_eq!(lon, -30.0, epsilon = 1e-7);
        assert_relative_eq!(lat, 40.0, epsilon = 1e-7);
    }

    #[test]
    fn test_invert_lobed_unsupported() {
        let view = MapView::from_kind(
            &ProjectionKind::Lobed(LobedParams::default()),
            0.0,
            Affine::screen(200.0, 480.0, 250.0),
        )
        .unwrap();
        let err = view.invert(480.0, 250.0).unwrap_err();
        assert!(matches!(err, MapError::Projection(ProjError::Unsupported(_))));
    }

    #[test]
    fn test_invert_singular_screen() {
        let view = MapView::new(
            ProjectionKind::Mercator.build(0.0).unwrap(),
            Affine::screen(0.0, 0.0, 0.0),
        );
        assert!(matches!(view.invert(1.0, 1.0), Err(MapError::Affine(_))));
    }

    #[test]
    fn test_project_batch_stops_on_far_side() {
        let view = MapView::from_kind(
            &ProjectionKind::Orthographic { center_lat: 0.0 },
            0.0,
            Affine::default(),
        )
        .unwrap();
        let mut coords = vec![(0.0, 0.0), (180.0, 0.0)];
        assert!(view.project_batch(&mut coords).is_err());

        let mut coords = vec![(0.0, 0.0), (90.0, 0.0)];
        view.project_batch(&mut coords).unwrap();
        assert_relative_eq!(coords[1].0, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_ring_of_outline() {
        let screen = Affine::screen(200.0, 480.0, 250.0);
        let plain = LobedProjection::new(LobedParams::default()).unwrap();
        let shifted = LobedProjection::new(LobedParams {
            central_meridian: 30.0,
            ..LobedParams::default()
        })
        .unwrap();

        let expected: Vec<(f64, f64)> = plain
            .outline_projected()
            .into_iter()
            .map(|(x, y)| screen.forward(x, y))
            .collect();
        for proj in [plain, shifted] {
            let view = MapView::new(Box::new(proj.clone()), screen);
            let ring = view.project_ring(proj.outline()).unwrap();
            assert_eq!(ring.len(), expected.len());
            for (got, want) in ring.iter().zip(&expected) {
                assert_relative_eq!(got.0, want.0, epsilon = 1e-9);
                assert_relative_eq!(got.1, want.1, epsilon = 1e-9);
            }
        }

        let top = expected.iter().map(|p| p.1).fold(f64::MAX, f64::min);
        let proj = LobedProjection::new(LobedParams::default()).unwrap();
        assert_relative_eq!(
            top,
            250.0 - 200.0 * (proj.cut_height() + proj.col_height()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_project_ring_rejects_non_finite() {
        let view = MapView::from_kind(&ProjectionKind::Collignon, 0.0, Affine::default()).unwrap();
        let err = view.project_ring(&[(0.0, 0.0), (f64::NAN, 0.0)]).unwrap_err();
        assert!(matches!(err, MapError::Projection(ProjError::OutOfDomain(_))));
    }

    #[test]
    fn test_set_screen_zooms() {
        let mut view = MapView::from_kind(
            &ProjectionKind::Equirectangular,
            0.0,
            Affine::screen(100.0, 480.0, 250.0),
        )
        .unwrap();
        let (px, py) = view.project(90.0, 45.0).unwrap();

        view.set_screen(Affine::screen(200.0, 480.0, 250.0));
        assert_relative_eq!(view.screen().a, 200.0);
        let (zx, zy) = view.project(90.0, 45.0).unwrap();
        assert_relative_eq!(zx - 480.0, 2.0 * (px - 480.0), epsilon = 1e-9);
        assert_relative_eq!(zy - 250.0, 2.0 * (py - 250.0), epsilon = 1e-9);
    }

    #[test]
    fn test_project_non_finite_rejected_for_every_kind() {
        let kinds = [
            ProjectionKind::Lobed(LobedParams::default()),
            ProjectionKind::CylindricalEqualArea { parallel: 0.0 },
            ProjectionKind::Collignon,
            ProjectionKind::Equirectangular,
            ProjectionKind::Mercator,
            ProjectionKind::Orthographic { center_lat: 0.0 },
            ProjectionKind::EckertIV,
        ];
        for kind in kinds {
            let view = MapView::from_kind(&kind, 0.0, Affine::screen(200.0, 480.0, 250.0)).unwrap();
            for (lon, lat) in [(f64::NAN, 0.0), (0.0, f64::NAN), (f64::INFINITY, 10.0)] {
                let err = view.project(lon, lat).unwrap_err();
                assert!(
                    matches!(err, MapError::Projection(ProjError::OutOfDomain(_))),
                    "{kind} accepted ({lon}, {lat})"
                );
            }
        }
    }
}
