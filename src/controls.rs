//! Control state for the lobed projection.
//!
//! A UI hands parameter changes over as [`ControlEvent`]s. [`LobeControls`]
//! owns the current parameters and projection, applies one event at a time and
//! rebuilds the projection before returning, so the next redraw always sees a
//! consistent pair. Rejected events leave the state untouched.

use tracing::{debug, warn};

use crate::error::ProjError;
use crate::proj::lobed::{LobedParams, LobedProjection, LAMPAR_CUT_RATIO};

/// One parameter change, in degrees where angular.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    Lobes(u32),
    CutParallel(f64),
    Lampar(f64),
    CentralMeridian(f64),
}

pub struct LobeControls {
    params: LobedParams,
    projection: LobedProjection,
}

impl LobeControls {
    pub fn new(params: LobedParams) -> Result<Self, ProjError> {
        let projection = LobedProjection::new(params)?;
        Ok(Self {
            params: *projection.params(),
            projection,
        })
    }

    pub fn params(&self) -> &LobedParams {
        &self.params
    }

    pub fn projection(&self) -> &LobedProjection {
        &self.projection
    }

    /// Apply `event`, rebuild the projection and return it.
    pub fn apply(&mut self, event: ControlEvent) -> Result<&LobedProjection, ProjError> {
        let mut next = self.params;
        match event {
            ControlEvent::Lobes(n) => next.lobes = n,
            ControlEvent::CutParallel(deg) => next.cut_parallel = deg,
            ControlEvent::Lampar(deg) => next.lampar = deg,
            ControlEvent::CentralMeridian(deg) => next.central_meridian = deg,
        }
        if next.lampar > LAMPAR_CUT_RATIO * next.cut_parallel {
            next.lampar = LAMPAR_CUT_RATIO * next.cut_parallel;
        }

        match LobedProjection::new(next) {
            Ok(projection) => {
                debug!(?event, params = ?projection.params(), "applied control event");
                self.params = *projection.params();
                self.projection = projection;
                Ok(&self.projection)
            }
            Err(e) => {
                warn!(?event, error = %e, "rejected control event");
                Err(e)
            }
        }
    }
}
