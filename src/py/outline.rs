//! PyO3 binding for the lobed projection's outline ring.

use numpy::PyArray1;
use pyo3::prelude::*;

use super::to_py_err;
use crate::proj::lobed::{LobedParams, LobedProjection};

/// Boundary ring of the lobed projection as geographic samples.
///
/// Args:
///     lobes: Lobe count.
///     cut_parallel: Cut parallel in degrees.
///     lampar: Equal-area standard parallel in degrees.
///
/// Returns:
///     Tuple of (lon, lat) arrays in degrees, relative to the central meridian.
///     The ring is closed: the last sample repeats the first.
#[pyfunction]
#[pyo3(signature = (lobes=6, cut_parallel=60.0, lampar=0.0))]
#[allow(clippy::type_complexity)]
pub fn lobed_outline(
    py: Python<'_>,
    lobes: u32,
    cut_parallel: f64,
    lampar: f64,
) -> PyResult<(Bound<'_, PyArray1<f64>>, Bound<'_, PyArray1<f64>>)> {
    let proj = LobedProjection::new(LobedParams {
        lobes,
        cut_parallel,
        lampar,
        central_meridian: 0.0,
    })
    .map_err(to_py_err)?;

    let (lons, lats): (Vec<f64>, Vec<f64>) = proj
        .outline()
        .iter()
        .map(|&(lon, lat)| (lon.to_degrees(), lat.to_degrees()))
        .unzip();

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(lons)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(lats)),
    ))
}
