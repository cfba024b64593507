//! PyO3 binding for batch forward projection.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::to_py_err;
use crate::proj::kind::ProjectionKind;
use crate::proj::lobed::LobedParams;

/// Project arrays of geographic coordinates onto the plane.
///
/// Args:
///     lon: 1D array of longitudes in degrees.
///     lat: 1D array of latitudes in degrees.
///     projection: Projection name (e.g. "healpix", "mercator", "eckert4").
///     lobes: Lobe count for "healpix".
///     cut_parallel: Cut parallel in degrees for "healpix".
///     lampar: Equal-area standard parallel in degrees for "healpix";
///         clamped to 0.8 × cut_parallel.
///     central_meridian: Meridian at the map center, in degrees.
///
/// Returns:
///     Tuple of (x, y) arrays on the unit-sphere projection plane.
#[pyfunction]
#[pyo3(signature = (lon, lat, projection="healpix", lobes=6, cut_parallel=60.0, lampar=0.0, central_meridian=0.0))]
#[allow(clippy::type_complexity, clippy::too_many_arguments)]
pub fn project_points<'py>(
    py: Python<'py>,
    lon: PyReadonlyArray1<'py, f64>,
    lat: PyReadonlyArray1<'py, f64>,
    projection: &str,
    lobes: u32,
    cut_parallel: f64,
    lampar: f64,
    central_meridian: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let lon_view = lon.as_array();
    let lat_view = lat.as_array();

    let n = lon_view.len();
    let lat_len = lat_view.len();
    if n != lat_len {
        return Err(PyValueError::new_err(format!(
            "lon and lat must have same length, got {} and {}",
            n, lat_len
        )));
    }

    let mut kind: ProjectionKind = projection.parse().map_err(to_py_err)?;
    if let ProjectionKind::Lobed(_) = kind {
        kind = ProjectionKind::Lobed(LobedParams {
            lobes,
            cut_parallel,
            lampar,
            central_meridian,
        });
    }

    let mut coords: Vec<(f64, f64)> = lon_view
        .iter()
        .zip(lat_view.iter())
        .map(|(&lo, &la)| (lo.to_radians(), la.to_radians()))
        .collect();

    let coords = py.allow_threads(move || -> PyResult<Vec<(f64, f64)>> {
        let proj = kind.build(central_meridian).map_err(to_py_err)?;
        proj.forward_batch(&mut coords).map_err(to_py_err)?;
        Ok(coords)
    })?;

    let (xs, ys): (Vec<f64>, Vec<f64>) = coords.into_iter().unzip();

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
    ))
}
