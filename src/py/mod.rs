use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;

use crate::error::ProjError;

mod outline;
mod transform;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::project_points, m)?)?;
    m.add_function(wrap_pyfunction!(outline::lobed_outline, m)?)?;
    Ok(())
}

/// Unsupported inverses surface as `NotImplementedError`, everything else as `ValueError`.
fn to_py_err(e: ProjError) -> PyErr {
    match e {
        ProjError::Unsupported(_) => PyNotImplementedError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}
