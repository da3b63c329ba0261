use numpy::PyReadonlyArray1;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use breach_core::{
    AnyEquation, BoundSide, BreachError, DamFailureInput, DamType, Erodibility, FailureMode,
    Quantity,
};

/// Map core errors onto Python exceptions.
///
/// A missing equation is a lookup failure (`KeyError`); everything else is
/// a bad argument (`ValueError`).
pub fn to_py_err(err: BreachError) -> PyErr {
    match err {
        BreachError::NotFound { .. } => PyKeyError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Categorical descriptors as passed from Python.
pub struct Descriptors<'a> {
    pub erodibility: &'a str,
    pub failure_mode: &'a str,
    pub dam_type: &'a str,
}

/// Optional dimensions as passed from Python.
pub struct OptionalDims {
    pub h_b: Option<f64>,
    pub h_d: Option<f64>,
    pub w_avg: Option<f64>,
}

/// Build and validate one input record.
pub fn build_input(
    h_w: f64,
    v_w: f64,
    dims: OptionalDims,
    descriptors: &Descriptors<'_>,
) -> PyResult<DamFailureInput> {
    let erodibility: Erodibility = descriptors.erodibility.parse().map_err(to_py_err)?;
    let failure_mode: FailureMode = descriptors.failure_mode.parse().map_err(to_py_err)?;
    let dam_type: DamType = descriptors.dam_type.parse().map_err(to_py_err)?;

    DamFailureInput::builder(h_w, v_w)
        .breach_depth(dims.h_b)
        .dam_height(dims.h_d)
        .average_width(dims.w_avg)
        .erodibility(erodibility)
        .failure_mode(failure_mode)
        .dam_type(dam_type)
        .build()
        .map_err(to_py_err)
}

/// Resolve an equation from a quantity name and a family key or display name.
pub fn equation(quantity: &str, name: &str) -> PyResult<AnyEquation> {
    let quantity: Quantity = quantity.parse().map_err(to_py_err)?;
    AnyEquation::new(quantity, name).map_err(to_py_err)
}

pub fn bound_side(side: &str) -> PyResult<BoundSide> {
    match side {
        "upper" => Ok(BoundSide::Upper),
        "lower" => Ok(BoundSide::Lower),
        _ => Err(PyValueError::new_err(format!(
            "side must be 'upper' or 'lower', got '{}'",
            side
        ))),
    }
}

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Validate length + contiguity of a numpy array.
pub fn checked_slice<'py>(
    arr: &'py PyReadonlyArray1<'py, f64>,
    expected_len: usize,
    name: &str,
) -> PyResult<&'py [f64]> {
    let slice = contiguous_slice(arr)?;
    if slice.len() != expected_len {
        return Err(PyValueError::new_err(format!(
            "{} must have {} elements, got {}",
            name,
            expected_len,
            slice.len()
        )));
    }
    Ok(slice)
}

/// Like `checked_slice`, for optional arrays.
pub fn checked_optional_slice<'py>(
    arr: &'py Option<PyReadonlyArray1<'py, f64>>,
    expected_len: usize,
    name: &str,
) -> PyResult<Option<&'py [f64]>> {
    arr.as_ref()
        .map(|a| checked_slice(a, expected_len, name))
        .transpose()
}
