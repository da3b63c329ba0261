use numpy::PyReadonlyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{
    bound_side, build_input, checked_optional_slice, checked_slice, contiguous_slice, equation,
    to_py_err, Descriptors, OptionalDims,
};

use breach_core::{BreachEquation, Calibration, DamFailureInput, PredictionSeries, VolumeSweep};

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_series_result! {
    /// Predictions over many inputs, with typed numpy array attributes.
    pub struct PredictionResult from PredictionSeries {
        estimate, lower, upper,
    }
}

define_series_result! {
    /// Predictions over scaled reservoir volumes.
    pub struct VolumeSweepResult from VolumeSweep {
        volume_of_water, estimate, lower, upper,
    }
}

// ---------------------------------------------------------------------------
// Single prediction
// ---------------------------------------------------------------------------

/// Point estimate and one-sided 95% bounds for one dam.
///
/// Returns a dict with `estimate`, `lower`, `upper` and `units`.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (
    quantity,
    equation_name,
    h_w,
    v_w,
    h_b=None,
    h_d=None,
    w_avg=None,
    erodibility="medium",
    failure_mode="overtopping",
    dam_type="homogeneous-fill",
    recalibrated=false,
))]
fn predict<'py>(
    py: Python<'py>,
    quantity: &str,
    equation_name: &str,
    h_w: f64,
    v_w: f64,
    h_b: Option<f64>,
    h_d: Option<f64>,
    w_avg: Option<f64>,
    erodibility: &str,
    failure_mode: &str,
    dam_type: &str,
    recalibrated: bool,
) -> PyResult<Bound<'py, PyDict>> {
    let eq = equation(quantity, equation_name)?;
    let descriptors = Descriptors {
        erodibility,
        failure_mode,
        dam_type,
    };
    let dam = build_input(h_w, v_w, OptionalDims { h_b, h_d, w_avg }, &descriptors)?;

    let p = eq.prediction(&dam, Calibration::from(recalibrated));
    let dict = record_to_dict!(py, p, estimate, lower, upper);
    dict.set_item("units", eq.units())?;
    Ok(dict)
}

// ---------------------------------------------------------------------------
// Array predictions
// ---------------------------------------------------------------------------

/// Predictions for many dams sharing the same descriptors.
///
/// `h_w` and `v_w` are required arrays; `h_b`, `h_d` and `w_avg`, when
/// given, must have the same length. NaN in an optional array means
/// "use the default" for that row.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (
    quantity,
    equation_name,
    h_w,
    v_w,
    h_b=None,
    h_d=None,
    w_avg=None,
    erodibility="medium",
    failure_mode="overtopping",
    dam_type="homogeneous-fill",
    recalibrated=false,
))]
fn predict_many<'py>(
    py: Python<'py>,
    quantity: &str,
    equation_name: &str,
    h_w: PyReadonlyArray1<'py, f64>,
    v_w: PyReadonlyArray1<'py, f64>,
    h_b: Option<PyReadonlyArray1<'py, f64>>,
    h_d: Option<PyReadonlyArray1<'py, f64>>,
    w_avg: Option<PyReadonlyArray1<'py, f64>>,
    erodibility: &str,
    failure_mode: &str,
    dam_type: &str,
    recalibrated: bool,
) -> PyResult<PredictionResult> {
    let eq = equation(quantity, equation_name)?;
    let descriptors = Descriptors {
        erodibility,
        failure_mode,
        dam_type,
    };

    let h_w_slice = contiguous_slice(&h_w)?;
    let n = h_w_slice.len();
    let v_w_slice = checked_slice(&v_w, n, "v_w")?;
    let h_b_slice = checked_optional_slice(&h_b, n, "h_b")?;
    let h_d_slice = checked_optional_slice(&h_d, n, "h_d")?;
    let w_avg_slice = checked_optional_slice(&w_avg, n, "w_avg")?;

    let row = |col: Option<&[f64]>, i: usize| col.map(|c| c[i]).filter(|v| !v.is_nan());

    let dams = (0..n)
        .map(|i| {
            let dims = OptionalDims {
                h_b: row(h_b_slice, i),
                h_d: row(h_d_slice, i),
                w_avg: row(w_avg_slice, i),
            };
            build_input(h_w_slice[i], v_w_slice[i], dims, &descriptors)
        })
        .collect::<PyResult<Vec<DamFailureInput>>>()?;

    let series = eq.predict_many(&dams, Calibration::from(recalibrated));
    Ok(PredictionResult::from_series(py, series, eq.units()))
}

/// Predictions for volumes 0.1×, 0.18×, ... below 10× `v_w`, other inputs fixed.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (
    quantity,
    equation_name,
    h_w,
    v_w,
    h_b=None,
    h_d=None,
    w_avg=None,
    erodibility="medium",
    failure_mode="overtopping",
    dam_type="homogeneous-fill",
    recalibrated=false,
))]
fn volume_sweep<'py>(
    py: Python<'py>,
    quantity: &str,
    equation_name: &str,
    h_w: f64,
    v_w: f64,
    h_b: Option<f64>,
    h_d: Option<f64>,
    w_avg: Option<f64>,
    erodibility: &str,
    failure_mode: &str,
    dam_type: &str,
    recalibrated: bool,
) -> PyResult<VolumeSweepResult> {
    let eq = equation(quantity, equation_name)?;
    let descriptors = Descriptors {
        erodibility,
        failure_mode,
        dam_type,
    };
    let dam = build_input(h_w, v_w, OptionalDims { h_b, h_d, w_avg }, &descriptors)?;

    let sweep = eq
        .volume_sweep(&dam, Calibration::from(recalibrated))
        .map_err(to_py_err)?;
    Ok(VolumeSweepResult::from_series(py, sweep, eq.units()))
}

/// Multiplier turning a point estimate into its one-sided 95% bound.
#[pyfunction]
#[pyo3(signature = (quantity, equation_name, side, recalibrated=false))]
fn bound_ratio(quantity: &str, equation_name: &str, side: &str, recalibrated: bool) -> PyResult<f64> {
    let eq = equation(quantity, equation_name)?;
    Ok(eq.bound_ratio(Calibration::from(recalibrated), bound_side(side)?))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "equations")?;
    m.add_function(wrap_pyfunction!(predict, &m)?)?;
    m.add_function(wrap_pyfunction!(predict_many, &m)?)?;
    m.add_function(wrap_pyfunction!(volume_sweep, &m)?)?;
    m.add_function(wrap_pyfunction!(bound_ratio, &m)?)?;
    m.add_class::<PredictionResult>()?;
    m.add_class::<VolumeSweepResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
