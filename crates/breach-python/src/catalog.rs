use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::convert::to_py_err;

use breach_core::registry;
use breach_core::Quantity;

/// Registered equations for one quantity, in presentation order.
///
/// Each entry is a dict with `identifier`, `family`, `display_name`,
/// `description`, `units` and the original/recalibrated error statistics.
/// An empty list means no equation exists for that quantity.
#[pyfunction]
fn catalog<'py>(py: Python<'py>, quantity: &str) -> PyResult<Bound<'py, PyList>> {
    let quantity: Quantity = quantity.parse().map_err(to_py_err)?;
    let list = PyList::empty(py);
    for def in registry::catalog(quantity) {
        let info = def.info();
        let dict = PyDict::new(py);
        dict.set_item("identifier", info.identifier)?;
        dict.set_item("family", info.family)?;
        dict.set_item("display_name", info.display_name)?;
        dict.set_item("description", info.description)?;
        dict.set_item("units", info.units)?;
        dict.set_item("mean", info.original.mean)?;
        dict.set_item("stdev", info.original.stdev)?;
        dict.set_item("recal_mean", info.recalibrated.mean)?;
        dict.set_item("recal_stdev", info.recalibrated.stdev)?;
        list.append(dict)?;
    }
    Ok(list)
}

/// Names accepted by the `quantity` argument everywhere in this module.
#[pyfunction]
fn quantities() -> Vec<&'static str> {
    Quantity::ALL.iter().map(|q| q.as_str()).collect()
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "catalog")?;
    m.add_function(wrap_pyfunction!(catalog, &m)?)?;
    m.add_function(wrap_pyfunction!(quantities, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
