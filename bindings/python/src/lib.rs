// bindings/python/src/lib.rs

#![allow(non_local_definitions)]
#![allow(clippy::too_many_arguments)]

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use tracing::debug;

mod functions;

use functions::*;

#[pymodule]
fn mylib(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(preintegrate, m)?)?;
    m.add_function(wrap_pyfunction!(myfunc, m)?)?;
    m.add_function(wrap_pyfunction!(myfunction, m)?)?;
    m.add_function(wrap_pyfunction!(signatures, m)?)?;
    m.add_function(wrap_pyfunction!(signature, m)?)?;

    debug!(
        functions = se23_sym::SIGNATURES.len(),
        "registered mylib functions"
    );
    Ok(())
}
