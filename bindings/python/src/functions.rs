// bindings/python/src/functions.rs
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;
use se23_sym::checked;
use se23_sym::signature::{lookup, Signature};

fn to_py_err(err: se23_core::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Scratch buffer matching the length of an optional output list. The
/// length is validated by the kernel adapter, not here.
fn scratch(out: Option<&PyList>) -> Option<Vec<f64>> {
    out.map(|list| vec![0.0; list.len()])
}

/// Copy results back into the caller's list, in place.
fn fill(out: Option<&PyList>, buf: Option<Vec<f64>>) -> PyResult<()> {
    if let (Some(list), Some(buf)) = (out, buf) {
        for (i, v) in buf.into_iter().enumerate() {
            list.set_item(i, v)?;
        }
    }
    Ok(())
}

/// One IMU preintegration step.
///
/// imu_noise[6], preint_prev[55], z_imu_est[6], dt -> upsilon[10], cov[81].
/// Outputs are lists filled in place; pass None to skip one.
#[pyfunction]
#[pyo3(signature = (imu_noise, preint_prev, z_imu_est, dt, upsilon=None, cov=None))]
pub fn preintegrate(
    imu_noise: Vec<f64>,
    preint_prev: Vec<f64>,
    z_imu_est: Vec<f64>,
    dt: f64,
    upsilon: Option<&PyList>,
    cov: Option<&PyList>,
) -> PyResult<()> {
    let mut upsilon_buf = scratch(upsilon);
    let mut cov_buf = scratch(cov);
    checked::preintegrate(
        &imu_noise,
        &preint_prev,
        &z_imu_est,
        dt,
        upsilon_buf.as_deref_mut(),
        cov_buf.as_deref_mut(),
    )
    .map_err(to_py_err)?;
    fill(upsilon, upsilon_buf)?;
    fill(cov, cov_buf)
}

/// Column-major rotation matrix of a Pose23: inputs[10] -> output[9].
#[pyfunction]
#[pyo3(signature = (inputs, output=None))]
pub fn myfunc(inputs: Vec<f64>, output: Option<&PyList>) -> PyResult<()> {
    let mut buf = scratch(output);
    checked::myfunc(&inputs, buf.as_deref_mut()).map_err(to_py_err)?;
    fill(output, buf)
}

/// c = [a + b, a * b, a - b] for inputs = [a, b, _, _].
#[pyfunction]
#[pyo3(signature = (inputs, c=None))]
pub fn myfunction(inputs: Vec<f64>, c: Option<&PyList>) -> PyResult<()> {
    let mut buf = scratch(c);
    checked::myfunction(&inputs, buf.as_deref_mut()).map_err(to_py_err)?;
    fill(c, buf)
}

type SignatureTuple = (
    &'static str,
    Vec<(&'static str, usize)>,
    Vec<(&'static str, usize)>,
);

fn to_tuple(s: &Signature) -> SignatureTuple {
    (
        s.name,
        s.inputs.iter().map(|a| (a.name, a.len)).collect(),
        s.outputs.iter().map(|a| (a.name, a.len)).collect(),
    )
}

/// Exported routines as (name, [(input, len)], [(output, len)]).
#[pyfunction]
pub fn signatures() -> Vec<SignatureTuple> {
    se23_sym::SIGNATURES.iter().map(to_tuple).collect()
}

/// Shapes of one exported routine; ValueError for an unknown name.
#[pyfunction]
pub fn signature(name: &str) -> PyResult<SignatureTuple> {
    lookup(name)
        .map(to_tuple)
        .ok_or_else(|| PyValueError::new_err(format!("unknown routine `{}`", name)))
}
