//! Python bindings (feature `python`): `encode`/`decode` exposed directly
//! on native Python objects, with no intermediate text format.
//!
//! `Bytes` maps to Python `bytes`; every other `Value` kind maps to the
//! obvious native type (`None`, `bool`, `int`, `float`, `str`, `list`,
//! `dict`). A `dict` with non-string keys cannot occur on the way out,
//! since BOS object keys are always strings; on the way in, a non-`str`
//! dict key is a `TypeError`.

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict, PyList};

use crate::value::{Object, Value};

fn to_py(py: Python<'_>, value: &Value) -> PyResult<PyObject> {
    Ok(match value {
        Value::Null => py.None(),
        Value::Bool(b) => b.into_py(py),
        Value::Integer(v) => v.into_py(py),
        Value::Real(v) => v.into_py(py),
        Value::String(s) => s.into_py(py),
        Value::Bytes(b) => PyBytes::new_bound(py, b).into_py(py),
        Value::Array(items) => {
            let list = PyList::empty_bound(py);
            for item in items {
                list.append(to_py(py, item)?)?;
            }
            list.into_py(py)
        }
        Value::Object(obj) => {
            let dict = PyDict::new_bound(py);
            for (k, v) in obj.iter() {
                dict.set_item(k, to_py(py, v)?)?;
            }
            dict.into_py(py)
        }
    })
}

fn from_py(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Null);
    }
    if let Ok(b) = obj.extract::<bool>() {
        return Ok(Value::Bool(b));
    }
    if let Ok(i) = obj.extract::<i64>() {
        return Ok(Value::Integer(i));
    }
    if let Ok(f) = obj.extract::<f64>() {
        return Ok(Value::Real(f));
    }
    if let Ok(s) = obj.extract::<String>() {
        return Ok(Value::String(s));
    }
    if let Ok(b) = obj.extract::<Vec<u8>>() {
        return Ok(Value::Bytes(b));
    }
    if let Ok(list) = obj.downcast::<PyList>() {
        let mut items = Vec::with_capacity(list.len());
        for item in list.iter() {
            items.push(from_py(&item)?);
        }
        return Ok(Value::Array(items));
    }
    if let Ok(dict) = obj.downcast::<PyDict>() {
        let mut out = Object::with_capacity(dict.len());
        for (k, v) in dict.iter() {
            let key: String = k
                .extract()
                .map_err(|_| PyTypeError::new_err("BOS object keys must be strings"))?;
            out.insert(key, from_py(&v)?);
        }
        return Ok(Value::Object(out));
    }
    Err(PyTypeError::new_err(format!(
        "unsupported type for BOS encoding: {}",
        obj.get_type().name()?
    )))
}

/// `bos.encode(obj: Any) -> bytes`
#[pyfunction]
fn encode(obj: &Bound<'_, PyAny>) -> PyResult<Vec<u8>> {
    let value = from_py(obj)?;
    crate::encode::encode(&value).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// `bos.decode(data: bytes) -> Any`
#[pyfunction]
fn decode(py: Python<'_>, data: &[u8]) -> PyResult<PyObject> {
    let value = crate::decode::decode(data).map_err(|e| PyValueError::new_err(e.to_string()))?;
    to_py(py, &value)
}

#[pymodule]
fn bos(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    Ok(())
}
