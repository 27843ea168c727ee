use pyo3::prelude::*;

mod py_bitmask;

pub use py_bitmask::{PyBitMask, PyBitMaskIterator};

/// # Errors
///
/// Returns an error if any class registration fails.
#[pymodule]
pub fn bitmask(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBitMask>()?;
    m.add_class::<PyBitMaskIterator>()?;
    Ok(())
}
