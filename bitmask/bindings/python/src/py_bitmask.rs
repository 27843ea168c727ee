use bitmask_rs::{BitMaskError, FixedBitVector, Item, Key, SliceSpec};
use derive_more::{From, Into};
use num_bigint::{BigInt, BigUint};
use pyo3::{
    exceptions::{PyIndexError, PyTypeError, PyValueError},
    prelude::*,
    pyclass::CompareOp,
    types::{PyInt, PySlice, PyTuple},
};

#[derive(Clone, From, Into)]
#[must_use]
#[pyclass(name = "BitMask", module = "bitmask", sequence)]
pub struct PyBitMask(FixedBitVector);

#[pymethods]
impl PyBitMask {
    #[classattr]
    const __hash__: Option<Py<PyAny>> = None;

    #[new]
    #[pyo3(signature = (length, num = None))]
    fn new(length: usize, num: Option<BigInt>) -> PyResult<Self> {
        let vector = FixedBitVector::with_value(length, num.unwrap_or_default()).map_err(to_py_err)?;
        Ok(vector.into())
    }

    #[getter]
    fn max_length(&self) -> usize {
        self.0.capacity()
    }

    #[getter]
    fn value(&self) -> BigUint {
        self.0.to_decimal()
    }

    #[setter]
    fn set_value(&mut self, num: BigInt) -> PyResult<()> {
        self.0.set_from_decimal(num).map_err(to_py_err)
    }

    pub fn set_bit(&mut self, pos: isize) -> PyResult<()> {
        let position = self.position(pos)?;
        self.0.set_bit(position).map_err(to_py_err)
    }

    pub fn set_all(&mut self) {
        self.0.set_all();
    }

    pub fn flip_bit(&mut self, pos: isize) -> PyResult<()> {
        let position = self.position(pos)?;
        self.0.flip_bit(position).map_err(to_py_err)
    }

    pub fn flip_all(&mut self) {
        self.0.flip_all();
    }

    pub fn reset_bit(&mut self, pos: isize) -> PyResult<()> {
        let position = self.position(pos)?;
        self.0.reset_bit(position).map_err(to_py_err)
    }

    pub fn reset_all(&mut self) {
        self.0.reset_all();
    }

    pub fn reverse_bits(&mut self) {
        self.0.reverse_bits();
    }

    pub fn get_bit(&self, pos: isize) -> PyResult<u8> {
        let position = self.position(pos)?;
        self.0.get_bit(position).map_err(to_py_err)
    }

    #[must_use]
    pub fn get_count(&self) -> usize {
        self.0.count_set()
    }

    pub fn get_non_zero<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyTuple>> {
        PyTuple::new(py, self.0.indices_set())
    }

    pub fn get_zero<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyTuple>> {
        PyTuple::new(py, self.0.indices_unset())
    }

    /// Position of the lowest set bit, or -1 when no bit is set.
    #[must_use]
    pub fn get_lsb(&self) -> isize {
        self.0
            .lowest_set_index()
            .and_then(|position| isize::try_from(position).ok())
            .unwrap_or(-1)
    }

    pub fn set_binary(&mut self, num: &str) -> PyResult<()> {
        self.0.set_from_binary_string(num).map_err(to_py_err)
    }

    pub fn set_hexadecimal(&mut self, num: &str) -> PyResult<()> {
        self.0.set_from_hex_string(num).map_err(to_py_err)
    }

    pub fn set_decimal(&mut self, num: BigInt) -> PyResult<()> {
        self.0.set_from_decimal(num).map_err(to_py_err)
    }

    #[must_use]
    pub fn to_binary(&self) -> String {
        self.0.to_binary_string()
    }

    #[must_use]
    pub fn to_hexadecimal(&self) -> String {
        self.0.to_hex_string()
    }

    #[must_use]
    pub fn to_decimal(&self) -> BigUint {
        self.0.to_decimal()
    }

    /// # Errors
    ///
    /// Returns an error if the index is out of range, the slice selects no bits, or the key
    /// is neither an integer nor a slice.
    pub fn __getitem__<'py>(&self, py: Python<'py>, key: &Bound<'_, PyAny>) -> PyResult<Bound<'py, PyAny>> {
        match self.0.get_item(to_key(key)?).map_err(to_py_err)? {
            Item::Bit(bit) => Ok(bit.into_pyobject(py)?.into_any()),
            Item::Vector(vector) => Ok(Bound::new(py, PyBitMask(vector))?.into_any()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the key is a slice, the index is out of range, or the value is not 0 or 1.
    pub fn __setitem__(&mut self, key: &Bound<'_, PyAny>, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let key = to_key(key)?;
        // non-bits become 255 so the key is validated before the value
        let bit = value
            .extract::<BigInt>()
            .ok()
            .and_then(|integer| u8::try_from(&integer).ok())
            .unwrap_or(u8::MAX);
        self.0.set_item(key, bit).map_err(|error| match error {
            BitMaskError::ValueOutOfRange { .. } => {
                PyValueError::new_err(format!("cannot assign {value}, expected 0 or 1"))
            }
            error => to_py_err(error),
        })
    }

    #[must_use]
    pub fn __len__(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn __iter__(&self) -> PyBitMaskIterator {
        PyBitMaskIterator {
            bits: self.0.iter().collect::<Vec<_>>().into_iter(),
        }
    }

    pub fn __invert__(&self) -> PyBitMask {
        PyBitMask(!&self.0)
    }

    /// # Errors
    ///
    /// Ordering two masks of different lengths, or a mask against a non-integer, is a type error.
    pub fn __richcmp__(&self, other: &Bound<'_, PyAny>, op: CompareOp) -> PyResult<bool> {
        if let Ok(other) = other.cast::<PyBitMask>() {
            let other = other.borrow();
            return match op {
                CompareOp::Eq => Ok(self.0 == other.0),
                CompareOp::Ne => Ok(self.0 != other.0),
                _ => Ok(op.matches(self.0.try_cmp(&other.0).map_err(to_py_err)?)),
            };
        }

        if other.is_instance_of::<PyInt>() {
            let integer = other.extract::<BigInt>()?;
            return Ok(op.matches(self.0.try_cmp(integer).map_err(to_py_err)?));
        }

        match op {
            CompareOp::Eq => Ok(false),
            CompareOp::Ne => Ok(true),
            _ => Err(PyTypeError::new_err(format!(
                "'{}' is not supported between 'BitMask' and '{}'",
                op_symbol(op),
                other.get_type().name()?
            ))),
        }
    }

    #[must_use]
    pub fn __str__(&self) -> String {
        self.0.to_string()
    }

    #[must_use]
    pub fn __repr__(&self) -> String {
        format!("BitMask({}, {})", self.0.capacity(), self.0.to_decimal())
    }
}

#[pyclass]
pub struct PyBitMaskIterator {
    bits: std::vec::IntoIter<u8>,
}

#[pymethods]
impl PyBitMaskIterator {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(&mut self) -> Option<u8> {
        self.bits.next()
    }
}

impl PyBitMask {
    fn position(&self, pos: isize) -> PyResult<usize> {
        usize::try_from(pos).map_err(|_| {
            to_py_err(BitMaskError::IndexOutOfRange {
                index: pos as i128,
                capacity: self.0.capacity(),
            })
        })
    }
}

fn to_key(key: &Bound<'_, PyAny>) -> PyResult<Key> {
    if key.is_instance_of::<PyInt>() {
        return Ok(Key::Index(key.extract::<isize>()?));
    }

    if let Ok(slice) = key.cast::<PySlice>() {
        let start = slice.getattr("start")?.extract::<Option<isize>>()?;
        let stop = slice.getattr("stop")?.extract::<Option<isize>>()?;
        let step = slice.getattr("step")?.extract::<Option<isize>>()?;
        return Ok(Key::Slice(SliceSpec::new(start, stop, step)));
    }

    Err(PyTypeError::new_err(format!(
        "'BitMask' indices must be integers or slices, not {}",
        key.get_type().name()?
    )))
}

fn to_py_err(error: BitMaskError) -> PyErr {
    match error {
        BitMaskError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
        BitMaskError::TypeMismatch(_) => PyTypeError::new_err(error.to_string()),
        _ => PyValueError::new_err(error.to_string()),
    }
}

fn op_symbol(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Lt => "<",
        CompareOp::Le => "<=",
        CompareOp::Eq => "==",
        CompareOp::Ne => "!=",
        CompareOp::Gt => ">",
        CompareOp::Ge => ">=",
    }
}
