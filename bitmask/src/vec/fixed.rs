use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::{BitMaskError, Expected, Result};

/// A vector of exactly `capacity` bits backed by a single unsigned integer.
///
/// Bit `0` is the least significant bit of [`value`](FixedBitVector::value). The stored value
/// always satisfies `value < 2^capacity`; every mutating method checks its input before writing,
/// so a failed call leaves the vector unchanged.
///
/// Equality compares values only, so vectors of different capacities can be equal, and a vector
/// is also equal to any plain integer with the same value. Ordering is available against plain
/// integers and, through [`try_cmp`](FixedBitVector::try_cmp), against vectors of the same
/// capacity.
///
/// # Example
///
/// ```
/// use bitmask::FixedBitVector;
///
/// let mut mask = FixedBitVector::with_value(6, 10)?; // 001010
/// mask.flip_bit(1)?;
/// assert_eq!(mask, 8);
/// mask.flip_bit(4)?;
/// assert_eq!(mask, 24);
/// assert_eq!(mask.indices_set(), vec![3, 4]);
/// # Ok::<(), bitmask::BitMaskError>(())
/// ```
///
/// The vector is mutable, so it deliberately does not implement [`Hash`](std::hash::Hash)
/// and cannot be used as a key in hashed collections:
///
/// ```compile_fail
/// use std::collections::HashSet;
///
/// let mut seen = HashSet::new();
/// seen.insert(bitmask::FixedBitVector::new(3).unwrap());
/// ```
#[must_use]
#[derive(Clone)]
pub struct FixedBitVector {
    pub(crate) capacity: usize,
    pub(crate) value: BigUint,
}

impl FixedBitVector {
    /// Creates an all-zero vector of `capacity` bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::InvalidCapacity`] if `capacity` is zero or larger than `isize::MAX`.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_value(capacity, 0u8)
    }

    /// Creates a vector of `capacity` bits holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::InvalidCapacity`] for an unusable capacity and
    /// [`BitMaskError::ValueOutOfRange`] if `value` is negative or does not fit in `capacity` bits.
    pub fn with_value(capacity: usize, value: impl Into<BigInt>) -> Result<Self> {
        if capacity == 0 || isize::try_from(capacity).is_err() {
            debug!(capacity, "rejected bit vector capacity");
            return Err(BitMaskError::InvalidCapacity { capacity });
        }
        let value = fit(value.into(), capacity)?;
        Ok(Self { capacity, value })
    }

    /// The fixed number of bits, as given at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Same as [`capacity`](FixedBitVector::capacity); the length of the bit sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capacity
    }

    /// Always `false`: a vector holds at least one bit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// The stored integer.
    #[must_use]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// # Errors
    ///
    /// Returns [`BitMaskError::IndexOutOfRange`] if `position >= capacity`.
    pub fn set_bit(&mut self, position: usize) -> Result<()> {
        let position = self.check_position(position)?;
        self.value.set_bit(position, true);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`BitMaskError::IndexOutOfRange`] if `position >= capacity`.
    pub fn get_bit(&self, position: usize) -> Result<u8> {
        let position = self.check_position(position)?;
        Ok(u8::from(self.value.bit(position)))
    }

    /// # Errors
    ///
    /// Returns [`BitMaskError::IndexOutOfRange`] if `position >= capacity`.
    pub fn flip_bit(&mut self, position: usize) -> Result<()> {
        let position = self.check_position(position)?;
        let current = self.value.bit(position);
        self.value.set_bit(position, !current);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`BitMaskError::IndexOutOfRange`] if `position >= capacity`.
    pub fn reset_bit(&mut self, position: usize) -> Result<()> {
        let position = self.check_position(position)?;
        self.value.set_bit(position, false);
        Ok(())
    }

    pub fn set_all(&mut self) {
        self.value = self.mask();
    }

    pub fn reset_all(&mut self) {
        self.value.set_zero();
    }

    pub fn flip_all(&mut self) {
        self.value ^= self.mask();
    }

    /// Number of bits set to `1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn count_set(&self) -> usize {
        self.value.count_ones() as usize
    }

    /// Positions of the `1` bits, in ascending order.
    #[must_use]
    pub fn indices_set(&self) -> Vec<usize> {
        self.positions_where(1)
    }

    /// Positions of the `0` bits, in ascending order.
    #[must_use]
    pub fn indices_unset(&self) -> Vec<usize> {
        self.positions_where(0)
    }

    /// Position of the least significant `1` bit, or `None` if every bit is `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn lowest_set_index(&self) -> Option<usize> {
        self.value.trailing_zeros().map(|zeros| zeros as usize)
    }

    /// Replaces the value with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::ValueOutOfRange`] if `value` is negative or `>= 2^capacity`.
    pub fn set_from_decimal(&mut self, value: impl Into<BigInt>) -> Result<()> {
        self.value = fit(value.into(), self.capacity)?;
        Ok(())
    }

    pub(crate) fn fit_unsigned(&self, value: BigUint) -> Result<BigUint> {
        fit(value.into(), self.capacity)
    }

    fn mask(&self) -> BigUint {
        (BigUint::one() << self.capacity) - 1u8
    }

    fn positions_where(&self, bit: u8) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter_map(|(position, value)| (value == bit).then_some(position))
            .collect()
    }
}

fn fit(value: BigInt, capacity: usize) -> Result<BigUint> {
    match value.to_biguint() {
        Some(unsigned) if unsigned.bits() <= capacity as u64 => Ok(unsigned),
        _ => {
            debug!(%value, capacity, "rejected value outside the bit vector range");
            Err(BitMaskError::ValueOutOfRange {
                value,
                expected: Expected::fits_in(capacity),
            })
        }
    }
}

impl std::fmt::Debug for FixedBitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FixedBitVector(capacity={},bits={:#})", self.capacity, self)
    }
}

impl std::ops::Not for FixedBitVector {
    type Output = FixedBitVector;

    fn not(mut self) -> Self::Output {
        self.flip_all();
        self
    }
}

impl std::ops::Not for &FixedBitVector {
    type Output = FixedBitVector;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}
