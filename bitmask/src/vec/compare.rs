use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint};

use crate::FixedBitVector;
use crate::error::{BitMaskError, Result};

/// Right-hand side of [`FixedBitVector::try_cmp`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand<'life> {
    Vector(&'life FixedBitVector),
    Integer(BigInt),
}

impl<'life> From<&'life FixedBitVector> for Operand<'life> {
    fn from(vector: &'life FixedBitVector) -> Self {
        Operand::Vector(vector)
    }
}

impl From<BigInt> for Operand<'_> {
    fn from(integer: BigInt) -> Self {
        Operand::Integer(integer)
    }
}

impl From<BigUint> for Operand<'_> {
    fn from(integer: BigUint) -> Self {
        Operand::Integer(integer.into())
    }
}

impl FixedBitVector {
    /// Orders the vector's value against an integer or another vector.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use bitmask::{BitMaskError, FixedBitVector};
    ///
    /// let small = FixedBitVector::with_value(4, 3)?;
    /// let large = FixedBitVector::with_value(4, 5)?;
    /// assert_eq!(small.try_cmp(&large)?, Ordering::Less);
    /// assert_eq!(small.try_cmp(3)?, Ordering::Equal);
    ///
    /// let wider = FixedBitVector::with_value(5, 3)?;
    /// assert!(matches!(small.try_cmp(&wider), Err(BitMaskError::TypeMismatch(_))));
    /// assert_eq!(small, wider);
    /// # Ok::<(), BitMaskError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::TypeMismatch`] when `other` is a vector of a different capacity.
    pub fn try_cmp<'life>(&self, other: impl Into<Operand<'life>>) -> Result<Ordering> {
        match other.into() {
            Operand::Vector(other) if other.capacity != self.capacity => Err(BitMaskError::TypeMismatch(format!(
                "cannot order a {}-bit vector against a {}-bit vector",
                self.capacity, other.capacity
            ))),
            Operand::Vector(other) => Ok(self.value.cmp(&other.value)),
            Operand::Integer(integer) => Ok(cmp_integer(&self.value, &integer)),
        }
    }
}

fn cmp_integer(value: &BigUint, integer: &BigInt) -> Ordering {
    match integer.to_biguint() {
        Some(unsigned) => value.cmp(&unsigned),
        None => Ordering::Greater,
    }
}

impl PartialEq for FixedBitVector {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FixedBitVector {}

impl PartialEq<BigUint> for FixedBitVector {
    fn eq(&self, other: &BigUint) -> bool {
        self.value == *other
    }
}

impl PartialEq<FixedBitVector> for BigUint {
    fn eq(&self, other: &FixedBitVector) -> bool {
        *self == other.value
    }
}

impl PartialOrd<BigUint> for FixedBitVector {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl PartialOrd<FixedBitVector> for BigUint {
    fn partial_cmp(&self, other: &FixedBitVector) -> Option<Ordering> {
        Some(self.cmp(&other.value))
    }
}

impl PartialEq<BigInt> for FixedBitVector {
    fn eq(&self, other: &BigInt) -> bool {
        cmp_integer(&self.value, other) == Ordering::Equal
    }
}

impl PartialEq<FixedBitVector> for BigInt {
    fn eq(&self, other: &FixedBitVector) -> bool {
        other == self
    }
}

impl PartialOrd<BigInt> for FixedBitVector {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(cmp_integer(&self.value, other))
    }
}

impl PartialOrd<FixedBitVector> for BigInt {
    fn partial_cmp(&self, other: &FixedBitVector) -> Option<Ordering> {
        Some(cmp_integer(&other.value, self).reverse())
    }
}

macro_rules! compare_with_integer {
    ($($int:ty),*) => {$(
        impl From<$int> for Operand<'_> {
            fn from(integer: $int) -> Self {
                Operand::Integer(integer.into())
            }
        }

        impl PartialEq<$int> for FixedBitVector {
            fn eq(&self, other: &$int) -> bool {
                cmp_integer(&self.value, &BigInt::from(*other)) == Ordering::Equal
            }
        }

        impl PartialEq<FixedBitVector> for $int {
            fn eq(&self, other: &FixedBitVector) -> bool {
                other == self
            }
        }

        impl PartialOrd<$int> for FixedBitVector {
            fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                Some(cmp_integer(&self.value, &BigInt::from(*other)))
            }
        }

        impl PartialOrd<FixedBitVector> for $int {
            fn partial_cmp(&self, other: &FixedBitVector) -> Option<Ordering> {
                Some(cmp_integer(&other.value, &BigInt::from(*self)).reverse())
            }
        }
    )*};
}

compare_with_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
