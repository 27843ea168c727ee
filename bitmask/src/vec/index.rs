use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::FixedBitVector;
use crate::error::{BitMaskError, Expected, Result};

/// A Python-style slice: each bound is optional, negative bounds count from the end, and a
/// negative step walks backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

/// A [`SliceSpec`] resolved against a concrete length.
///
/// `length` is the number of positions visited, starting at `start` and moving by `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub length: usize,
}

impl SliceSpec {
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        SliceSpec { start, stop, step }
    }

    /// The slice `[:]`.
    #[must_use]
    pub const fn full() -> Self {
        SliceSpec::new(None, None, None)
    }

    #[must_use]
    pub const fn step_by(self, step: isize) -> Self {
        SliceSpec {
            step: Some(step),
            ..self
        }
    }

    /// Resolves the slice against a sequence of `length` items, clamping out-of-range bounds the
    /// way Python's `slice.indices` does.
    ///
    /// ```
    /// use bitmask::SliceSpec;
    ///
    /// let reversed = SliceSpec::full().step_by(-1).indices(8)?;
    /// assert_eq!((reversed.start, reversed.stop, reversed.length), (7, -1, 8));
    ///
    /// let clamped = SliceSpec::from(-20..3).indices(8)?;
    /// assert_eq!((clamped.start, clamped.stop, clamped.length), (0, 3, 3));
    /// # Ok::<(), bitmask::BitMaskError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::ValueOutOfRange`] for a zero step and
    /// [`BitMaskError::InvalidCapacity`] if `length` does not fit in an `isize`.
    pub fn indices(&self, length: usize) -> Result<SliceIndices> {
        let Ok(length) = isize::try_from(length) else {
            return Err(BitMaskError::InvalidCapacity { capacity: length });
        };
        let step = match self.step {
            None => 1,
            Some(0) => {
                debug!("rejected zero slice step");
                return Err(BitMaskError::ValueOutOfRange {
                    value: 0.into(),
                    expected: Expected::NonZeroStep,
                });
            }
            // -isize::MIN is not representable
            Some(step) => step.max(-isize::MAX),
        };

        let (lower, upper) = if step < 0 { (-1, length - 1) } else { (0, length) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(bound) if bound < 0 => (bound + length).max(lower),
            Some(bound) => bound.min(upper),
        };
        let (start, stop) = if step < 0 {
            (clamp(self.start, upper), clamp(self.stop, lower))
        } else {
            (clamp(self.start, lower), clamp(self.stop, upper))
        };

        let visited = if step < 0 && stop < start {
            (start - stop - 1) / -step + 1
        } else if step > 0 && start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        #[allow(clippy::cast_sign_loss)]
        let length = visited as usize;
        Ok(SliceIndices {
            start,
            stop,
            step,
            length,
        })
    }
}

impl SliceIndices {
    /// The visited positions, in visiting order.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + use<> {
        let SliceIndices { start, step, length, .. } = *self;
        (0..length).map(move |offset| (start + step * offset as isize) as usize)
    }
}

/// Either a single (possibly negative) index or a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Index(isize),
    Slice(SliceSpec),
}

/// The result of [`FixedBitVector::get_item`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Bit(u8),
    Vector(FixedBitVector),
}

impl Item {
    #[must_use]
    pub fn as_bit(&self) -> Option<u8> {
        match self {
            Item::Bit(bit) => Some(*bit),
            Item::Vector(_) => None,
        }
    }

    #[must_use]
    pub fn into_vector(self) -> Option<FixedBitVector> {
        match self {
            Item::Vector(vector) => Some(vector),
            Item::Bit(_) => None,
        }
    }
}

impl From<SliceSpec> for Key {
    fn from(slice: SliceSpec) -> Self {
        Key::Slice(slice)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        SliceSpec::full()
    }
}

impl From<RangeFull> for Key {
    fn from(range: RangeFull) -> Self {
        Key::Slice(range.into())
    }
}

macro_rules! keys_from_integer {
    ($($int:ty),*) => {$(
        impl From<$int> for Key {
            fn from(index: $int) -> Self {
                Key::Index(index as isize)
            }
        }

        impl From<Range<$int>> for SliceSpec {
            fn from(range: Range<$int>) -> Self {
                SliceSpec::new(Some(range.start as isize), Some(range.end as isize), None)
            }
        }

        impl From<RangeFrom<$int>> for SliceSpec {
            fn from(range: RangeFrom<$int>) -> Self {
                SliceSpec::new(Some(range.start as isize), None, None)
            }
        }

        impl From<RangeTo<$int>> for SliceSpec {
            fn from(range: RangeTo<$int>) -> Self {
                SliceSpec::new(None, Some(range.end as isize), None)
            }
        }

        impl From<Range<$int>> for Key {
            fn from(range: Range<$int>) -> Self {
                Key::Slice(range.into())
            }
        }

        impl From<RangeFrom<$int>> for Key {
            fn from(range: RangeFrom<$int>) -> Self {
                Key::Slice(range.into())
            }
        }

        impl From<RangeTo<$int>> for Key {
            fn from(range: RangeTo<$int>) -> Self {
                Key::Slice(range.into())
            }
        }
    )*};
}

keys_from_integer!(i32, isize);

impl FixedBitVector {
    /// Reads a bit (for [`Key::Index`]) or extracts a new vector (for [`Key::Slice`]).
    ///
    /// # Errors
    ///
    /// See [`item`](FixedBitVector::item) and [`slice`](FixedBitVector::slice).
    pub fn get_item(&self, key: impl Into<Key>) -> Result<Item> {
        match key.into() {
            Key::Index(index) => self.item(index).map(Item::Bit),
            Key::Slice(slice) => self.slice(slice).map(Item::Vector),
        }
    }

    /// Reads the bit at `index`; `-1` is the most significant bit.
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::IndexOutOfRange`] if `index` is outside `-capacity..capacity`.
    pub fn item(&self, index: isize) -> Result<u8> {
        let position = self.resolve_index(index)?;
        self.get_bit(position)
    }

    /// Copies the bits visited by `slice` into a new vector.
    ///
    /// The result has one bit per visited position, and the first visited bit becomes its most
    /// significant bit.
    ///
    /// ```
    /// use bitmask::{FixedBitVector, SliceSpec};
    ///
    /// let mask = FixedBitVector::with_value(8, 0b1010_1010)?;
    /// let reversed = mask.slice(SliceSpec::full().step_by(-1))?;
    /// assert_eq!(reversed.capacity(), 8);
    /// assert_eq!(reversed, 0b1010_1010);
    /// assert_eq!(mask.slice(4..)?, 0b0101);
    /// # Ok::<(), bitmask::BitMaskError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::ValueOutOfRange`] for a zero step and
    /// [`BitMaskError::InvalidCapacity`] if the slice visits no positions.
    pub fn slice(&self, slice: impl Into<SliceSpec>) -> Result<FixedBitVector> {
        let slice = slice.into();
        let indices = slice.indices(self.capacity)?;
        trace!(?slice, ?indices, capacity = self.capacity, "resolved slice");

        let mut sliced = BigUint::zero();
        for (offset, position) in indices.positions().enumerate() {
            if self.value.bit(position as u64) {
                sliced.set_bit((indices.length - offset - 1) as u64, true);
            }
        }
        FixedBitVector::with_value(indices.length, sliced)
    }

    /// Writes a single bit; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::TypeMismatch`] for a slice key,
    /// [`BitMaskError::IndexOutOfRange`] for a bad index and [`BitMaskError::ValueOutOfRange`] if
    /// `value` is not `0` or `1`.
    pub fn set_item(&mut self, key: impl Into<Key>, value: u8) -> Result<()> {
        let index = match key.into() {
            Key::Index(index) => index,
            Key::Slice(slice) => {
                debug!(?slice, "rejected slice assignment");
                return Err(BitMaskError::TypeMismatch(
                    "bit vectors do not support slice assignment".to_owned(),
                ));
            }
        };
        let position = self.resolve_index(index)?;
        match value {
            0 => self.reset_bit(position),
            1 => self.set_bit(position),
            _ => {
                debug!(value, position, "rejected non-bit assignment");
                Err(BitMaskError::ValueOutOfRange {
                    value: value.into(),
                    expected: Expected::Bit,
                })
            }
        }
    }

    pub(crate) fn check_position(&self, position: usize) -> Result<u64> {
        if position < self.capacity {
            return Ok(position as u64);
        }
        debug!(position, capacity = self.capacity, "rejected bit position");
        Err(BitMaskError::IndexOutOfRange {
            index: position as i128,
            capacity: self.capacity,
        })
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub(crate) fn resolve_index(&self, index: isize) -> Result<usize> {
        // capacity never exceeds isize::MAX
        let capacity = self.capacity as isize;
        let resolved = if index < 0 { index + capacity } else { index };
        if (0..capacity).contains(&resolved) {
            return Ok(resolved as usize);
        }
        debug!(index, capacity = self.capacity, "rejected bit index");
        Err(BitMaskError::IndexOutOfRange {
            index: index as i128,
            capacity: self.capacity,
        })
    }
}
