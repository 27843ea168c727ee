use std::iter::FusedIterator;

use crate::FixedBitVector;

/// Iterator over the bits of a [`FixedBitVector`], from position `0` up to `capacity - 1`.
#[must_use]
#[derive(Clone, Debug)]
pub struct Bits<'life> {
    vector: &'life FixedBitVector,
    front: usize,
    back: usize,
}

impl Bits<'_> {
    fn bit_at(&self, position: usize) -> u8 {
        u8::from(self.vector.value.bit(position as u64))
    }
}

impl Iterator for Bits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        let bit = self.bit_at(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Bits<'_> {
    fn next_back(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bit_at(self.back))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

impl FixedBitVector {
    /// Iterates over the bits as `0`/`1`, least significant first.
    ///
    /// This is the reverse of the printed order:
    ///
    /// ```
    /// use bitmask::FixedBitVector;
    ///
    /// let mask = FixedBitVector::with_value(5, 13)?;
    /// assert_eq!(mask.iter().collect::<Vec<_>>(), vec![1, 0, 1, 1, 0]);
    /// assert_eq!(mask.to_string(), "0 1 1 0 1");
    /// # Ok::<(), bitmask::BitMaskError>(())
    /// ```
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            vector: self,
            front: 0,
            back: self.capacity,
        }
    }
}

impl<'life> IntoIterator for &'life FixedBitVector {
    type Item = u8;
    type IntoIter = Bits<'life>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
