//! Fixed-width bit vectors.
//!
//! A [`FixedBitVector`] holds exactly `capacity` bits, chosen at construction and never resized.
//! Bit `0` is the least significant bit of the stored integer. Besides single-bit and bulk
//! operations, the vector converts to and from binary, hexadecimal and decimal forms and supports
//! Python-style indexing: negative indices count from the end, and slices take an optional
//! `start`, `stop` and `step`.
//!
//! ```
//! use bitmask::{FixedBitVector, SliceSpec};
//!
//! let mut mask = FixedBitVector::with_value(8, 170)?;
//! assert_eq!(mask.count_set(), 4);
//! assert_eq!(mask.lowest_set_index(), Some(1));
//! assert_eq!(mask.item(-1)?, 1);
//!
//! let upper = mask.slice(4..)?;
//! assert_eq!(upper.capacity(), 4);
//! assert_eq!(upper, 5);
//!
//! mask.set_from_hex_string("0x0f")?;
//! assert_eq!(mask.to_string(), "0 0 0 0 1 1 1 1");
//! assert_eq!(mask.slice(SliceSpec::full().step_by(2))?, 0b1100);
//! # Ok::<(), bitmask::BitMaskError>(())
//! ```

pub mod error;
pub use error::{BitMaskError, Expected, Result};

pub mod vec;
pub use vec::{Bits, FixedBitVector, Item, Key, Operand, SliceIndices, SliceSpec};

mod codec;

#[cfg(feature = "serde")]
mod serde;
