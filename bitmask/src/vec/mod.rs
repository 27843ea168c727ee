mod compare;
mod fixed;
mod index;
mod iter;

pub use compare::Operand;
pub use fixed::FixedBitVector;
pub use index::{Item, Key, SliceIndices, SliceSpec};
pub use iter::Bits;
