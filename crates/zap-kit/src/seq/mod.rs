// seq/mod.rs
//
// Operations over indexable sequences: wrapped indexing, directional
// selection, key-based ordering, and random sampling.

pub mod index;
pub mod order;
pub mod random;
pub mod select;

pub use index::{in_range, index_in_bounds, wrapped_index};
pub use order::{KeyedOrder, SliceOrder};
pub use random::{RandomSlice, RandomSource, RandomVec, XorShift64};
pub use select::{SliceKit, VecKit};
