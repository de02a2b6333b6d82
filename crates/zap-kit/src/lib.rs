//! zap-kit: engine-agnostic sequence, ordering, sampling, and map
//! utilities for game code.
//!
//! Pure library, no game-loop or rendering dependency. Operations either
//! mutate the caller's container in place (shuffle, sort, remove) or
//! return a new one; searches report "nothing found" as `Option::None`,
//! and operations with no defined result on empty input fail fast with
//! [`KitError`].

pub mod error;
pub mod map;
pub mod seq;
pub mod stream;
pub mod text;
pub mod wait;

// Re-export key types at crate root for convenience
pub use error::{KitError, Result};
pub use map::merge_maps;
pub use seq::{
    in_range, index_in_bounds, wrapped_index, KeyedOrder, RandomSlice, RandomSource, RandomVec,
    SliceKit, SliceOrder, VecKit, XorShift64,
};
pub use stream::{to_stream, Cursor, CursorStream, SliceCursor, StreamKit};
pub use wait::{wait_for, wait_for_secs, Wait};
