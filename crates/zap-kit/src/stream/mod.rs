// stream/mod.rs
//
// Lazy sequence adapters: cursor conversion, prepend, neighbor lookup,
// windows, and eager realization.

pub mod adapters;
pub mod cursor;

pub use adapters::StreamKit;
pub use cursor::{to_stream, Cursor, CursorStream, SliceCursor};
