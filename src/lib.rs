//! Read-only, position-explicit access to little-endian binary blobs.
//!
//! [`BinaryBlob`] wraps an immutable byte buffer and exposes fixed-width
//! integer reads, raw sub-range reads and a hex/ASCII diagnostic dump.
//! Higher-level record parsers build on it by threading offsets from one
//! read into the next, or by using a [`BlobCursor`].

pub mod blob;
pub mod cursor;
pub mod dump;
pub mod error;
pub mod logging;
pub mod sink;

pub use blob::{BinaryBlob, BlobLimits};
pub use cursor::BlobCursor;
pub use error::{BlobError, Result};
pub use sink::{LineSink, TracingSink};
