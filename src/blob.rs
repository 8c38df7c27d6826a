//! Random-access, read-only view over an in-memory binary blob.
//!
//! Every read is position-explicit: it takes an offset and returns the
//! decoded value together with the offset immediately after it, so parsers
//! thread positions through a sequence of reads:
//!
//! ```
//! use binblob::BinaryBlob;
//!
//! let blob = BinaryBlob::new(vec![0x01, 0x00, 0x02, 0x00, 0x00, 0x00], 0);
//! let (kind, pos) = blob.read_u16(0)?;
//! let (size, pos) = blob.read_u32(pos)?;
//! assert_eq!((kind, size, pos), (1, 2, 6));
//! # Ok::<(), binblob::BlobError>(())
//! ```
//!
//! All multi-byte integers are little-endian.

use crate::dump;
use crate::error::{BlobError, Result};
use crate::sink::LineSink;
use bytes::Bytes;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Resource limits applied when loading a blob from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobLimits {
    /// The absolute maximum file size that can be loaded.
    pub max_file_size: u64,
}

impl Default for BlobLimits {
    fn default() -> Self {
        Self {
            max_file_size: 16 * 1024 * 1024, // 16MB
        }
    }
}

/// Immutable byte buffer with a display-only base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryBlob {
    data: Bytes,
    base_address: u64,
}

impl BinaryBlob {
    /// Wrap `data`. `base_address` only affects dump address labels.
    pub fn new(data: impl Into<Bytes>, base_address: u64) -> Self {
        Self {
            data: data.into(),
            base_address,
        }
    }

    /// Copy a borrowed slice into a new blob.
    pub fn from_slice(data: &[u8], base_address: u64) -> Self {
        Self::new(Bytes::copy_from_slice(data), base_address)
    }

    /// Load a whole file into a blob.
    ///
    /// Fails with [`BlobError::FileTooLarge`] if the file exceeds
    /// `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, base_address: u64, limits: &BlobLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Loading blob from file"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(BlobError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        // memmap cannot map empty files.
        let data = if file_size == 0 {
            Bytes::new()
        } else {
            // Safety: read-only map of a regular file, copied out before the map is dropped.
            let map = unsafe { Mmap::map(&file)? };
            Bytes::copy_from_slice(&map)
        };

        Ok(Self { data, base_address })
    }

    /// Length of the blob in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Display base address used by [`dump`](Self::dump).
    pub fn base_address(&self) -> u64 {
        self.base_address
    }

    /// Raw contents of the blob.
    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }

    /// Cheap owned handle to the contents.
    pub fn bytes(&self) -> Bytes {
        self.data.clone()
    }

    /// Lowercase hex, two digits per byte, no separators.
    pub fn to_hex_string(&self) -> String {
        hex::encode(&self.data)
    }

    /// Bounds-checked `[pos, pos + width)` range.
    fn span(&self, pos: usize, width: usize) -> Result<&[u8]> {
        match pos.checked_add(width) {
            Some(end) if end <= self.data.len() => Ok(&self.data[pos..end]),
            _ => Err(BlobError::OutOfBounds {
                offset: pos,
                needed: width,
                len: self.data.len(),
            }),
        }
    }

    fn array<const N: usize>(&self, pos: usize) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.span(pos, N)?);
        Ok(out)
    }

    /// Read a `u8` at `pos`, returning the value and `pos + 1`.
    pub fn read_u8(&self, pos: usize) -> Result<(u8, usize)> {
        let [b] = self.array::<1>(pos)?;
        Ok((b, pos + 1))
    }

    /// Read a little-endian `u16` at `pos`, returning the value and `pos + 2`.
    pub fn read_u16(&self, pos: usize) -> Result<(u16, usize)> {
        Ok((u16::from_le_bytes(self.array(pos)?), pos + 2))
    }

    /// Read a little-endian `u32` at `pos`, returning the value and `pos + 4`.
    pub fn read_u32(&self, pos: usize) -> Result<(u32, usize)> {
        Ok((u32::from_le_bytes(self.array(pos)?), pos + 4))
    }

    /// Read a little-endian `u64` at `pos`, returning the value and `pos + 8`.
    pub fn read_u64(&self, pos: usize) -> Result<(u64, usize)> {
        Ok((u64::from_le_bytes(self.array(pos)?), pos + 8))
    }

    /// Read `count` raw bytes at `pos`.
    ///
    /// A zero `count` yields `(None, pos)`: nothing is consumed, so the
    /// position does not advance and no bounds check is made.
    pub fn read_bytes(&self, pos: usize, count: usize) -> Result<(Option<&[u8]>, usize)> {
        if count == 0 {
            return Ok((None, pos));
        }
        let bytes = self.span(pos, count)?;
        Ok((Some(bytes), pos + count))
    }

    /// Render the hex/ASCII dump without emitting it.
    pub fn dump_lines(&self) -> Vec<String> {
        dump::render_lines(&self.data, self.base_address)
    }

    /// Write the hex/ASCII dump to `sink`, one line per 16 bytes.
    pub fn dump<S: LineSink>(&self, mut sink: S) {
        for line in self.dump_lines() {
            sink.emit(&line);
        }
    }
}

impl From<Vec<u8>> for BinaryBlob {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data, 0)
    }
}

impl AsRef<[u8]> for BinaryBlob {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
