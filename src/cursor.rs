//! Sequential reads over a [`BinaryBlob`].
//!
//! `BlobCursor` threads the position through the blob's position-explicit
//! reads. The position only moves when a read succeeds, so a failed read
//! leaves the cursor where it was.

use crate::blob::BinaryBlob;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct BlobCursor<'a> {
    blob: &'a BinaryBlob,
    pos: usize,
}

impl<'a> BlobCursor<'a> {
    pub fn new(blob: &'a BinaryBlob) -> Self {
        Self::at(blob, 0)
    }

    /// Start reading at `pos`.
    pub fn at(blob: &'a BinaryBlob, pos: usize) -> Self {
        Self { blob, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the blob.
    pub fn remaining(&self) -> usize {
        self.blob.len().saturating_sub(self.pos)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let (v, next) = self.blob.read_u8(self.pos)?;
        self.pos = next;
        Ok(v)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let (v, next) = self.blob.read_u16(self.pos)?;
        self.pos = next;
        Ok(v)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let (v, next) = self.blob.read_u32(self.pos)?;
        self.pos = next;
        Ok(v)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let (v, next) = self.blob.read_u64(self.pos)?;
        self.pos = next;
        Ok(v)
    }

    /// Read `count` raw bytes; `None` for a zero count.
    pub fn read_bytes(&mut self, count: usize) -> Result<Option<&'a [u8]>> {
        let blob: &'a BinaryBlob = self.blob;
        let (bytes, next) = blob.read_bytes(self.pos, count)?;
        self.pos = next;
        Ok(bytes)
    }

    /// Advance past `count` bytes without decoding them.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlobError;

    #[test]
    fn sequential_record() {
        // u32 type, u8 digest count, u16 algorithm, 4 digest bytes, u64 trailer
        let mut data = vec![0x01, 0x00, 0x00, 0x80, 0x01, 0x0b, 0x00];
        data.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        data.extend_from_slice(&7u64.to_le_bytes());
        let blob = BinaryBlob::new(data, 0);

        let mut cur = BlobCursor::new(&blob);
        assert_eq!(cur.read_u32().unwrap(), 0x8000_0001);
        assert_eq!(cur.read_u8().unwrap(), 1);
        assert_eq!(cur.read_u16().unwrap(), 0x000b);
        assert_eq!(cur.read_bytes(4).unwrap(), Some(&[0xde, 0xad, 0xbe, 0xef][..]));
        assert_eq!(cur.read_u64().unwrap(), 7);
        assert_eq!(cur.remaining(), 0);
        assert_eq!(cur.position(), blob.len());
    }

    #[test]
    fn failed_read_keeps_position() {
        let blob = BinaryBlob::new(vec![1u8, 2, 3], 0);
        let mut cur = BlobCursor::at(&blob, 1);
        assert!(matches!(cur.read_u32(), Err(BlobError::OutOfBounds { .. })));
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.read_u16().unwrap(), 0x0302);
    }

    #[test]
    fn zero_length_read_and_skip() {
        let blob = BinaryBlob::new(vec![0u8; 4], 0);
        let mut cur = BlobCursor::new(&blob);
        assert_eq!(cur.read_bytes(0).unwrap(), None);
        assert_eq!(cur.position(), 0);
        cur.skip(3).unwrap();
        assert_eq!(cur.remaining(), 1);
        assert!(cur.skip(2).is_err());
        assert_eq!(cur.position(), 3);
    }
}
