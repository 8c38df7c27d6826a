//! Common test utilities and helpers.
#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// A buffer of `len` bytes counting up from zero (wrapping at 256).
pub fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// Sample data shaped like a TCG PCR event header.
pub mod test_data {
    /// pcr index 0, event type EV_NO_ACTION (3), 20-byte zero digest, event size 4
    pub fn pcr_event_header() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&3u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 20]);
        data.extend_from_slice(&4u32.to_le_bytes());
        data.extend_from_slice(b"TEST");
        data
    }
}
