#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let blob = binblob::BinaryBlob::from_slice(data, 0);
    // Interpret the blob as a stream of (width selector, count) records.
    let mut pos = 0;
    while let Ok((sel, next)) = blob.read_u8(pos) {
        pos = match sel % 5 {
            0 => blob.read_u8(next).map(|(_, p)| p),
            1 => blob.read_u16(next).map(|(_, p)| p),
            2 => blob.read_u32(next).map(|(_, p)| p),
            3 => blob.read_u64(next).map(|(_, p)| p),
            _ => blob.read_bytes(next, (sel >> 3) as usize).map(|(_, p)| p),
        }
        .unwrap_or(blob.len());
    }
    let _ = blob.dump_lines();
    let _ = blob.to_hex_string();
});
