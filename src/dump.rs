//! Hex/ASCII dump rendering.
//!
//! Output layout, 16 bytes per line:
//!
//! ```text
//! 00001000  04 00 02 00 81 00 00 00 00 00 00 00 93 9A 72 33  ..............r3
//! 00001010  F7 9C 4C A9                                      ..L.
//! ```

use crate::sink::LineSink;
use std::fmt::Write;

/// Bytes rendered per dump line.
pub const BYTES_PER_LINE: usize = 16;

/// Whether `b` is shown as itself in the ASCII column.
///
/// Tab, newline, vertical tab, form feed and carriage return are
/// excluded along with everything outside `0x20..=0x7E`.
pub fn is_printable(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}

/// Render `data` as dump lines whose address labels start at `base`.
pub fn render_lines(data: &[u8], base: u64) -> Vec<String> {
    data.chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(i, chunk)| render_line(chunk, base.wrapping_add((i * BYTES_PER_LINE) as u64)))
        .collect()
}

fn render_line(chunk: &[u8], addr: u64) -> String {
    let mut line = String::with_capacity(12 + BYTES_PER_LINE * 4);
    // Writing into a String cannot fail.
    let _ = write!(line, "{:08X}  ", addr);
    for b in chunk {
        let _ = write!(line, "{:02X} ", b);
    }
    for _ in chunk.len()..BYTES_PER_LINE {
        line.push_str("   ");
    }
    line.push(' ');
    line.extend(
        chunk
            .iter()
            .map(|&b| if is_printable(b) { b as char } else { '.' }),
    );
    line
}

/// Dump an arbitrary slice at base address 0.
pub fn dump_data<S: LineSink>(data: &[u8], mut sink: S) {
    for line in render_lines(data, 0) {
        sink.emit(&line);
    }
}
