use encoding8::ascii;
use std::fmt::Write;

/// Bytes shown per hexdump row.
const WIDTH: usize = 16;

/// The character shown for `b` in the text column, `.` for anything that
/// isn't printable ASCII.
fn printable(b: u8) -> char {
    if b.is_ascii() && ascii::is_printable(b) {
        b as char
    } else {
        '.'
    }
}

/// Formats the message as rows of offset, hex bytes and text.
pub fn hexdump(msg: &[u8]) -> String {
    let mut out = String::new();

    for (i, row) in msg.chunks(WIDTH).enumerate() {
        // Writing to a String can't fail.
        let _ = write!(out, "{:08x}:", i * WIDTH);
        for b in row {
            let _ = write!(out, " {:02X}", b);
        }

        // Pad the last row so its text lines up with the others.
        for _ in row.len()..WIDTH {
            out.push_str("   ");
        }

        out.push_str("  ");
        out.extend(row.iter().map(|&b| printable(b)));
        out.push('\n');
    }

    out
}
