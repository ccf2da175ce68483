//! Emit the remapped tiles as one line of C array initializer text.

use std::io::{self, Write};

pub const SEPARATOR: &str = ", ";

/// `[1, -2, 3]` → `"1, -2, 3"`; no brackets, no trailing separator.
pub fn format_line(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Write the whole line in a single call followed by a newline.
pub fn emit<W: Write>(values: &[i64], out: &mut W) -> io::Result<()> {
    let mut line = format_line(values);
    line.push('\n');
    out.write_all(line.as_bytes())?;
    out.flush()
}
