//! The single line the binary prints.

use std::io::{self, Write};

/// Label printed before the joined path.
pub const LABEL: &str = "Full path:";

/// `label` and `path` separated by one space, with nothing after the path.
pub fn format_line(label: &str, path: &str) -> String {
    format!("{} {}", label, path)
}

/// Write the formatted line followed by a newline.
pub fn write_line<W: Write>(out: &mut W, label: &str, path: &str) -> io::Result<()> {
    writeln!(out, "{}", format_line(label, path))
}
