use crate::error::FeedError;
use std::fmt::Write;

/// Checks that a line is 7-bit clean and hands back the bytes to send.
///
/// `line_no` is 1-based and only used for the error report.
pub fn encode_line(line: &str, line_no: usize) -> Result<&[u8], FeedError> {
    match line.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        None => Ok(line.as_bytes()),
        Some((column, ch)) => Err(FeedError::Encoding { line: line_no, column, ch }),
    }
}

/// Printable form of a payload, e.g. `b'alpha\n'`.
///
/// Single-quoted unless the bytes hold a `'` and no `"`. With `trim` set,
/// trailing whitespace is dropped from the rendering only.
pub fn display(bytes: &[u8], trim: bool) -> String {
    let shown = if trim {
        let end = bytes
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |i| i + 1);
        &bytes[..end]
    } else {
        bytes
    };

    let quote = if shown.contains(&b'\'') && !shown.contains(&b'"') { b'"' } else { b'\'' };
    let mut out = String::with_capacity(shown.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &b in shown {
        match b {
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\\' => out.push_str("\\\\"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out.push(quote as char);
    out
}
