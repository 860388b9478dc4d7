use crate::error::FeedError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the whole input and splits it into lines.
///
/// The input must be valid UTF-8 as a whole; a bad byte anywhere fails the
/// read before any line is handed out.
pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<String>, FeedError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(FeedError::Read)?;
    let text = String::from_utf8(raw)
        .map_err(|e| FeedError::InvalidUtf8 { offset: e.utf8_error().valid_up_to() })?;
    Ok(split_lines(&text))
}

/// Splits on `\n`, `\r\n` and a lone `\r`; every terminator comes back as `\n`.
/// A final line without a terminator is kept as is.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            '\n' => {
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Opens and reads `path`. The handle is closed before this returns.
pub fn open(path: &Path) -> Result<Vec<String>, FeedError> {
    let file = File::open(path)
        .map_err(|source| FeedError::FileAccess { path: path.to_path_buf(), source })?;
    read_lines(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn keeps_newlines_and_unterminated_tail() {
        assert_eq!(split_lines("alpha\nbeta\n\ngamma"), vec!["alpha\n", "beta\n", "\n", "gamma"]);
    }

    #[test]
    fn carriage_returns_end_lines_and_become_newlines() {
        assert_eq!(split_lines("alpha\r\nbeta\rgamma\n"), vec!["alpha\n", "beta\n", "gamma\n"]);
        assert_eq!(split_lines("\r\r\n\n"), vec!["\n", "\n", "\n"]);
        assert_eq!(split_lines("tail\r"), vec!["tail\n"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
        assert!(read_lines(Cursor::new(Vec::new())).unwrap().is_empty());
    }

    #[test]
    fn non_utf8_input_fails_as_a_whole() {
        let err = read_lines(Cursor::new(b"alpha\nbeta\n\xffx\n".to_vec())).unwrap_err();
        assert!(matches!(err, FeedError::InvalidUtf8 { offset: 11 }), "{err:?}");
    }

    #[test]
    fn non_ascii_utf8_is_still_readable() {
        assert_eq!(read_lines(Cursor::new("café\n".as_bytes())).unwrap(), vec!["café\n"]);
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let path = std::env::temp_dir().join("line-feed-does-not-exist.txt");
        match open(&path) {
            Err(FeedError::FileAccess { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
