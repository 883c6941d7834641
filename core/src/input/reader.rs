use crate::error::{PrivateDictError, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Lines starting with this character are comments
pub const COMMENT_MARKER: char = '#';

/// A non-comment line together with its 1-based position in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Single forward pass over the non-comment lines of a source
///
/// Comment lines are counted and dropped here, so they never reach the
/// parser. Blank lines are passed through unchanged.
pub struct SourceLines<R> {
    lines: Lines<R>,
    path: PathBuf,
    line_number: usize,
    skipped_comments: usize,
}

/// Opens a source file for line reading
///
/// # Errors
///
/// Returns [`PrivateDictError::FileAccess`] if the file is missing or unreadable.
pub fn open_source(path: &Path) -> Result<SourceLines<BufReader<File>>> {
    let file = File::open(path).map_err(|e| PrivateDictError::file_access(path, e))?;
    info!("Reading private dictionary source: {}", path.display());
    Ok(SourceLines::new(BufReader::new(file), path))
}

impl<R: BufRead> SourceLines<R> {
    /// Wraps any buffered reader; `path` is only used in error messages
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
            line_number: 0,
            skipped_comments: 0,
        }
    }

    /// Number of comment lines skipped so far
    pub fn skipped_comments(&self) -> usize {
        self.skipped_comments
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(PrivateDictError::file_access(&self.path, e))),
            };
            self.line_number += 1;

            if text.starts_with(COMMENT_MARKER) {
                self.skipped_comments += 1;
                debug!("Skipping comment at line {}", self.line_number);
                continue;
            }

            return Some(Ok(SourceLine {
                number: self.line_number,
                text,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn lines_of(text: &str) -> Vec<SourceLine> {
        SourceLines::new(Cursor::new(text.to_string()), "test.dic")
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_comments_are_skipped() {
        let text = "# header\n0009\t0010\tLO\t1\tName\t\tACME\n#\tbroken\tcomment\n";
        let mut source = SourceLines::new(Cursor::new(text.to_string()), "test.dic");

        let first = source.next().unwrap().unwrap();
        assert_eq!(first.number, 2);
        assert!(first.text.starts_with("0009"));
        assert!(source.next().is_none());
        assert_eq!(source.skipped_comments(), 2);
    }

    #[test]
    fn test_indented_hash_is_not_a_comment() {
        let lines = lines_of(" # not a comment\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, " # not a comment");
    }

    #[test]
    fn test_blank_lines_pass_through() {
        let lines = lines_of("\n\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].number, 2);
        assert!(lines[1].text.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = lines_of("a\r\nb\r\n");
        assert_eq!(lines[0].text, "a");
        assert_eq!(lines[1].text, "b");
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.dic");

        let err = open_source(&missing).err().unwrap();
        match err {
            PrivateDictError::FileAccess { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_utf8_is_file_access_error() {
        let bytes: Vec<u8> = vec![0xff, 0xfe, b'\n'];
        let mut source = SourceLines::new(Cursor::new(bytes), "bad.dic");

        assert!(matches!(
            source.next(),
            Some(Err(PrivateDictError::FileAccess { .. }))
        ));
    }
}
