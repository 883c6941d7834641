//! Reading and parsing of mdcm `private.dic` source files

mod line;
mod reader;

pub use line::parse_line;
pub use reader::{open_source, SourceLine, SourceLines, COMMENT_MARKER};

use crate::error::Result;
use crate::types::RawRecord;
use std::io::BufRead;

/// Parses every non-comment line of a source into records
///
/// Lazily yields one `Result` per line; the first error should end the run.
pub fn records<R: BufRead>(
    lines: &mut SourceLines<R>,
) -> impl Iterator<Item = Result<RawRecord>> + '_ {
    lines.map(|line| line.and_then(|l| parse_line(l.number, &l.text)))
}
