use crate::error::{PrivateDictError, Result};
use crate::types::RawRecord;

/// Field separator used by private.dic files
pub const FIELD_SEPARATOR: char = '\t';

/// Parses one non-comment line into a record
///
/// Trailing whitespace (including a stray `\r`) is stripped before the
/// line is split on tabs. Anything other than exactly seven fields is an
/// error; there is no partial recovery.
pub fn parse_line(line_number: usize, text: &str) -> Result<RawRecord> {
    let trimmed = text.trim_end();
    let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).collect();

    RawRecord::from_fields(&fields).ok_or_else(|| PrivateDictError::MalformedRecord {
        line_number,
        field_count: fields.len(),
        line: trimmed.to_string(),
    })
}
