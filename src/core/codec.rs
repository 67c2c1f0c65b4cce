//! Plaintext record format.
//!
//! Decrypted store content is UTF-8 text with one `key,value` record per
//! line. The first comma is the delimiter; there is no escaping, so keys
//! never contain commas while values may.

use zeroize::Zeroizing;

use crate::core::constants::DELIMITER;
use crate::core::domain::{Record, RecordSet};
use crate::error::{Error, ParseError, Result};

/// Parse decrypted plaintext into a record set.
///
/// Empty lines are skipped and a trailing `\r` is tolerated. Every other
/// line must split into a non-empty key and a value; nothing is silently
/// dropped.
///
/// # Errors
///
/// Returns `ParseError` for non-UTF-8 input, a line without a delimiter,
/// an empty key, or a repeated key.
pub fn parse(plaintext: &[u8]) -> Result<RecordSet> {
    let text = std::str::from_utf8(plaintext).map_err(|_| ParseError::NotUtf8)?;
    let mut set = RecordSet::new();

    for (index, raw) in text.split('\n').enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(DELIMITER)
            .ok_or(ParseError::MissingDelimiter { line: line_no })?;
        if key.is_empty() {
            return Err(ParseError::EmptyKey { line: line_no }.into());
        }

        let record = Record::new(key, value).map_err(|e| ParseError::InvalidRecord {
            line: line_no,
            reason: e.to_string(),
        })?;
        set.insert(record).map_err(|e| match e {
            Error::Record(_) => ParseError::DuplicateKey {
                line: line_no,
                key: key.to_string(),
            }
            .into(),
            other => other,
        })?;
    }

    Ok(set)
}

/// Serialize a record set as `key,value` lines in iteration order.
pub fn serialize(set: &RecordSet) -> Zeroizing<Vec<u8>> {
    let capacity: usize = set
        .iter()
        .map(|r| r.key().len() + r.value().len() + 2)
        .sum();
    let mut out = Zeroizing::new(Vec::with_capacity(capacity));

    for record in set.iter() {
        out.extend_from_slice(record.key().as_bytes());
        out.push(DELIMITER as u8);
        out.extend_from_slice(record.value().as_bytes());
        out.push(b'\n');
    }

    out
}
