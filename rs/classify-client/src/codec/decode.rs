use thiserror::Error;
use tracing::warn;

use crate::constant::{FIELD_DELIMITER, FIELD_SOURCE, RECORD_TERMINATOR};
use crate::types::record::LogRecord;
use crate::types::resultset::ResultSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Short rows leave columns absent, rows with an empty key field are
    /// dropped with a warning. A few malformed rows never block the rest.
    #[default]
    Lenient,
    /// Any width mismatch or missing key field fails the whole decode.
    Strict,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Line {0} has {1} values but the header declares {2} columns")]
    RowWidthMismatch(usize, usize, usize),
    #[error("Line {0} is missing the 'source' key field")]
    MissingKeyField(usize),
}

/// Decodes delimited text into a ResultSet. Line 1 is the header defining
/// the column set, each later line is zipped against it. The format has no
/// quoting rules, so values must not contain the delimiter or terminator.
pub fn decode(text: &str, mode: DecodeMode) -> Result<ResultSet, DecodeError> {
    let mut lines = text.split(RECORD_TERMINATOR);

    let columns: Vec<String> = match lines.next() {
        Some(header) if !header.trim().is_empty() => header
            .split(FIELD_DELIMITER)
            .map(ToOwned::to_owned)
            .collect(),
        _ => return Ok(ResultSet::default()),
    };

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        // 1-based, counting the header
        let line_number = index + 2;
        if line.is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if mode == DecodeMode::Strict && values.len() != columns.len() {
            return Err(DecodeError::RowWidthMismatch(
                line_number,
                values.len(),
                columns.len(),
            ));
        }

        let mut record = LogRecord::new();
        for (column, value) in columns.iter().zip(values) {
            record.insert(column, value);
        }

        match record.get(FIELD_SOURCE).map(str::trim) {
            Some(source) if !source.is_empty() => records.push(record),
            _ => {
                if mode == DecodeMode::Strict {
                    return Err(DecodeError::MissingKeyField(line_number));
                }
                warn!("Dropping line {}: empty '{}' field", line_number, FIELD_SOURCE);
            }
        }
    }

    Ok(ResultSet { columns, records })
}
