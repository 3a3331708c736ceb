use crate::constant::{FIELD_DELIMITER, RECORD_TERMINATOR};
use crate::types::resultset::ResultSet;

/// Encodes a ResultSet back to delimited text: the column set as header
/// line, then every record projected onto exactly that column order. Absent
/// values encode as empty fields. No quoting, matching the service format.
pub fn encode(set: &ResultSet) -> String {
    let mut lines = Vec::with_capacity(set.records.len() + 1);
    lines.push(set.columns.join(FIELD_DELIMITER));

    for record in &set.records {
        let row: Vec<&str> = set
            .columns
            .iter()
            .map(|column| record.get(column).unwrap_or(""))
            .collect();
        lines.push(row.join(FIELD_DELIMITER));
    }

    lines.join(RECORD_TERMINATOR)
}
