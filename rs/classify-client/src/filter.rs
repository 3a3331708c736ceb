use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constant::FILTER_FIELDS;
use crate::types::record::LogRecord;
use crate::types::resultset::ResultSet;

/// Free-text search combined with at most one equality filter. The search
/// matches any field's string form case-insensitively; the equality filter
/// is checked against `category`, `severity` and `target_label`. Both must
/// match for a record to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub search: String,
    pub selected: Option<String>,
}

impl FilterQuery {
    pub fn search(text: impl Into<String>) -> Self {
        FilterQuery {
            search: text.into(),
            selected: None,
        }
    }

    pub fn selected(value: impl Into<String>) -> Self {
        FilterQuery {
            search: String::new(),
            selected: Some(value.into()),
        }
    }
}

/// Projects a ResultSet through a query without mutating it. Output order
/// is input order; no resort.
pub fn apply(set: &ResultSet, query: &FilterQuery) -> ResultSet {
    let needle = query.search.to_lowercase();
    let records = set
        .records
        .iter()
        .filter(|record| {
            search_match(record, &needle) && filter_match(record, query.selected.as_deref())
        })
        .cloned()
        .collect();
    ResultSet {
        columns: set.columns.clone(),
        records,
    }
}

fn search_match(record: &LogRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .field_texts()
        .any(|text| text.to_lowercase().contains(needle))
}

fn filter_match(record: &LogRecord, selected: Option<&str>) -> bool {
    match selected {
        Some(selected) => FILTER_FIELDS
            .iter()
            .any(|field| record.get(field) == Some(selected)),
        None => true,
    }
}

/// The distinct equality-filter options of a ResultSet: unique non-empty
/// values from `category`, then `severity`, then `target_label`, first-seen
/// order. Recomputed from the current set whenever it changes.
pub fn filter_options(set: &ResultSet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for field in FILTER_FIELDS {
        for record in set.iter() {
            if let Some(value) = record.get(field) {
                if !value.is_empty() && seen.insert(value.to_owned()) {
                    options.push(value.to_owned());
                }
            }
        }
    }
    options
}
