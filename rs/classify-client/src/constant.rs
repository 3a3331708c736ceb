// classification service
pub const CLASSIFY_BASE_URL: &str = "http://127.0.0.1:8000";
pub const CLASSIFY_ROUTE: &str = "/classify";
pub const MULTIPART_FILE_FIELD: &str = "file";

// delimited-text format
pub const CSV_MEDIA_TYPE: &str = "text/csv";
pub const FIELD_DELIMITER: &str = ",";
pub const RECORD_TERMINATOR: &str = "\n";

// record schema
pub const FIELD_SOURCE: &str = "source";
pub const FIELD_LOG_MESSAGE: &str = "log_message";
pub const FIELD_TARGET_LABEL: &str = "target_label";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_SEVERITY: &str = "severity";

// equality-filter fields, checked in this priority order
pub const FILTER_FIELDS: [&str; 3] = [FIELD_CATEGORY, FIELD_SEVERITY, FIELD_TARGET_LABEL];

// export
pub const EXPORT_FILENAME: &str = "classified_logs.csv";
