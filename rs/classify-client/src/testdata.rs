use crate::constant::{FIELD_LOG_MESSAGE, FIELD_SOURCE, FIELD_TARGET_LABEL};
use crate::types::record::LogRecord;
use crate::types::resultset::ResultSet;

/// The ten-record demonstration table shown before the first submission.
pub const SAMPLE_ROWS: [(&str, &str, &str); 10] = [
    (
        "ModernCRM",
        "IP 192.168.133.114 blocked due to potential attack",
        "Security Alert",
    ),
    ("BillingSystem", "User 12345 logged in.", "Security Alert"),
    (
        "AnalyticsEngine",
        "File data_6957.csv uploaded successfully by user User265.",
        "System Notification",
    ),
    (
        "AnalyticsEngine",
        "Backup completed successfully.",
        "System Notification",
    ),
    (
        "ModernHR",
        "GET /v2/54fadb412c4e40cdbaed9335e4c35a9e/servers/detail HTTP/1.1 RCODE 200 len: 1583 time: 0.1878400",
        "HTTP Status",
    ),
    (
        "ModernHR",
        "Admin access escalation detected for user 9429",
        "Security Alert",
    ),
    (
        "LegacyCRM",
        "Case escalation for ticket ID 7324 failed because the assigned support agent is no longer active.",
        "Workflow Error",
    ),
    (
        "LegacyCRM",
        "Invoice generation process aborted for order ID 8910 due to invalid tax calculation module.",
        "Workflow Error",
    ),
    (
        "LegacyCRM",
        "The 'BulkEmailSender' feature is no longer supported. Use 'EmailCampaignManager' for improved functionality.",
        "Deprecation Warning",
    ),
    (
        "LegacyCRM",
        "The 'ReportGenerator' module will be retired in version 4.0. Please migrate to the 'AdvancedAnalyticsSuite' by Dec 2025",
        "Deprecation Warning",
    ),
];

pub fn sample_result_set() -> ResultSet {
    let mut set = ResultSet::new(vec![
        FIELD_SOURCE.to_owned(),
        FIELD_LOG_MESSAGE.to_owned(),
        FIELD_TARGET_LABEL.to_owned(),
    ]);
    for (source, log_message, target_label) in SAMPLE_ROWS {
        set.push(LogRecord::from_pairs(&[
            (FIELD_SOURCE, source),
            (FIELD_LOG_MESSAGE, log_message),
            (FIELD_TARGET_LABEL, target_label),
        ]));
    }
    set
}
