use crate::mock_classifier::build_mock_classifier;
use crate::util::{
    generate_random_filename, get_multipart_stream, get_test_client, post_test_stream,
    unlabeled_sample_csv,
};
use classify_client::codec::decode::{decode, DecodeMode};
use classify_client::setup_tracing;
use rstest::rstest;

#[tokio::test]
async fn mock_endpoint_labels_uploaded_logs() {
    setup_tracing();
    let client = get_test_client(build_mock_classifier()).await.unwrap();

    let stream = get_multipart_stream(&generate_random_filename(), &unlabeled_sample_csv());
    let (status, body) = post_test_stream(&client, "/classify", stream).await;
    assert_eq!(status.code, 200);

    let set = decode(&body.unwrap(), DecodeMode::Strict).unwrap();
    assert_eq!(set.len(), 10);
    assert_eq!(set.columns, vec!["source", "log_message", "target_label"]);
    assert_eq!(set.records[0].get("target_label"), Some("Security Alert"));
    assert_eq!(set.records[9].get("target_label"), Some("Deprecation Warning"));
}

#[rstest]
#[case("message\nhello\n")]
#[case("log_message\nsource column is missing\n")]
#[case("source\nlog_message column is missing\n")]
#[tokio::test]
async fn mock_endpoint_rejects_missing_columns(#[case] csv: &str) {
    setup_tracing();
    let client = get_test_client(build_mock_classifier()).await.unwrap();

    let stream = get_multipart_stream("no-columns.csv", csv);
    let (status, _) = post_test_stream(&client, "/classify", stream).await;
    assert_eq!(status.code, 400);
}

#[tokio::test]
async fn mock_endpoint_rejects_unexpected_field_name() {
    setup_tracing();
    let client = get_test_client(build_mock_classifier()).await.unwrap();

    let boundary_stream = get_multipart_stream("logs.csv", &unlabeled_sample_csv())
        .replace("name=\"file\"", "name=\"payload\"");
    let (status, _) = post_test_stream(&client, "/classify", boundary_stream).await;
    assert_eq!(status.code, 400);
}
