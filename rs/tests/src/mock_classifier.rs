use classify_client::codec::decode::{decode, DecodeError, DecodeMode};
use classify_client::codec::encode::encode;
use classify_client::constant::{
    FIELD_LOG_MESSAGE, FIELD_SOURCE, FIELD_TARGET_LABEL, MULTIPART_FILE_FIELD,
};
use classify_client::types::resultset::ResultSet;
use multipart::server::Multipart;
use rocket::data::ToByteUnit;
use rocket::http::{ContentType, Status};
use rocket::response::Responder;
use rocket::{post, routes, Build, Data, Request, Response, Rocket};
use std::io::{Cursor, Read};
use std::ops::Deref;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum MockClassifyError {
    #[error("Failed to stream data: {0}")]
    StreamData(#[source] std::io::Error),
    #[error("Missing boundary in content type")]
    MissingBoundary,
    #[error("Failed to read multipart field: {0}")]
    ReadField(#[source] std::io::Error),
    #[error("Unexpected field name: {0}")]
    UnexpectedFieldName(String),
    #[error("Multipart data missing")]
    NoFields,
    #[error("Upload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Invalid CSV format: {0}")]
    InvalidCsv(#[from] DecodeError),
    #[error("CSV must contain 'source' and 'log_message' columns")]
    MissingColumns,
}

impl From<&MockClassifyError> for Status {
    fn from(error: &MockClassifyError) -> Self {
        match error {
            MockClassifyError::StreamData(_) | MockClassifyError::ReadField(_) => {
                Status::InternalServerError
            }
            _ => Status::BadRequest,
        }
    }
}

impl<'r> Responder<'r, 'static> for MockClassifyError {
    fn respond_to(self, _: &'r Request<'_>) -> Result<Response<'static>, Status> {
        error!("Mock classifier error: {}", self);
        let body = format!("{}", self);
        let status = Status::from(&self);
        Response::build()
            .status(status)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

// Keyword rules standing in for the real pattern/embedding/LLM stages.
fn label_for(log_message: &str) -> &'static str {
    let message = log_message.to_lowercase();
    if message.contains("blocked")
        || message.contains("logged in")
        || message.contains("escalation detected")
    {
        "Security Alert"
    } else if message.contains("no longer supported") || message.contains("retired") {
        "Deprecation Warning"
    } else if message.contains("failed") || message.contains("aborted") {
        "Workflow Error"
    } else if message.contains("http/1.1") || message.contains("rcode") {
        "HTTP Status"
    } else if message.contains("uploaded") || message.contains("completed") {
        "System Notification"
    } else {
        "Unclassified"
    }
}

#[post("/classify", data = "<data>")]
pub async fn classify_route(
    content_type: &ContentType,
    data: Data<'_>,
) -> Result<(ContentType, String), MockClassifyError> {
    let mut body = Vec::new();
    data.open(32_u64.mebibytes())
        .stream_to(&mut body)
        .await
        .map_err(MockClassifyError::StreamData)?;

    let boundary = content_type
        .params()
        .find(|(k, _)| k == "boundary")
        .map(|(_, v)| v)
        .ok_or(MockClassifyError::MissingBoundary)?;

    let mut multipart = Multipart::with_body(Cursor::new(body), boundary);
    let mut upload: Option<String> = None;

    while let Ok(Some(mut field)) = multipart.read_entry() {
        match field.headers.name.deref() {
            MULTIPART_FILE_FIELD => {
                let mut buffer = Vec::new();
                field
                    .data
                    .read_to_end(&mut buffer)
                    .map_err(MockClassifyError::ReadField)?;
                upload = Some(String::from_utf8(buffer)?);
            }
            other => return Err(MockClassifyError::UnexpectedFieldName(other.to_owned())),
        }
    }
    let upload = upload.ok_or(MockClassifyError::NoFields)?;

    let set = decode(&upload, DecodeMode::Lenient)?;
    let has = |name: &str| set.columns.iter().any(|column| column == name);
    if !has(FIELD_SOURCE) || !has(FIELD_LOG_MESSAGE) {
        return Err(MockClassifyError::MissingColumns);
    }

    let mut columns = set.columns.clone();
    if !columns.iter().any(|column| column == FIELD_TARGET_LABEL) {
        columns.push(FIELD_TARGET_LABEL.to_owned());
    }
    let mut labeled = ResultSet::new(columns);
    for record in set.iter() {
        let mut record = record.clone();
        let label = label_for(record.get(FIELD_LOG_MESSAGE).unwrap_or(""));
        record.insert(FIELD_TARGET_LABEL, label);
        labeled.push(record);
    }

    Ok((ContentType::CSV, encode(&labeled)))
}

pub fn build_mock_classifier() -> Rocket<Build> {
    rocket::build().mount("/", routes![classify_route])
}

pub fn mock_classifier_on_port(port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", "127.0.0.1"))
        .merge(("port", port))
        .merge(("log_level", "critical"));
    rocket::custom(figment).mount("/", routes![classify_route])
}
