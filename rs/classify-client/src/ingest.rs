use thiserror::Error;
use tracing::debug;

use crate::constant::CSV_MEDIA_TYPE;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IngestError {
    #[error("Invalid file type '{0}'. Please upload a CSV file.")]
    InvalidFileType(String),
}

/// A file as handed over by the user, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// A candidate that passed the ingest gate and may be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Admits a candidate only if its declared media type is the CSV type.
/// Rejection carries a user-facing message; the caller is responsible for
/// surfacing it and dropping any previously accepted file reference.
pub fn accept(candidate: FileCandidate) -> Result<AcceptedFile, IngestError> {
    if candidate.media_type != CSV_MEDIA_TYPE {
        return Err(IngestError::InvalidFileType(candidate.media_type));
    }
    debug!(
        "Accepted file '{}' ({} bytes)",
        candidate.name,
        candidate.bytes.len()
    );
    Ok(AcceptedFile {
        name: candidate.name,
        bytes: candidate.bytes,
    })
}
