use thiserror::Error;

use crate::client::TransportError;
use crate::codec::decode::DecodeError;
use crate::ingest::IngestError;
use crate::session::SessionError;

/// Top-level pipeline error. Every variant is recoverable: the prior
/// ResultSet is left intact and control returns to the user.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Invalid file: {0}")]
    Ingest(#[from] IngestError),
    #[error("Classification failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Failed to decode classified data: {0}")]
    Decode(#[from] DecodeError),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}
