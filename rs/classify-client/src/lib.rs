pub mod client;
pub mod codec;
pub mod constant;
pub mod error;
pub mod export;
pub mod filter;
pub mod ingest;
pub mod session;
pub mod store;
pub mod testdata;
pub mod tracing;
pub mod types;

// codec
pub use crate::codec::decode::{decode, DecodeError, DecodeMode};
pub use crate::codec::encode::encode;

// client
pub use crate::client::{ClassificationClient, TransportError};

// ingest
pub use crate::ingest::{accept, AcceptedFile, FileCandidate, IngestError};

// filter
pub use crate::filter::{apply, filter_options, FilterQuery};

// export
pub use crate::export::{export, ExportArtifact};

// session
pub use crate::session::{ClassifySession, SessionError, SubmissionState, SubmissionTicket};
pub use crate::store::RecordStore;

// types
pub use crate::types::record::LogRecord;
pub use crate::types::resultset::ResultSet;

// util
pub use crate::error::ClassifyError;
pub use crate::tracing::setup::setup_tracing;
