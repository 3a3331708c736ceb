use parking_lot::Mutex;
use thiserror::Error;
use tracing::{info, warn};

use crate::client::ClassificationClient;
use crate::codec::decode::{decode, DecodeMode};
use crate::error::ClassifyError;
use crate::ingest::AcceptedFile;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting {
        request_id: u64,
    },
    Succeeded,
    Failed,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("A submission is already in flight")]
    SubmissionInFlight,
    #[error("Response for request {0} is stale and was discarded")]
    StaleResponse(u64),
}

/// Receipt for one submission. complete() and fail() check it against the
/// latest request id, so a response arriving after the user moved on can
/// never clobber a newer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    request_id: u64,
}

#[derive(Default)]
struct SessionInner {
    state: SubmissionState,
    last_request_id: u64,
}

/// Session-scoped pipeline state: the single current ResultSet and the
/// in-flight submission flag, held explicitly instead of as ambient UI
/// state. One submission at a time per session, not per file.
#[derive(Default)]
pub struct ClassifySession {
    store: RecordStore,
    inner: Mutex<SessionInner>,
}

impl ClassifySession {
    pub fn new() -> Self {
        ClassifySession::default()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.lock().state
    }

    /// Starts a submission, enforcing single-flight.
    pub fn begin(&self) -> Result<SubmissionTicket, SessionError> {
        let mut inner = self.inner.lock();
        if let SubmissionState::Submitting { .. } = inner.state {
            return Err(SessionError::SubmissionInFlight);
        }
        inner.last_request_id += 1;
        let request_id = inner.last_request_id;
        inner.state = SubmissionState::Submitting { request_id };
        info!("Submission {} started", request_id);
        Ok(SubmissionTicket { request_id })
    }

    /// Decodes the response and atomically replaces the stored ResultSet.
    /// A ticket that is no longer the latest is discarded untouched.
    pub fn complete(
        &self,
        ticket: SubmissionTicket,
        response_text: &str,
    ) -> Result<(), ClassifyError> {
        let mut inner = self.inner.lock();
        if inner.last_request_id != ticket.request_id {
            warn!("Discarding stale response for request {}", ticket.request_id);
            return Err(SessionError::StaleResponse(ticket.request_id).into());
        }
        let set = decode(response_text, DecodeMode::Lenient)?;
        info!(
            "Submission {} classified {} records",
            ticket.request_id,
            set.len()
        );
        self.store.replace(set);
        inner.state = SubmissionState::Succeeded;
        Ok(())
    }

    /// Marks the submission failed. The stored ResultSet is left untouched.
    pub fn fail(&self, ticket: SubmissionTicket) {
        let mut inner = self.inner.lock();
        if inner.last_request_id != ticket.request_id {
            warn!("Ignoring stale failure for request {}", ticket.request_id);
            return;
        }
        inner.state = SubmissionState::Failed;
    }

    /// The full round-trip: begin, submit, then complete or fail.
    pub async fn classify(
        &self,
        client: &ClassificationClient,
        file: AcceptedFile,
    ) -> Result<(), ClassifyError> {
        let ticket = self.begin()?;
        match client.submit(&file).await {
            Ok(text) => self.complete(ticket, &text),
            Err(error) => {
                warn!("Submission {:?} failed: {}", ticket, error);
                self.fail(ticket);
                Err(error.into())
            }
        }
    }
}
