use std::fmt;

use site_core::{EventRecord, JobRecord};

use crate::RegistrationRequest;

/// Work the engine can run on behalf of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    FetchJobs,
    QueryPublishedEvents,
    SubmitRegistration(RegistrationRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    JobsFetched(Result<Vec<JobRecord>, FetchError>),
    EventsQueried(Result<Vec<EventRecord>, FetchError>),
    RegistrationSubmitted(Result<(), FetchError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn http_status(code: u16) -> Self {
        Self::new(
            FailureKind::HttpStatus(code),
            format!("Failed to fetch data: {code}"),
        )
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    Decode,
    Backend,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Backend => write!(f, "backend error"),
        }
    }
}
