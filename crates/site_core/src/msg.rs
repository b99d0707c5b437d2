use crate::{EventId, EventRecord, JobRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobsMsg {
    /// The jobs page was requested.
    Mounted,
    /// The spreadsheet API answered with a list of rows.
    Loaded(Vec<JobRecord>),
    /// The request failed; carries the user-visible message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventsMsg {
    /// The events page was requested.
    Mounted,
    /// The published-events query produced a (possibly updated) result.
    Resolved(Vec<EventRecord>),
    /// The query failed.
    Failed(String),
    /// User picked an event to register for.
    RegisterClicked(EventId),
    /// User cancelled the registration modal, or it completed.
    RegistrationClosed,
    /// The backend rejected the last registration attempt.
    RegistrationFailed,
}
