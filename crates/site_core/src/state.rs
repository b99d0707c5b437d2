use crate::view_model::{EventsViewModel, JobsViewModel};
use crate::{EventId, EventRecord, JobRecord};

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load data";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JobsPhase {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<JobRecord>),
    Failed(String),
}

/// Fetch lifecycle of the jobs page. One instance per page request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobsState {
    phase: JobsPhase,
}

impl JobsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &JobsPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, JobsPhase::Loading)
    }

    pub fn view(&self) -> JobsViewModel {
        JobsViewModel::from_phase(&self.phase)
    }

    /// Returns false if a request was already issued for this state.
    pub(crate) fn start_loading(&mut self) -> bool {
        if self.phase == JobsPhase::Idle {
            self.phase = JobsPhase::Loading;
            true
        } else {
            false
        }
    }

    pub(crate) fn apply_loaded(&mut self, records: Vec<JobRecord>) {
        if self.is_loading() {
            self.phase = JobsPhase::Loaded(records);
        }
    }

    pub(crate) fn apply_failed(&mut self, message: String) {
        if self.is_loading() {
            self.phase = JobsPhase::Failed(non_empty_message(message));
        }
    }
}

/// Subscription state of the events page. `events == None` means the query
/// has not produced a result yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventsState {
    mounted: bool,
    events: Option<Vec<EventRecord>>,
    error: Option<String>,
    selected: Option<EventId>,
    registration_failed: bool,
}

impl EventsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Option<&[EventRecord]> {
        self.events.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&EventId> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.events.is_none() && self.error.is_none()
    }

    pub fn view(&self) -> EventsViewModel {
        EventsViewModel::build(
            self.events.as_deref(),
            self.error.as_deref(),
            self.selected.as_ref(),
            self.registration_failed,
        )
    }

    pub(crate) fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    pub(crate) fn apply_resolved(&mut self, events: Vec<EventRecord>) {
        self.events = Some(events);
        self.error = None;
    }

    pub(crate) fn apply_failed(&mut self, message: String) {
        self.error = Some(non_empty_message(message));
    }

    pub(crate) fn select(&mut self, event_id: EventId) {
        self.selected = Some(event_id);
        self.registration_failed = false;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.registration_failed = false;
    }

    pub(crate) fn mark_registration_failed(&mut self) {
        if self.selected.is_some() {
            self.registration_failed = true;
        }
    }
}

fn non_empty_message(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
