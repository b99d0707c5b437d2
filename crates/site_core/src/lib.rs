//! Site core: record normalization, field classification and the pure page
//! state machines behind the jobs and events pages.
mod effect;
mod field;
mod msg;
mod record;
mod state;
mod text;
mod update;
mod view_model;

pub use effect::Effect;
pub use field::{classify, DisplayField, IconCategory};
pub use msg::{EventsMsg, JobsMsg};
pub use record::{
    is_truthy, normalize, EventId, EventRecord, JobRecord, NormalizedJob, KNOWN_JOB_KEYS,
    UNTITLED_POSITION,
};
pub use state::{EventsState, JobsPhase, JobsState, FALLBACK_ERROR_MESSAGE};
pub use text::{
    truncate, COMPANY_BUDGET, ELLIPSIS, EVENT_DESCRIPTION_BUDGET, EXTRA_VALUE_BUDGET,
    LOCATION_BUDGET, TITLE_BUDGET,
};
pub use update::{update_events, update_jobs};
pub use view_model::{
    web_link, EventCardView, EventsContent, EventsViewModel, ExtraFieldView, JobCardView,
    JobsViewModel, RegistrationModalView,
};
