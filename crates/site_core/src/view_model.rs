use crate::text::{
    truncate, COMPANY_BUDGET, EVENT_DESCRIPTION_BUDGET, EXTRA_VALUE_BUDGET, LOCATION_BUDGET,
    TITLE_BUDGET,
};
use crate::{normalize, EventId, EventRecord, IconCategory, JobRecord, JobsPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobsViewModel {
    Loading,
    Failed { message: String },
    Empty,
    Listing { cards: Vec<JobCardView> },
}

impl JobsViewModel {
    pub(crate) fn from_phase(phase: &JobsPhase) -> Self {
        match phase {
            JobsPhase::Idle | JobsPhase::Loading => JobsViewModel::Loading,
            JobsPhase::Failed(message) => JobsViewModel::Failed {
                message: message.clone(),
            },
            JobsPhase::Loaded(records) if records.is_empty() => JobsViewModel::Empty,
            JobsPhase::Loaded(records) => JobsViewModel::Listing {
                cards: records.iter().map(JobCardView::from_record).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub extras: Vec<ExtraFieldView>,
    /// Only set for absolute http(s) links; anything else renders the
    /// disabled "no link" button.
    pub link: Option<String>,
}

impl JobCardView {
    pub fn from_record(record: &JobRecord) -> Self {
        let job = normalize(record);
        Self {
            title: truncate(&job.title, TITLE_BUDGET),
            company: job.company.map(|c| truncate(&c, COMPANY_BUDGET)),
            location: job.location.map(|l| truncate(&l, LOCATION_BUDGET)),
            extras: job
                .extras
                .into_iter()
                .map(|field| ExtraFieldView {
                    label: field.label,
                    value: truncate(&field.value, EXTRA_VALUE_BUDGET),
                    icon: field.icon,
                })
                .collect(),
            link: job.link.as_deref().and_then(web_link),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraFieldView {
    pub label: String,
    pub value: String,
    pub icon: IconCategory,
}

/// Returns the trimmed link if it is an absolute http or https URL.
pub fn web_link(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventsContent {
    Loading,
    Failed { message: String },
    Empty,
    Listing { cards: Vec<EventCardView> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsViewModel {
    pub content: EventsContent,
    pub modal: Option<RegistrationModalView>,
}

impl EventsViewModel {
    pub(crate) fn build(
        events: Option<&[EventRecord]>,
        error: Option<&str>,
        selected: Option<&EventId>,
        registration_failed: bool,
    ) -> Self {
        let content = match (events, error) {
            (Some([]), _) => EventsContent::Empty,
            (Some(events), _) => EventsContent::Listing {
                cards: events
                    .iter()
                    .map(|event| EventCardView::from_record(event, selected))
                    .collect(),
            },
            (None, Some(message)) => EventsContent::Failed {
                message: message.to_string(),
            },
            (None, None) => EventsContent::Loading,
        };

        let modal = selected.map(|event_id| RegistrationModalView {
            event_id: event_id.clone(),
            event_title: events
                .and_then(|list| list.iter().find(|event| &event.id == event_id))
                .map(|event| event.title.clone()),
            failed: registration_failed,
        });

        Self { content, modal }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCardView {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub image_url: Option<String>,
    pub selected: bool,
}

impl EventCardView {
    fn from_record(event: &EventRecord, selected: Option<&EventId>) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: truncate(&event.description, EVENT_DESCRIPTION_BUDGET),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            image_url: event.image_url.as_deref().and_then(web_link),
            selected: selected == Some(&event.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationModalView {
    pub event_id: EventId,
    /// Known only when the selected id is among the loaded events.
    pub event_title: Option<String>,
    pub failed: bool,
}
