use crate::{Effect, EventsMsg, EventsState, JobsMsg, JobsState};

/// Pure update function for the jobs page: applies a message to state and
/// returns any effects.
pub fn update_jobs(mut state: JobsState, msg: JobsMsg) -> (JobsState, Vec<Effect>) {
    let effects = match msg {
        JobsMsg::Mounted => {
            if state.start_loading() {
                vec![Effect::FetchJobs]
            } else {
                Vec::new()
            }
        }
        JobsMsg::Loaded(records) => {
            state.apply_loaded(records);
            Vec::new()
        }
        JobsMsg::Failed(message) => {
            state.apply_failed(message);
            Vec::new()
        }
    };

    (state, effects)
}

/// Pure update function for the events page.
pub fn update_events(mut state: EventsState, msg: EventsMsg) -> (EventsState, Vec<Effect>) {
    let effects = match msg {
        EventsMsg::Mounted => {
            if state.mount() {
                vec![Effect::QueryPublishedEvents]
            } else {
                Vec::new()
            }
        }
        EventsMsg::Resolved(events) => {
            state.apply_resolved(events);
            Vec::new()
        }
        EventsMsg::Failed(message) => {
            state.apply_failed(message);
            Vec::new()
        }
        EventsMsg::RegisterClicked(event_id) => {
            // Single modal: a new pick replaces the previous one.
            state.select(event_id);
            Vec::new()
        }
        EventsMsg::RegistrationClosed => {
            state.clear_selection();
            Vec::new()
        }
        EventsMsg::RegistrationFailed => {
            state.mark_registration_failed();
            Vec::new()
        }
    };

    (state, effects)
}
