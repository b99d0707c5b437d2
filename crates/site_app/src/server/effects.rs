use std::time::Duration;

use site_core::{
    update_events, update_jobs, Effect, EventId, EventsMsg, EventsState, JobsMsg, JobsState,
};
use site_engine::{EngineCommand, EngineEvent, EngineHandle, RegistrationRequest};
use site_logging::{site_debug, site_error, site_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Accepted,
    Rejected,
}

/// Drives a page state machine for one request: feeds it the mount message,
/// runs the effects it asks for on the engine and feeds the results back.
#[derive(Clone)]
pub struct EffectRunner {
    engine: EngineHandle,
    deadline: Duration,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, deadline: Duration) -> Self {
        Self { engine, deadline }
    }

    /// Returns the jobs page state once its data arrived, or still loading if
    /// the deadline passed first.
    pub async fn mount_jobs(&self) -> JobsState {
        let (mut state, mut pending) = update_jobs(JobsState::new(), JobsMsg::Mounted);
        while let Some(effect) = pending.pop() {
            let Some(event) = self.run(effect).await else {
                break;
            };
            let Some(msg) = jobs_msg(event) else {
                continue;
            };
            let (next, effects) = update_jobs(state, msg);
            state = next;
            pending.extend(effects);
        }
        state
    }

    /// Same as [`EffectRunner::mount_jobs`] for the events page. `selected`
    /// and `registration_failed` come from the request and are applied before
    /// the query runs.
    pub async fn mount_events(
        &self,
        selected: Option<EventId>,
        registration_failed: bool,
    ) -> EventsState {
        let mut intents = Vec::new();
        if let Some(event_id) = selected {
            intents.push(EventsMsg::RegisterClicked(event_id));
            if registration_failed {
                intents.push(EventsMsg::RegistrationFailed);
            }
        }

        let (mut state, mut pending) = update_events(EventsState::new(), EventsMsg::Mounted);
        for msg in intents {
            let (next, effects) = update_events(state, msg);
            state = next;
            pending.extend(effects);
        }

        while let Some(effect) = pending.pop() {
            let Some(event) = self.run(effect).await else {
                break;
            };
            let Some(msg) = events_msg(event) else {
                continue;
            };
            let (next, effects) = update_events(state, msg);
            state = next;
            pending.extend(effects);
        }
        state
    }

    /// Waits for the backend's answer. Only the client's request timeout
    /// bounds the wait, never the render deadline.
    pub async fn submit_registration(&self, request: RegistrationRequest) -> RegistrationOutcome {
        let event_id = request.event_id.clone();
        let receiver = self
            .engine
            .dispatch(EngineCommand::SubmitRegistration(request));
        match receiver.await {
            Ok(EngineEvent::RegistrationSubmitted(Ok(()))) => {
                site_info!("Registration for event {} accepted", event_id);
                RegistrationOutcome::Accepted
            }
            Ok(EngineEvent::RegistrationSubmitted(Err(err))) => {
                site_info!("Registration for event {} rejected: {}", event_id, err);
                RegistrationOutcome::Rejected
            }
            Ok(other) => {
                site_error!("Unexpected engine event for registration: {:?}", other);
                RegistrationOutcome::Rejected
            }
            Err(_) => {
                site_error!("Engine task ended without a registration result");
                RegistrationOutcome::Rejected
            }
        }
    }

    async fn run(&self, effect: Effect) -> Option<EngineEvent> {
        site_debug!("Running effect {:?}", effect);
        self.await_event(map_effect(effect)).await
    }

    async fn await_event(&self, command: EngineCommand) -> Option<EngineEvent> {
        let receiver = self.engine.dispatch(command);
        match tokio::time::timeout(self.deadline, receiver).await {
            Ok(Ok(event)) => Some(event),
            Ok(Err(_)) => {
                site_error!("Engine task ended without a result");
                None
            }
            Err(_) => {
                site_info!(
                    "No upstream answer within {:?}; rendering loading state",
                    self.deadline
                );
                None
            }
        }
    }
}

fn map_effect(effect: Effect) -> EngineCommand {
    match effect {
        Effect::FetchJobs => EngineCommand::FetchJobs,
        Effect::QueryPublishedEvents => EngineCommand::QueryPublishedEvents,
    }
}

fn jobs_msg(event: EngineEvent) -> Option<JobsMsg> {
    match event {
        EngineEvent::JobsFetched(Ok(records)) => Some(JobsMsg::Loaded(records)),
        EngineEvent::JobsFetched(Err(err)) => Some(JobsMsg::Failed(err.message)),
        _ => None,
    }
}

fn events_msg(event: EngineEvent) -> Option<EventsMsg> {
    match event {
        EngineEvent::EventsQueried(Ok(events)) => Some(EventsMsg::Resolved(events)),
        EngineEvent::EventsQueried(Err(err)) => Some(EventsMsg::Failed(err.message)),
        _ => None,
    }
}
