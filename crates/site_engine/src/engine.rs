use std::sync::Arc;

use site_logging::{site_info, site_warn};
use tokio::sync::oneshot;

use crate::convex::{ConvexClient, ConvexSettings, EventSource, RegistrationSink};
use crate::fetch::{http_client, FetchSettings, JobSource, SheetJobSource};
use crate::{EngineCommand, EngineEvent, FetchError};

#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub fetch: FetchSettings,
    pub jobs_api_url: String,
    pub convex: ConvexSettings,
}

/// Runs engine commands on the tokio runtime.
///
/// Each dispatched command gets its own task and answers through a one-shot
/// channel. Dropping the receiver abandons the result; the request itself is
/// not aborted.
#[derive(Clone)]
pub struct EngineHandle {
    jobs: Arc<dyn JobSource>,
    events: Arc<dyn EventSource>,
    registrations: Arc<dyn RegistrationSink>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, FetchError> {
        let client = http_client(&settings.fetch)?;
        let max_bytes = settings.fetch.max_bytes;
        let jobs = SheetJobSource::new(client.clone(), settings.jobs_api_url, max_bytes);
        let convex = Arc::new(ConvexClient::new(client, settings.convex, max_bytes));
        Ok(Self::with_sources(Arc::new(jobs), convex.clone(), convex))
    }

    pub fn with_sources(
        jobs: Arc<dyn JobSource>,
        events: Arc<dyn EventSource>,
        registrations: Arc<dyn RegistrationSink>,
    ) -> Self {
        Self {
            jobs,
            events,
            registrations,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, command: EngineCommand) -> oneshot::Receiver<EngineEvent> {
        let (event_tx, event_rx) = oneshot::channel();
        let engine = self.clone();
        tokio::spawn(async move {
            let event = engine.run(command).await;
            if event_tx.send(event).is_err() {
                site_info!("Dropping engine result; the page was already rendered");
            }
        });
        event_rx
    }

    /// Runs a command to completion on the current task.
    pub async fn run(&self, command: EngineCommand) -> EngineEvent {
        match command {
            EngineCommand::FetchJobs => {
                let result = self.jobs.fetch_jobs().await;
                log_failure("jobs fetch", &result);
                EngineEvent::JobsFetched(result)
            }
            EngineCommand::QueryPublishedEvents => {
                let result = self.events.published_events().await;
                log_failure("events query", &result);
                EngineEvent::EventsQueried(result)
            }
            EngineCommand::SubmitRegistration(request) => {
                let result = self.registrations.register(&request).await;
                log_failure("registration", &result);
                EngineEvent::RegistrationSubmitted(result)
            }
        }
    }
}

fn log_failure<T>(what: &str, result: &Result<T, FetchError>) {
    if let Err(err) = result {
        site_warn!("{} failed: {}", what, err);
    }
}
