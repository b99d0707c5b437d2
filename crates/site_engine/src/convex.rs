use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::json;
use site_core::{EventId, EventRecord};
use site_logging::{site_debug, site_warn};

use crate::fetch::{map_reqwest_error, read_body};
use crate::{decode_convex_reply, DecodeError, FailureKind, FetchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexSettings {
    /// Deployment URL, e.g. `https://happy-otter-123.convex.cloud`.
    pub url: String,
    pub events_query: String,
    pub registration_mutation: String,
}

impl Default for ConvexSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            events_query: "events:getPublishedEvents".to_string(),
            registration_mutation: "registrations:register".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait EventSource: Send + Sync {
    /// Published events in backend order. The backend does the filtering.
    async fn published_events(&self) -> Result<Vec<EventRecord>, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
}

#[async_trait::async_trait]
pub trait RegistrationSink: Send + Sync {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), FetchError>;
}

/// Minimal client for the Convex HTTP function API.
#[derive(Debug, Clone)]
pub struct ConvexClient {
    client: reqwest::Client,
    settings: ConvexSettings,
    max_bytes: u64,
}

#[derive(Debug, Clone, Copy)]
enum FunctionKind {
    Query,
    Mutation,
}

impl FunctionKind {
    fn route(self) -> &'static str {
        match self {
            FunctionKind::Query => "query",
            FunctionKind::Mutation => "mutation",
        }
    }
}

impl ConvexClient {
    pub fn new(client: reqwest::Client, settings: ConvexSettings, max_bytes: u64) -> Self {
        Self {
            client,
            settings,
            max_bytes,
        }
    }

    fn endpoint(&self, kind: FunctionKind) -> Result<reqwest::Url, FetchError> {
        let base = self.settings.url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                "events backend URL is not configured",
            ));
        }
        reqwest::Url::parse(&format!("{base}/api/{}", kind.route()))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn call<T: DeserializeOwned>(
        &self,
        kind: FunctionKind,
        path: &str,
        args: serde_json::Value,
    ) -> Result<T, FetchError> {
        let endpoint = self.endpoint(kind)?;
        let body = json!({ "path": path, "args": args, "format": "json" });
        let payload = serde_json::to_vec(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        site_debug!("Calling {} {} at {}", kind.route(), path, endpoint);
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(status.as_u16()));
        }

        let bytes = read_body(response, self.max_bytes).await?;
        decode_convex_reply(&bytes).map_err(|err| match err {
            DecodeError::Backend(message) => {
                site_warn!("Backend function {} failed: {}", path, message);
                FetchError::new(FailureKind::Backend, message)
            }
            other => FetchError::new(FailureKind::Decode, other.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl EventSource for ConvexClient {
    async fn published_events(&self) -> Result<Vec<EventRecord>, FetchError> {
        self.call(FunctionKind::Query, &self.settings.events_query, json!({}))
            .await
    }
}

#[async_trait::async_trait]
impl RegistrationSink for ConvexClient {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), FetchError> {
        let args = serde_json::to_value(request)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        let _: IgnoredAny = self
            .call(
                FunctionKind::Mutation,
                &self.settings.registration_mutation,
                args,
            )
            .await?;
        Ok(())
    }
}
