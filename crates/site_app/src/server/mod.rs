pub mod config;
pub mod content;
pub mod effects;
pub mod error;
pub mod logging;
pub mod pages;
pub mod render;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use site_engine::{EngineHandle, FetchError};
use site_logging::{site_error, site_info};

pub use config::Settings;
use effects::EffectRunner;

/// Per-process handles shared by every request. Holds no page state.
#[derive(Clone)]
pub struct SiteState {
    pub runner: EffectRunner,
    pub settings: Arc<Settings>,
}

impl SiteState {
    pub fn new(settings: Settings) -> Result<Self, FetchError> {
        let engine = EngineHandle::new(settings.engine_settings())?;
        Ok(Self::with_engine(settings, engine))
    }

    pub fn with_engine(settings: Settings, engine: EngineHandle) -> Self {
        Self {
            runner: EffectRunner::new(engine, settings.render_deadline()),
            settings: Arc::new(settings),
        }
    }
}

pub fn build_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/jobs", get(pages::jobs))
        .route("/events", get(pages::events))
        .route("/events/{id}/register", post(pages::register))
        .route("/courses", get(pages::courses))
        .route("/assets/site.css", get(pages::stylesheet))
        .route("/livez", get(pages::livez))
        .route("/healthz", get(pages::healthz))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    site_info!(
        "{} {} -> {} in {:?}",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

pub async fn listen(settings: Settings) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    site_info!("Listening at {}", settings.listen_addr);

    let state = SiteState::new(settings)?;
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => site_info!("Received ctrl+c, closing server"),
        Err(err) => site_error!("Failed to listen for ctrl+c: {}", err),
    }
}
