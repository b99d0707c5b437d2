use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use site_core::{EventId, EventsContent, JobsViewModel};
use site_engine::RegistrationRequest;
use site_logging::site_debug;

use super::content::{COURSES, FEATURES, NAV_BUTTONS, PILLARS, STATS};
use super::effects::RegistrationOutcome;
use super::error::AppError;
use super::render::{
    encode, CoursesPage, EventCardRow, EventsPage, JobsPage, LandingPage, LoadingPage, ModalRow,
    StatusPage,
};
use super::SiteState;

const STYLESHEET: &str = include_str!("../../assets/site.css");

pub async fn landing(State(state): State<SiteState>) -> Result<Html<String>, AppError> {
    let page = LandingPage {
        features: &FEATURES,
        nav_buttons: &NAV_BUTTONS,
        stats: &STATS,
        pillars: &PILLARS,
        buddy_finder_url: &state.settings.buddy_finder_url,
    };
    Ok(Html(page.render()?))
}

pub async fn jobs(State(state): State<SiteState>) -> Result<Response, AppError> {
    let jobs = state.runner.mount_jobs().await;
    let view = jobs.view();
    site_debug!("Jobs page phase: {:?}", jobs.phase());

    let response = match view {
        JobsViewModel::Loading => Html(
            LoadingPage {
                heading: "Loading Opportunities",
                message: "Fetching the latest job postings...",
                refresh_secs: state.settings.loading_refresh_secs,
            }
            .render()?,
        )
        .into_response(),
        JobsViewModel::Failed { message } => (
            StatusCode::BAD_GATEWAY,
            Html(
                StatusPage {
                    page_title: "Career Opportunities",
                    message: format!("Error: {message}"),
                    is_error: true,
                }
                .render()?,
            ),
        )
            .into_response(),
        JobsViewModel::Empty => Html(
            StatusPage {
                page_title: "Career Opportunities",
                message: "No job postings available.".to_string(),
                is_error: false,
            }
            .render()?,
        )
        .into_response(),
        JobsViewModel::Listing { cards } => Html(JobsPage { cards }.render()?).into_response(),
    };
    Ok(response)
}

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    register: Option<String>,
    failed: Option<String>,
}

pub async fn events(
    State(state): State<SiteState>,
    Query(query): Query<EventsQuery>,
) -> Result<Response, AppError> {
    let selected = query
        .register
        .filter(|id| !id.trim().is_empty())
        .map(EventId::new);
    let events = state
        .runner
        .mount_events(selected, query.failed.as_deref() == Some("1"))
        .await;
    let view = events.view();
    let modal = view.modal.map(ModalRow::new);

    let response = match view.content {
        EventsContent::Loading => Html(
            LoadingPage {
                heading: "Loading Events",
                message: "Please wait while we fetch upcoming events...",
                refresh_secs: state.settings.loading_refresh_secs,
            }
            .render()?,
        )
        .into_response(),
        EventsContent::Failed { message } => (
            StatusCode::BAD_GATEWAY,
            Html(
                StatusPage {
                    page_title: "Upcoming Events",
                    message: format!("Error: {message}"),
                    is_error: true,
                }
                .render()?,
            ),
        )
            .into_response(),
        EventsContent::Empty => Html(
            EventsPage {
                cards: Vec::new(),
                modal,
            }
            .render()?,
        )
        .into_response(),
        EventsContent::Listing { cards } => Html(
            EventsPage {
                cards: cards.into_iter().map(EventCardRow::new).collect(),
                modal,
            }
            .render()?,
        )
        .into_response(),
    };
    Ok(response)
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

/// Hands the registration to the backend, then closes the modal by
/// redirecting to the plain events page. Failures reopen the same modal.
pub async fn register(
    State(state): State<SiteState>,
    Path(event_id): Path<String>,
    Form(form): Form<RegistrationForm>,
) -> Redirect {
    let retry = format!("/events?register={}&failed=1", encode(&event_id));
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || !email.contains('@') {
        return Redirect::to(&retry);
    }

    let request = RegistrationRequest {
        event_id: EventId::new(event_id),
        name: name.to_string(),
        email: email.to_string(),
    };
    match state.runner.submit_registration(request).await {
        RegistrationOutcome::Accepted => Redirect::to("/events"),
        RegistrationOutcome::Rejected => Redirect::to(&retry),
    }
}

pub async fn courses() -> Result<Html<String>, AppError> {
    Ok(Html(CoursesPage { courses: &COURSES }.render()?))
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn livez() -> &'static str {
    "ok"
}

pub async fn healthz(State(state): State<SiteState>) -> (StatusCode, &'static str) {
    if state.settings.convex_url.trim().is_empty() {
        (StatusCode::SERVICE_UNAVAILABLE, "events backend not configured")
    } else {
        (StatusCode::OK, "ok")
    }
}
