use askama::Template;
use chrono::{DateTime, NaiveDate, Utc};
use site_core::{EventCardView, JobCardView, RegistrationModalView};
use url::form_urlencoded::byte_serialize;

use super::content::{Course, Highlight, NavButton, Stat};

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingPage<'a> {
    pub features: &'a [Highlight],
    pub nav_buttons: &'a [NavButton],
    pub stats: &'a [Stat],
    pub pillars: &'a [Highlight],
    pub buddy_finder_url: &'a str,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingPage<'a> {
    pub heading: &'a str,
    pub message: &'a str,
    pub refresh_secs: u32,
}

#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusPage<'a> {
    pub page_title: &'a str,
    pub message: String,
    pub is_error: bool,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsPage {
    pub cards: Vec<JobCardView>,
}

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsPage {
    pub cards: Vec<EventCardRow>,
    pub modal: Option<ModalRow>,
}

#[derive(Template)]
#[template(path = "courses.html")]
pub struct CoursesPage<'a> {
    pub courses: &'a [Course],
}

/// An event card plus the strings the template cannot derive itself.
pub struct EventCardRow {
    pub card: EventCardView,
    pub when: String,
    pub register_href: String,
}

impl EventCardRow {
    pub fn new(card: EventCardView) -> Self {
        let when = format_when(&card.date, &card.time);
        let register_href = format!("/events?register={}", encode(card.id.as_str()));
        Self {
            card,
            when,
            register_href,
        }
    }
}

pub struct ModalRow {
    pub heading: String,
    pub action: String,
    pub failed: bool,
}

impl ModalRow {
    pub fn new(modal: RegistrationModalView) -> Self {
        let heading = match modal.event_title.as_deref() {
            Some(title) if !title.is_empty() => format!("Register for {title}"),
            _ => "Register for this event".to_string(),
        };
        Self {
            heading,
            action: format!("/events/{}/register", encode(modal.event_id.as_str())),
            failed: modal.failed,
        }
    }
}

/// Percent-encodes `raw` for use in a path segment or query value.
pub fn encode(raw: &str) -> String {
    // Form encoding writes spaces as '+', which paths take literally.
    byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Human-readable event date. Accepts `YYYY-MM-DD`, RFC 3339 and epoch
/// milliseconds; anything else is shown as given.
pub fn format_when(date: &str, time: &str) -> String {
    let date = date.trim();
    let pretty = if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        day.format("%b %-d, %Y").to_string()
    } else if let Ok(stamp) = DateTime::parse_from_rfc3339(date) {
        stamp.format("%b %-d, %Y").to_string()
    } else if let Some(stamp) = date
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
    {
        stamp.format("%b %-d, %Y").to_string()
    } else {
        date.to_string()
    };

    match (pretty.is_empty(), time.trim()) {
        (_, "") => pretty,
        (true, time) => time.to_string(),
        (false, time) => format!("{pretty} \u{00B7} {time}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_prettified() {
        assert_eq!(format_when("2026-10-18", ""), "Oct 18, 2026");
        assert_eq!(format_when("2026-10-18T18:00:00Z", ""), "Oct 18, 2026");
        assert_eq!(format_when("1760745600000", ""), "Oct 18, 2025");
        assert_eq!(format_when("next Friday", "18:00"), "next Friday \u{00B7} 18:00");
        assert_eq!(format_when("", "18:00"), "18:00");
        assert_eq!(format_when("", ""), "");
    }

    #[test]
    fn modal_targets_encoded_event_path() {
        let row = ModalRow::new(RegistrationModalView {
            event_id: site_core::EventId::new("a b"),
            event_title: None,
            failed: true,
        });
        assert_eq!(row.action, "/events/a%20b/register");
        assert_eq!(row.heading, "Register for this event");
        assert!(row.failed);
    }
}
