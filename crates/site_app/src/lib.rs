//! AI Collective site: HTTP server rendering the landing, jobs, events and
//! courses pages.
pub mod server;

pub use server::{build_router, listen, Settings, SiteState};
