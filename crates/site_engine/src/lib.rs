//! Site engine: outbound IO against the jobs spreadsheet API and the events
//! backend, plus the handle the app uses to run those requests.
mod convex;
mod decode;
mod engine;
mod fetch;
mod types;

pub use convex::{ConvexClient, ConvexSettings, EventSource, RegistrationRequest, RegistrationSink};
pub use decode::{decode_convex_reply, decode_job_rows, DecodeError};
pub use engine::{EngineHandle, EngineSettings};
pub use fetch::{http_client, FetchSettings, JobSource, SheetJobSource};
pub use types::{EngineCommand, EngineEvent, FailureKind, FetchError};
