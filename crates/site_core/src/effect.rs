/// Side effects requested by the page state machines. The app turns these
/// into engine commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchJobs,
    QueryPublishedEvents,
}
