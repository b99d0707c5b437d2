use std::sync::Once;

use pretty_assertions::assert_eq;
use site_core::{
    update_jobs, Effect, IconCategory, JobRecord, JobsMsg, JobsPhase, JobsState, JobsViewModel,
    FALLBACK_ERROR_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn mounted() -> JobsState {
    let (state, effects) = update_jobs(JobsState::new(), JobsMsg::Mounted);
    assert_eq!(effects, vec![Effect::FetchJobs]);
    state
}

fn records(json: &str) -> Vec<JobRecord> {
    serde_json::from_str(json).expect("valid job array")
}

#[test]
fn new_state_renders_loading() {
    init_logging();
    let state = JobsState::new();
    assert_eq!(state.phase(), &JobsPhase::Idle);
    assert_eq!(state.view(), JobsViewModel::Loading);
}

#[test]
fn mount_issues_a_single_fetch() {
    init_logging();
    let state = mounted();
    assert!(state.is_loading());

    let (state, effects) = update_jobs(state, JobsMsg::Mounted);
    assert!(effects.is_empty());
    assert!(state.is_loading());
}

#[test]
fn loaded_records_render_cards() {
    init_logging();
    let (state, effects) = update_jobs(
        mounted(),
        JobsMsg::Loaded(records(
            r#"[{"Title":"ML Engineer","Company":"Acme","Location":"Remote","Link":"https://x"}]"#,
        )),
    );
    assert!(effects.is_empty());

    let JobsViewModel::Listing { cards } = state.view() else {
        panic!("expected listing");
    };
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.title, "ML Engineer");
    assert_eq!(card.company.as_deref(), Some("Acme"));
    assert_eq!(card.location.as_deref(), Some("Remote"));
    assert_eq!(card.link.as_deref(), Some("https://x"));
    assert!(card.extras.is_empty());
}

#[test]
fn sparse_record_renders_title_and_generic_extra() {
    init_logging();
    let (state, _) = update_jobs(
        mounted(),
        JobsMsg::Loaded(records(r#"[{"title":"Dev","notes":"great team"}]"#)),
    );

    let JobsViewModel::Listing { cards } = state.view() else {
        panic!("expected listing");
    };
    let card = &cards[0];
    assert_eq!(card.title, "Dev");
    assert_eq!(card.company, None);
    assert_eq!(card.location, None);
    assert_eq!(card.link, None);
    assert_eq!(card.extras.len(), 1);
    assert_eq!(card.extras[0].label, "notes");
    assert_eq!(card.extras[0].value, "great team");
    assert_eq!(card.extras[0].icon, IconCategory::Briefcase);
}

#[test]
fn card_fields_are_truncated_to_budgets() {
    init_logging();
    let long = "x".repeat(100);
    let json = format!(
        r#"[{{"title":"{long}","company":"{long}","location":"{long}","notes":"{long}"}}]"#
    );
    let (state, _) = update_jobs(mounted(), JobsMsg::Loaded(records(&json)));

    let JobsViewModel::Listing { cards } = state.view() else {
        panic!("expected listing");
    };
    let card = &cards[0];
    assert_eq!(card.title, format!("{}...", "x".repeat(45)));
    assert_eq!(card.company.as_deref(), Some(format!("{}...", "x".repeat(30)).as_str()));
    assert_eq!(card.location.as_deref(), Some(format!("{}...", "x".repeat(35)).as_str()));
    assert_eq!(card.extras[0].value, format!("{}...", "x".repeat(60)));
}

#[test]
fn empty_payload_is_distinct_from_error() {
    init_logging();
    let (state, _) = update_jobs(mounted(), JobsMsg::Loaded(Vec::new()));
    assert_eq!(state.view(), JobsViewModel::Empty);
}

#[test]
fn failure_keeps_message() {
    init_logging();
    let (state, _) = update_jobs(
        mounted(),
        JobsMsg::Failed("Failed to fetch data: 500".to_string()),
    );
    assert_eq!(
        state.view(),
        JobsViewModel::Failed {
            message: "Failed to fetch data: 500".to_string()
        }
    );
}

#[test]
fn blank_failure_message_falls_back() {
    init_logging();
    let (state, _) = update_jobs(mounted(), JobsMsg::Failed("  ".to_string()));
    assert_eq!(
        state.view(),
        JobsViewModel::Failed {
            message: FALLBACK_ERROR_MESSAGE.to_string()
        }
    );
}

#[test]
fn results_after_settlement_are_ignored() {
    init_logging();
    let (state, _) = update_jobs(mounted(), JobsMsg::Failed("boom".to_string()));
    let (state, _) = update_jobs(state, JobsMsg::Loaded(records(r#"[{"title":"Late"}]"#)));
    assert_eq!(state.phase(), &JobsPhase::Failed("boom".to_string()));
}

#[test]
fn results_before_mount_are_ignored() {
    init_logging();
    let (state, effects) = update_jobs(JobsState::new(), JobsMsg::Loaded(Vec::new()));
    assert!(effects.is_empty());
    assert_eq!(state.phase(), &JobsPhase::Idle);
}
