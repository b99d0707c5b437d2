use pretty_assertions::assert_eq;
use site_core::{
    is_truthy, normalize, DisplayField, IconCategory, JobRecord, KNOWN_JOB_KEYS,
    UNTITLED_POSITION,
};

fn record(json: &str) -> JobRecord {
    serde_json::from_str(json).expect("valid job record")
}

#[test]
fn capitalized_known_fields_are_extracted() {
    let job = normalize(&record(
        r#"{"Title":"ML Engineer","Company":"Acme","Location":"Remote","Link":"https://x"}"#,
    ));

    assert_eq!(job.title, "ML Engineer");
    assert_eq!(job.company.as_deref(), Some("Acme"));
    assert_eq!(job.location.as_deref(), Some("Remote"));
    assert_eq!(job.link.as_deref(), Some("https://x"));
    assert!(job.extras.is_empty());
}

#[test]
fn unknown_fields_become_extras() {
    let job = normalize(&record(r#"{"title":"Dev","notes":"great team"}"#));

    assert_eq!(job.title, "Dev");
    assert_eq!(job.company, None);
    assert_eq!(job.location, None);
    assert_eq!(job.link, None);
    assert_eq!(job.extras, vec![DisplayField::new("notes", "great team")]);
    assert_eq!(job.extras[0].icon, IconCategory::Briefcase);
}

#[test]
fn lookup_is_case_insensitive_beyond_two_casings() {
    let job = normalize(&record(r#"{"TITLE":"Researcher","cOmPaNy":"Lab"}"#));
    assert_eq!(job.title, "Researcher");
    assert_eq!(job.company.as_deref(), Some("Lab"));
    assert!(job.extras.is_empty());
}

#[test]
fn job_title_column_is_used_as_title() {
    let job = normalize(&record(r#"{"Job Title":"Data Scientist","Team":"Search"}"#));
    assert_eq!(job.title, "Data Scientist");
    assert_eq!(job.extras.len(), 1);
    assert_eq!(job.extras[0].label, "Team");
    assert_eq!(job.extras[0].icon, IconCategory::People);
}

#[test]
fn missing_title_falls_back() {
    let job = normalize(&record(r#"{"company":"Acme","title":""}"#));
    assert_eq!(job.title, UNTITLED_POSITION);
    assert!(job.extras.is_empty());
}

#[test]
fn falsy_extras_are_dropped_and_order_is_kept() {
    let job = normalize(&record(
        r#"{"Salary":"100k","Remote":"","Deadline":"2026-11-01","Openings":0,"Posted On":"Oct 1"}"#,
    ));
    let labels: Vec<_> = job.extras.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Salary", "Deadline", "Posted On"]);
    assert_eq!(job.extras[1].icon, IconCategory::Calendar);
    assert_eq!(job.extras[2].icon, IconCategory::Calendar);
}

#[test]
fn every_truthy_key_is_either_known_or_extra_never_both() {
    let source = record(
        r#"{"Title":"A","Company":"B","location":"C","LINK":"https://d","Job Title":"E","Team":"F","Notes":"G","Empty":""}"#,
    );
    let job = normalize(&source);

    for (key, value) in source.fields() {
        let lowered = key.to_lowercase();
        let is_known = KNOWN_JOB_KEYS.contains(&lowered.as_str());
        let is_extra = job.extras.iter().any(|f| f.label == key);
        assert!(!(is_known && is_extra), "{key} rendered twice");
        if is_truthy(value) {
            assert!(is_known || is_extra, "{key} dropped");
        } else {
            assert!(!is_extra, "{key} has no value but was rendered");
        }
    }
}
