use site_core::{classify, IconCategory};

#[test]
fn location_is_case_insensitive() {
    for name in ["Location", "location", "LOCATION", "Office location"] {
        assert_eq!(classify(name), IconCategory::Pin, "{name}");
    }
}

#[test]
fn keyword_groups_map_to_icons() {
    let cases = [
        ("Company Size", IconCategory::Building),
        ("Start Date", IconCategory::Clock),
        ("Full-time?", IconCategory::Clock),
        ("Apply link", IconCategory::ExternalLink),
        ("Department", IconCategory::People),
        ("Team", IconCategory::People),
        ("Posted", IconCategory::Calendar),
        ("Deadline", IconCategory::Calendar),
        ("Salary", IconCategory::Briefcase),
        ("", IconCategory::Briefcase),
    ];
    for (name, expected) in cases {
        assert_eq!(classify(name), expected, "{name}");
    }
}

#[test]
fn first_matching_group_wins() {
    // "company" precedes "location"; "date" precedes "posted".
    assert_eq!(classify("company location"), IconCategory::Building);
    assert_eq!(classify("date posted"), IconCategory::Clock);
    assert_eq!(classify("posted date"), IconCategory::Clock);
}

#[test]
fn classification_is_deterministic() {
    let first = classify("Hiring Team");
    for _ in 0..10 {
        assert_eq!(classify("Hiring Team"), first);
    }
}
