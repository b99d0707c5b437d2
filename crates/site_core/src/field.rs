/// Icon shown next to a job field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Building,
    Pin,
    Clock,
    ExternalLink,
    People,
    Calendar,
    Briefcase,
}

impl IconCategory {
    /// Stable name used for the icon's CSS class.
    pub fn icon_name(self) -> &'static str {
        match self {
            IconCategory::Building => "building",
            IconCategory::Pin => "map-pin",
            IconCategory::Clock => "clock",
            IconCategory::ExternalLink => "external-link",
            IconCategory::People => "users",
            IconCategory::Calendar => "calendar",
            IconCategory::Briefcase => "briefcase",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            IconCategory::Building => "blue",
            IconCategory::Pin => "emerald",
            IconCategory::Clock => "amber",
            IconCategory::ExternalLink => "indigo",
            IconCategory::People => "purple",
            IconCategory::Calendar => "rose",
            IconCategory::Briefcase => "slate",
        }
    }

    /// Glyph rendered inside the icon badge.
    pub fn glyph(self) -> &'static str {
        match self {
            IconCategory::Building => "\u{1F3E2}",
            IconCategory::Pin => "\u{1F4CD}",
            IconCategory::Clock => "\u{1F552}",
            IconCategory::ExternalLink => "\u{2197}",
            IconCategory::People => "\u{1F465}",
            IconCategory::Calendar => "\u{1F4C5}",
            IconCategory::Briefcase => "\u{1F4BC}",
        }
    }
}

// Order matters: "company location" is a company field.
const KEYWORD_GROUPS: [(&[&str], IconCategory); 6] = [
    (&["company"], IconCategory::Building),
    (&["location"], IconCategory::Pin),
    (&["time", "date"], IconCategory::Clock),
    (&["link"], IconCategory::ExternalLink),
    (&["team", "department"], IconCategory::People),
    (&["posted", "deadline"], IconCategory::Calendar),
];

/// Maps a field name to its icon by case-insensitive substring match.
pub fn classify(field_name: &str) -> IconCategory {
    let lowered = field_name.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, category)| *category)
        .unwrap_or(IconCategory::Briefcase)
}

/// An extra job field ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: String,
    pub value: String,
    pub icon: IconCategory,
}

impl DisplayField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        let label = label.into();
        let icon = classify(&label);
        Self {
            label,
            value: value.into(),
            icon,
        }
    }
}
