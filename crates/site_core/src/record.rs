use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::field::DisplayField;

/// Lowercased keys that are rendered as dedicated card fields and therefore
/// never show up among the extras.
pub const KNOWN_JOB_KEYS: [&str; 5] = ["title", "job title", "company", "location", "link"];

pub const UNTITLED_POSITION: &str = "Untitled Position";

const TITLE_KEYS: [&str; 2] = ["title", "job title"];

/// One row of the jobs spreadsheet.
///
/// Columns are free-form and keep their source order. Values are text or
/// absent; JSON scalars are converted on the way in so the rest of the crate
/// never sees `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobRecord {
    fields: Vec<(String, Option<String>)>,
}

impl JobRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key, Some(value.into()));
        }
        record
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.fields.push((key.into(), value));
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// First truthy value whose lowercased key equals one of `names`, tried in order.
    fn lookup(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| {
            self.fields()
                .find(|(key, value)| key.to_lowercase() == *name && is_truthy(*value))
                .and_then(|(_, value)| value.map(str::to_owned))
        })
    }
}

impl<'de> Deserialize<'de> for JobRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = JobRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of job fields")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JobRecord, A::Error> {
                let mut record = JobRecord::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    record.insert(key, scalar_text(value));
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// `null`, `false` and numeric zero carry no text. Everything else is kept,
/// including the empty string, which [`is_truthy`] later rejects.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

pub fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

/// Well-typed view of a [`JobRecord`]: the known fields plus everything else
/// worth showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedJob {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
    pub extras: Vec<DisplayField>,
}

/// Splits a record into known fields and extras.
///
/// Key matching is case-insensitive. A key whose lowercased form is one of
/// [`KNOWN_JOB_KEYS`] is never an extra; when the same known key appears under
/// several casings the first truthy one wins.
pub fn normalize(record: &JobRecord) -> NormalizedJob {
    let extras = record
        .fields()
        .filter(|(key, value)| is_truthy(*value) && !is_known_key(key))
        .filter_map(|(key, value)| value.map(|text| DisplayField::new(key, text)))
        .collect();

    NormalizedJob {
        title: record
            .lookup(&TITLE_KEYS)
            .unwrap_or_else(|| UNTITLED_POSITION.to_string()),
        company: record.lookup(&["company"]),
        location: record.lookup(&["location"]),
        link: record.lookup(&["link"]),
        extras,
    }
}

fn is_known_key(key: &str) -> bool {
    let lowered = key.to_lowercase();
    KNOWN_JOB_KEYS.contains(&lowered.as_str())
}

/// Backend-issued event identifier. Opaque: it is only ever compared and
/// echoed back, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A published event as returned by the events query.
///
/// The query already filters on publication status, so `isPublished` and
/// `_creationTime` are left to the backend and ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(rename = "_id")]
    pub id: EventId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl EventRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: EventId::new(id),
            title: title.into(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            image_url: None,
        }
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
