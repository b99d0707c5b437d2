use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::error::Category;
use site_core::JobRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Syntax(String),
    #[error("unexpected response shape: {0}")]
    Shape(String),
    #[error("{0}")]
    Backend(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DecodeError::Shape(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => DecodeError::Syntax(err.to_string()),
        }
    }
}

/// Decodes the spreadsheet API body: a JSON array of flat objects.
pub fn decode_job_rows(bytes: &[u8]) -> Result<Vec<JobRecord>, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ConvexReply<T> {
    Success {
        value: T,
    },
    Error {
        #[serde(rename = "errorMessage", default)]
        error_message: String,
    },
}

/// Decodes a Convex HTTP API reply envelope.
///
/// `{"status":"success","value":..}` yields the value; `{"status":"error",..}`
/// becomes [`DecodeError::Backend`] carrying the function's error message.
pub fn decode_convex_reply<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    match serde_json::from_slice::<ConvexReply<T>>(bytes)? {
        ConvexReply::Success { value } => Ok(value),
        ConvexReply::Error { error_message } if error_message.trim().is_empty() => Err(
            DecodeError::Backend("backend function failed without a message".to_string()),
        ),
        ConvexReply::Error { error_message } => Err(DecodeError::Backend(error_message)),
    }
}
