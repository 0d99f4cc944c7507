use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

/// One destination record as the suggestion service returns it. Parsing is
/// lenient: unknown fields are ignored and missing ones default to empty so
/// a partial record still shows up as an option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Suggestion {
    pub city_name: String,
    pub country_id: String,
    pub country_name: String,
    pub entity_id: String,
    /// The wire field carries this misspelling; only the Rust name is fixed.
    #[serde(rename = "heirarchy")]
    pub hierarchy: String,
    pub iata_code: String,
    pub location: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of a successful lookup, split by declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestPayload {
    /// An `application/json` body parsed into destination records.
    Suggestions(Vec<Suggestion>),
    /// Any other body, carried verbatim so callers can log or discard it.
    /// It is never mistaken for a list of options.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchDone {
        request_id: RequestId,
        result: Result<SuggestPayload, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
