//! Tripwiz engine: destination lookups and effect execution.
mod engine;
mod fetch;
mod payload;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, SUGGEST_ENDPOINT};
pub use payload::{classify_content_type, parse_payload, PayloadError, PayloadKind};
pub use types::{
    EngineEvent, FailureKind, FetchError, RequestId, SuggestPayload, Suggestion,
};
