use crate::{SuggestPayload, Suggestion};

/// How a response body should be read, decided from the declared content
/// type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Json,
    Text,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("malformed suggestion body: {message}")]
    MalformedJson { message: String },
}

/// A media type of `application/json` (parameters ignored, case ignored)
/// marks the body as JSON; everything else, including a missing header,
/// is plain text.
pub fn classify_content_type(content_type: Option<&str>) -> PayloadKind {
    let media_type = content_type
        .map(|value| value.split(';').next().unwrap_or(value).trim())
        .unwrap_or("");
    if media_type.eq_ignore_ascii_case("application/json") {
        PayloadKind::Json
    } else {
        PayloadKind::Text
    }
}

/// Interpret a fully read body. JSON bodies must parse into an array of
/// destination records; anything else is carried as opaque text.
pub fn parse_payload(
    bytes: &[u8],
    content_type: Option<&str>,
) -> Result<SuggestPayload, PayloadError> {
    match classify_content_type(content_type) {
        PayloadKind::Json => {
            let suggestions: Vec<Suggestion> =
                serde_json::from_slice(bytes).map_err(|err| PayloadError::MalformedJson {
                    message: err.to_string(),
                })?;
            Ok(SuggestPayload::Suggestions(suggestions))
        }
        PayloadKind::Text => Ok(SuggestPayload::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}
