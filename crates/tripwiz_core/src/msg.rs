#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the destination input box (raw, undebounced text).
    QueryEdited(String),
    /// The debouncer settled on a value after the quiet period.
    QuerySettled(String),
    /// Engine delivered suggestions for a request.
    FetchSucceeded {
        request_id: crate::RequestId,
        suggestions: Vec<crate::Suggestion>,
    },
    /// Engine reported a failed request.
    FetchFailed {
        request_id: crate::RequestId,
        error: String,
    },
    /// User picked a suggestion from the dropdown, or cleared the pick.
    LocationPicked(Option<crate::Suggestion>),
    /// User pressed the Next button.
    NextClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
