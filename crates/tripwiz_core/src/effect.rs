#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine to look up destinations for a settled query.
    FetchSuggestions {
        request_id: crate::RequestId,
        destination: String,
    },
}
