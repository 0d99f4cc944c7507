use crate::state::{Stage, Suggestion};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub stage: Stage,
    /// Form label for the current step; `Activities` shows none.
    pub stage_prompt: Option<&'static str>,
    /// Shown above the card once a destination is picked and the wizard
    /// has moved past the location step.
    pub greeting: Option<String>,
    pub query: String,
    pub options: Vec<SuggestionRowView>,
    /// Label of the picked destination, echoed under the input box.
    pub selected_label: Option<String>,
    pub loading: bool,
    /// The Next button is enabled iff a location is selected, at every stage.
    pub next_enabled: bool,
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRowView {
    pub label: String,
    pub suggestion: Suggestion,
}
