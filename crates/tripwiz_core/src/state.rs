use crate::view_model::{AppViewModel, SuggestionRowView};

pub type RequestId = u64;

/// Wizard steps, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Location,
    Days,
    Activities,
}

impl Stage {
    /// The step the Next button moves to. Advancing past `Activities`
    /// restarts the wizard at `Location`; nothing else is reset.
    pub fn advance(self) -> Stage {
        match self {
            Stage::Location => Stage::Days,
            Stage::Days => Stage::Activities,
            Stage::Activities => Stage::Location,
        }
    }
}

/// One candidate destination as the UI sees it. The engine owns the wire
/// format; this record is what the remote service returned, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestion {
    pub city_name: String,
    pub country_id: String,
    pub country_name: String,
    pub entity_id: String,
    pub hierarchy: String,
    pub iata_code: String,
    pub location: String,
    pub name: String,
    pub kind: String,
}

impl Suggestion {
    /// Dropdown row label: `name, city, country`.
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.name, self.city_name, self.country_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    results: Vec<Suggestion>,
    loading: bool,
    selected: Option<Suggestion>,
    stage: Stage,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let stage_prompt = match self.stage {
            Stage::Location => Some("Where do you want to go?"),
            Stage::Days => Some("For how many days?"),
            Stage::Activities => None,
        };

        let greeting = match &self.selected {
            Some(pick) if self.stage != Stage::Location => {
                Some(format!("Let's plan your trip to {}!", pick.country_name))
            }
            _ => None,
        };

        AppViewModel {
            stage: self.stage,
            stage_prompt,
            greeting,
            query: self.query.clone(),
            options: self
                .results
                .iter()
                .map(|suggestion| SuggestionRowView {
                    label: suggestion.label(),
                    suggestion: suggestion.clone(),
                })
                .collect(),
            selected_label: self.selected.as_ref().map(Suggestion::label),
            loading: self.loading,
            next_enabled: self.selected.is_some(),
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn set_query(&mut self, text: String) {
        self.query = text;
        self.dirty = true;
    }

    /// Allocate the next request id, enter the loading state and drop the
    /// previous result set. Results reappear only when this request
    /// completes; anything older is stale from here on.
    pub(crate) fn start_fetch(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.loading = true;
        self.results.clear();
        self.error = None;
        self.dirty = true;
        self.next_request_id
    }

    /// Apply a completed fetch. Completions that do not match the
    /// in-flight request id are discarded.
    pub(crate) fn complete_fetch(&mut self, request_id: RequestId, results: Vec<Suggestion>) {
        if self.in_flight != Some(request_id) {
            return;
        }
        self.in_flight = None;
        self.loading = false;
        self.results = results;
        self.dirty = true;
    }

    /// Record a failed fetch, same staleness gate as `complete_fetch`.
    pub(crate) fn fail_fetch(&mut self, request_id: RequestId, error: String) {
        if self.in_flight != Some(request_id) {
            return;
        }
        self.in_flight = None;
        self.loading = false;
        self.error = Some(error);
        self.dirty = true;
    }

    /// Empty settled query: drop the results and forget any in-flight
    /// request, so a late completion cannot resurrect them.
    pub(crate) fn clear_results(&mut self) {
        self.in_flight = None;
        self.loading = false;
        self.results.clear();
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn select_location(&mut self, choice: Option<Suggestion>) {
        self.selected = choice;
        self.dirty = true;
    }

    /// Move to the next stage if a location has been picked. The gate is
    /// the selection alone; once unlocked the button works at every stage.
    pub(crate) fn advance_stage(&mut self) {
        if self.selected.is_none() {
            return;
        }
        self.stage = self.stage.advance();
        self.dirty = true;
    }
}
