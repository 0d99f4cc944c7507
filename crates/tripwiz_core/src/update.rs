use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryEdited(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::QuerySettled(query) => {
            // An empty settle clears everything and never hits the network.
            if query.is_empty() {
                state.clear_results();
                return (state, Vec::new());
            }
            let request_id = state.start_fetch();
            vec![Effect::FetchSuggestions {
                request_id,
                destination: query,
            }]
        }
        Msg::FetchSucceeded {
            request_id,
            suggestions,
        } => {
            state.complete_fetch(request_id, suggestions);
            Vec::new()
        }
        Msg::FetchFailed { request_id, error } => {
            state.fail_fetch(request_id, error);
            Vec::new()
        }
        Msg::LocationPicked(choice) => {
            state.select_location(choice);
            Vec::new()
        }
        Msg::NextClicked => {
            state.advance_stage();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
