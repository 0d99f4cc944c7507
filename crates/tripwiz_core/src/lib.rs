//! Tripwiz core: pure state machine and view-model helpers.
mod debounce;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use debounce::{Debouncer, QUIET_PERIOD};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, RequestId, Stage, Suggestion};
pub use update::update;
pub use view_model::{AppViewModel, SuggestionRowView};
