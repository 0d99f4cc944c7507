pub const TITLE: &str = "Trip Planner";
pub const PLACEHOLDER: &str = "Get searching...";
pub const LOADING_HINT: &str = "(searching...)";
pub const NEXT_LABEL: &str = "[ Next ]";
pub const NEXT_LOCKED_HINT: &str = "(pick a destination first)";
pub const KEY_HINTS: &str =
    "type to search | Up/Down choose | Enter pick | Tab next | Esc clear pick | Ctrl-C quit";

/// Most suggestion rows shown at once; the window follows the highlight.
pub const MAX_DROPDOWN_ROWS: usize = 8;
