use tripwiz_core::{AppViewModel, Stage};

use super::constants::*;

/// Dropdown presentation state. This lives outside the core state: which
/// row is highlighted and whether the list is unfolded is a property of
/// the terminal frame, not of the trip being planned.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropdownState {
    pub open: bool,
    pub highlight: usize,
}

/// Build the whole frame as plain lines; the caller owns the terminal.
pub fn render(view: &AppViewModel, dropdown: DropdownState) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(TITLE.to_string());
    lines.push(String::new());

    if let Some(greeting) = &view.greeting {
        lines.push(greeting.clone());
        lines.push(String::new());
    }

    if let Some(prompt) = view.stage_prompt {
        lines.push(prompt.to_string());
    }

    if view.stage == Stage::Location {
        render_location(view, dropdown, &mut lines);
    }

    lines.push(String::new());
    if view.next_enabled {
        lines.push(NEXT_LABEL.to_string());
    } else {
        lines.push(format!("{NEXT_LABEL} {NEXT_LOCKED_HINT}"));
    }
    lines.push(String::new());
    lines.push(KEY_HINTS.to_string());
    lines
}

fn render_location(view: &AppViewModel, dropdown: DropdownState, lines: &mut Vec<String>) {
    if view.query.is_empty() {
        lines.push(format!("> {PLACEHOLDER}"));
    } else {
        lines.push(format!("> {}_", view.query));
    }

    if view.loading {
        lines.push(format!("  {LOADING_HINT}"));
    }

    if let Some(label) = &view.selected_label {
        lines.push(format!("  Destination: {label}"));
    }

    if let Some(error) = &view.error {
        lines.push(format!("  ! {error}"));
    }

    if dropdown.open && !view.options.is_empty() {
        let marked = dropdown.highlight.min(view.options.len() - 1);
        let first = (marked + 1).saturating_sub(MAX_DROPDOWN_ROWS);
        for (index, row) in view
            .options
            .iter()
            .enumerate()
            .skip(first)
            .take(MAX_DROPDOWN_ROWS)
        {
            let marker = if index == marked { ">" } else { " " };
            lines.push(format!("  {marker} {}", row.label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render, DropdownState};
    use tripwiz_core::{update, AppState, Msg, Suggestion};

    fn settled(query: &str) -> AppState {
        let (state, _) = update(AppState::new(), Msg::QueryEdited(query.to_string()));
        let (state, _) = update(state, Msg::QuerySettled(query.to_string()));
        state
    }

    fn with_results(names: &[&str]) -> AppState {
        let state = settled("paris");
        let suggestions = names
            .iter()
            .map(|name| Suggestion {
                name: name.to_string(),
                city_name: "Paris".to_string(),
                country_name: "France".to_string(),
                ..Suggestion::default()
            })
            .collect();
        let (state, _) = update(
            state,
            Msg::FetchSucceeded {
                request_id: 1,
                suggestions,
            },
        );
        state
    }

    fn open_at(highlight: usize) -> DropdownState {
        DropdownState {
            open: true,
            highlight,
        }
    }

    #[test]
    fn empty_query_shows_the_placeholder() {
        let lines = render(&AppState::new().view(), DropdownState::default());
        assert!(lines.contains(&"> Get searching...".to_string()));
    }

    #[test]
    fn loading_marker_is_shown_while_fetching() {
        let lines = render(&settled("par").view(), DropdownState::default());
        assert!(lines.iter().any(|line| line.contains("(searching...)")));
        assert!(lines.contains(&"> par_".to_string()));
    }

    #[test]
    fn dropdown_marks_the_highlighted_row() {
        let state = with_results(&["Montmartre", "Le Marais"]);
        let lines = render(&state.view(), open_at(1));

        assert!(lines.contains(&"    Montmartre, Paris, France".to_string()));
        assert!(lines.contains(&"  > Le Marais, Paris, France".to_string()));
    }

    #[test]
    fn long_result_lists_window_around_the_highlight() {
        fn spot_rows(lines: &[String]) -> Vec<&str> {
            lines
                .iter()
                .filter(|line| line.contains("Spot "))
                .map(String::as_str)
                .collect()
        }

        let names: Vec<String> = (0..20).map(|n| format!("Spot {n}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let state = with_results(&refs);

        let lines = render(&state.view(), open_at(0));
        let rows = spot_rows(&lines);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "  > Spot 0, Paris, France");
        assert_eq!(rows[7], "    Spot 7, Paris, France");

        let lines = render(&state.view(), open_at(19));
        let rows = spot_rows(&lines);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "    Spot 12, Paris, France");
        assert_eq!(rows[7], "  > Spot 19, Paris, France");
    }

    #[test]
    fn closed_dropdown_hides_the_options() {
        let state = with_results(&["Montmartre"]);
        let lines = render(&state.view(), DropdownState::default());
        assert!(!lines.iter().any(|line| line.contains("Montmartre")));
    }

    #[test]
    fn locked_next_names_the_reason() {
        let lines = render(&AppState::new().view(), DropdownState::default());
        assert!(lines.contains(&"[ Next ] (pick a destination first)".to_string()));

        let (state, _) = update(
            AppState::new(),
            Msg::LocationPicked(Some(Suggestion {
                country_name: "France".to_string(),
                ..Suggestion::default()
            })),
        );
        let lines = render(&state.view(), DropdownState::default());
        assert!(lines.contains(&"[ Next ]".to_string()));
    }

    #[test]
    fn days_frame_greets_with_the_country() {
        let (state, _) = update(
            AppState::new(),
            Msg::LocationPicked(Some(Suggestion {
                country_name: "France".to_string(),
                ..Suggestion::default()
            })),
        );
        let (state, _) = update(state, Msg::NextClicked);

        let lines = render(&state.view(), DropdownState::default());
        assert!(lines.contains(&"Let's plan your trip to France!".to_string()));
        assert!(lines.contains(&"For how many days?".to_string()));
        assert!(!lines.iter().any(|line| line.starts_with("> ")));
    }

    #[test]
    fn error_line_is_rendered() {
        let (state, _) = update(
            settled("paris"),
            Msg::FetchFailed {
                request_id: 1,
                error: "suggestion lookup failed: http status 500".to_string(),
            },
        );
        let lines = render(&state.view(), DropdownState::default());
        assert!(lines
            .iter()
            .any(|line| line.contains("suggestion lookup failed: http status 500")));
    }
}
