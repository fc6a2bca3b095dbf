use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Mode, ViewState};
use crate::app::{Action, TodoState, VisibilityFilter};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    Dispatch(Action),
    Quit,
}

/// Maps one key press to at most one action. View-local state such as the
/// input buffer is updated in place.
pub fn handle_key(view: &mut ViewState, state: &TodoState, key: KeyEvent) -> Outcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Outcome::Quit;
    }

    match view.mode {
        Mode::Insert => handle_insert(view, key),
        Mode::Normal => handle_normal(view, state, key),
    }
}

fn handle_insert(view: &mut ViewState, key: KeyEvent) -> Outcome {
    match key.code {
        KeyCode::Esc => {
            view.mode = Mode::Normal;

            Outcome::Nothing
        }
        KeyCode::Enter => {
            let text = view.input.trim().to_string();

            if text.is_empty() {
                return Outcome::Nothing;
            }

            view.input.clear();

            Outcome::Dispatch(Action::AddTodo {
                id: view.ids.next_id(),
                text,
            })
        }
        KeyCode::Char(character) => {
            view.input.push(character);

            Outcome::Nothing
        }
        KeyCode::Backspace => {
            view.input.pop();

            Outcome::Nothing
        }
        _ => Outcome::Nothing,
    }
}

fn handle_normal(view: &mut ViewState, state: &TodoState, key: KeyEvent) -> Outcome {
    let visible = state.visible_todos();

    match key.code {
        KeyCode::Char('q') => Outcome::Quit,
        KeyCode::Char('i') => {
            view.mode = Mode::Insert;

            Outcome::Nothing
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(selected) = view.selection(visible.len()) {
                view.selected = (selected + 1).min(visible.len() - 1);
            }

            Outcome::Nothing
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view.selected = view
                .selection(visible.len())
                .unwrap_or(0)
                .saturating_sub(1);

            Outcome::Nothing
        }
        KeyCode::Char(' ') | KeyCode::Enter => match view.selection(visible.len()) {
            Some(selected) => Outcome::Dispatch(Action::ToggleTodo {
                id: visible[selected].id,
            }),
            None => Outcome::Nothing,
        },
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;

            Outcome::Dispatch(Action::SetVisibilityFilter {
                filter: VisibilityFilter::ALL[index],
            })
        }
        _ => Outcome::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Todo;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(view: &mut ViewState, text: &str) {
        for character in text.chars() {
            handle_key(view, &TodoState::default(), press(KeyCode::Char(character)));
        }
    }

    fn state_with(todos: &[(u64, bool)]) -> TodoState {
        TodoState {
            todos: todos
                .iter()
                .map(|&(id, completed)| Todo {
                    id,
                    text: format!("todo {}", id),
                    completed,
                })
                .collect(),
            ..TodoState::default()
        }
    }

    #[test]
    fn enter_adds_trimmed_text_with_fresh_ids() {
        let mut view = ViewState::default();
        let state = TodoState::default();

        type_text(&mut view, "  milk ");
        let first = handle_key(&mut view, &state, press(KeyCode::Enter));
        type_text(&mut view, "eggs");
        let second = handle_key(&mut view, &state, press(KeyCode::Enter));

        assert_eq!(
            first,
            Outcome::Dispatch(Action::AddTodo {
                id: 0,
                text: "milk".to_string()
            })
        );
        assert_eq!(
            second,
            Outcome::Dispatch(Action::AddTodo {
                id: 1,
                text: "eggs".to_string()
            })
        );
        assert!(view.input.is_empty());
    }

    #[test]
    fn blank_input_adds_nothing() {
        let mut view = ViewState::default();

        type_text(&mut view, "   ");

        assert_eq!(
            handle_key(&mut view, &TodoState::default(), press(KeyCode::Enter)),
            Outcome::Nothing
        );
    }

    #[test]
    fn quit_keys() {
        let mut view = ViewState::default();
        let state = TodoState::default();

        assert_eq!(handle_key(&mut view, &state, press(KeyCode::Char('q'))), Outcome::Nothing);
        assert_eq!(view.input, "q");

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut view, &state, ctrl_c), Outcome::Quit);

        view.mode = Mode::Normal;
        assert_eq!(handle_key(&mut view, &state, press(KeyCode::Char('q'))), Outcome::Quit);
    }

    #[test]
    fn toggle_targets_the_selected_visible_todo() {
        let mut view = ViewState {
            mode: Mode::Normal,
            ..ViewState::default()
        };
        let mut state = state_with(&[(0, true), (1, false), (2, false)]);
        state.visibility_filter = VisibilityFilter::ShowActive;

        handle_key(&mut view, &state, press(KeyCode::Char('j')));
        handle_key(&mut view, &state, press(KeyCode::Char('j')));

        assert_eq!(view.selected, 1);
        assert_eq!(
            handle_key(&mut view, &state, press(KeyCode::Char(' '))),
            Outcome::Dispatch(Action::ToggleTodo { id: 2 })
        );
    }

    #[test]
    fn toggle_on_an_empty_list_does_nothing() {
        let mut view = ViewState {
            mode: Mode::Normal,
            ..ViewState::default()
        };

        assert_eq!(
            handle_key(&mut view, &TodoState::default(), press(KeyCode::Enter)),
            Outcome::Nothing
        );
    }

    #[test]
    fn digits_pick_filters() {
        let mut view = ViewState {
            mode: Mode::Normal,
            ..ViewState::default()
        };
        let state = TodoState::default();

        assert_eq!(
            handle_key(&mut view, &state, press(KeyCode::Char('3'))),
            Outcome::Dispatch(Action::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted
            })
        );
        assert_eq!(
            handle_key(&mut view, &state, press(KeyCode::Char('1'))),
            Outcome::Dispatch(Action::SetVisibilityFilter {
                filter: VisibilityFilter::ShowAll
            })
        );
    }
}
