//! Pure reducers for the todo application.
//!
//! Each reducer takes its prior slice (absent before the store is built) and
//! an action, and returns the next slice without touching the prior one.
//! Actions a reducer does not handle leave its slice as it was.

use super::actions::Action;
use super::state::{Todo, TodoState, VisibilityFilter};
use crate::redux::Store;

/// Reducer for a single todo.
///
/// Returns `None` only when there is no prior todo and the action does not
/// create one.
pub fn todo(state: Option<&Todo>, action: &Action) -> Option<Todo> {
    match action {
        Action::AddTodo { id, text } => Some(Todo {
            id: *id,
            text: text.clone(),
            completed: false,
        }),
        Action::ToggleTodo { id } => state.map(|todo| {
            if todo.id != *id {
                return todo.clone();
            }

            Todo {
                completed: !todo.completed,
                ..todo.clone()
            }
        }),
        _ => state.cloned(),
    }
}

#[allow(clippy::ptr_arg)]
pub fn todos(state: Option<&Vec<Todo>>, action: &Action) -> Vec<Todo> {
    let state = state.map(Vec::as_slice).unwrap_or_default();

    match action {
        Action::AddTodo { .. } => state.iter().cloned().chain(todo(None, action)).collect(),
        Action::ToggleTodo { .. } => state
            .iter()
            .map(|t| todo(Some(t), action).unwrap_or_else(|| t.clone()))
            .collect(),
        _ => state.to_vec(),
    }
}

/// Takes the dispatched filter as is.
pub fn visibility_filter(state: Option<&VisibilityFilter>, action: &Action) -> VisibilityFilter {
    match action {
        Action::SetVisibilityFilter { filter } => *filter,
        _ => state.copied().unwrap_or_default(),
    }
}

/// The whole-state reducer: `todos` and `visibility_filter` combined.
pub fn todo_app() -> impl Fn(Option<&TodoState>, &Action) -> TodoState {
    crate::combine_reducers!(TodoState, Action {
        todos: todos,
        visibility_filter: visibility_filter,
    })
}

pub fn create_store() -> Store<TodoState, Action> {
    Store::new(todo_app())
}
