//! Todo list domain: actions, state and the reducers that connect them.

mod actions;
mod reducer;
mod state;

pub use actions::{Action, IdGenerator};
pub use reducer::{create_store, todo, todo_app, todos, visibility_filter};
pub use state::{visible_todos, ParseFilterError, Todo, TodoState, VisibilityFilter};
