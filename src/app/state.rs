use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

impl VisibilityFilter {
    pub const ALL: [VisibilityFilter; 3] = [
        VisibilityFilter::ShowAll,
        VisibilityFilter::ShowActive,
        VisibilityFilter::ShowCompleted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "SHOW_ALL",
            VisibilityFilter::ShowActive => "SHOW_ACTIVE",
            VisibilityFilter::ShowCompleted => "SHOW_COMPLETED",
        }
    }

    /// Label shown in the footer.
    pub fn label(self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "All",
            VisibilityFilter::ShowActive => "Active",
            VisibilityFilter::ShowCompleted => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowActive => !todo.completed,
            VisibilityFilter::ShowCompleted => todo.completed,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown visibility filter '{0}', expected SHOW_ALL, SHOW_ACTIVE or SHOW_COMPLETED")]
pub struct ParseFilterError(String);

impl FromStr for VisibilityFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisibilityFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole application state held by the store.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub visibility_filter: VisibilityFilter,
}

impl TodoState {
    pub fn visible_todos(&self) -> Vec<&Todo> {
        visible_todos(&self.todos, self.visibility_filter)
    }
}

pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<&Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).collect()
}
