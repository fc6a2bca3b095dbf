use serde::{Deserialize, Serialize};

use super::state::VisibilityFilter;
use crate::redux::InitAction;

/// Everything that can change a [`TodoState`](super::TodoState).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Reduced once by the store to build the initial state.
    Init,
    AddTodo { id: u64, text: String },
    ToggleTodo { id: u64 },
    SetVisibilityFilter { filter: VisibilityFilter },
}

impl InitAction for Action {
    fn init() -> Self {
        Action::Init
    }
}

/// Hands out todo ids. Owned by whoever dispatches `AddTodo`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_serialize_with_screaming_type_tags() {
        let add = serde_json::to_value(Action::AddTodo {
            id: 0,
            text: "a".to_string(),
        })
        .unwrap();
        assert_eq!(add["type"], "ADD_TODO");

        let filter = serde_json::to_value(Action::SetVisibilityFilter {
            filter: VisibilityFilter::ShowCompleted,
        })
        .unwrap();
        assert_eq!(filter["type"], "SET_VISIBILITY_FILTER");
        assert_eq!(filter["filter"], "SHOW_COMPLETED");
    }

    #[test]
    fn renamed_spellings_are_rejected() {
        let parsed = serde_json::from_str::<Action>(r#"{"type":"ADD_ITEM","id":1,"text":"x"}"#);

        assert!(parsed.is_err());
    }

    #[test]
    fn ids_start_at_zero_and_increase() {
        let mut ids = IdGenerator::default();

        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }
}
