//! Terminal view of the todo list.
//!
//! The view only reads store snapshots and turns key presses into actions.
//! What it keeps for itself (the text being typed, the cursor row, the id
//! counter) never goes through the store.

pub mod input;
pub mod render;

pub use input::{handle_key, Outcome};
pub use render::draw;

use crate::app::IdGenerator;

#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Debug)]
pub struct ViewState {
    pub input: String,
    pub mode: Mode,
    pub selected: usize,
    pub ids: IdGenerator,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            input: String::new(),
            mode: Mode::Insert,
            selected: 0,
            ids: IdGenerator::default(),
        }
    }
}

impl ViewState {
    /// Row of the cursor among `visible` todos, if there are any.
    pub fn selection(&self, visible: usize) -> Option<usize> {
        if visible == 0 {
            None
        } else {
            Some(self.selected.min(visible - 1))
        }
    }
}
