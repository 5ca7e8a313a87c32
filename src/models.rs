use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Marker rendered between the brackets of a completed todo
pub const DONE_MARKER: char = 'X';

/// Marker rendered between the brackets of an open todo
pub const UNDONE_MARKER: char = ' ';

/// Shared handle to a todo.
///
/// A [`TodoList`](crate::TodoList) stores these, and every query hands the
/// same handles back out. Marking a todo done through any handle is visible
/// through the list and through every other handle.
pub type TodoRef = Rc<Todo>;

/// A single task: an immutable title and a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    title: String,
    done: Cell<bool>,
}

impl Todo {
    /// New, not yet done. Any title is accepted, including empty ones.
    pub fn new(title: impl Into<String>) -> Self {
        Todo {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    pub fn mark_done(&self) {
        tracing::trace!(title = %self.title, "todo marked done");
        self.done.set(true);
    }

    pub fn mark_undone(&self) {
        tracing::trace!(title = %self.title, "todo marked undone");
        self.done.set(false);
    }

    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    pub fn is_not_done(&self) -> bool {
        !self.is_done()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn marker(&self) -> char {
        if self.is_done() {
            DONE_MARKER
        } else {
            UNDONE_MARKER
        }
    }

    /// Display line, `[X] title` or `[ ] title`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title)
    }
}
