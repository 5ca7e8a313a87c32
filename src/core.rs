use crate::error::{Result, TodoError};
use crate::models::{Todo, TodoRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// An ordered, titled collection of todos.
///
/// Items are held as [`TodoRef`] handles. Cloning the list, [`filter`] and
/// [`to_vec`] copy the sequence but share the items themselves.
///
/// [`filter`]: TodoList::filter
/// [`to_vec`]: TodoList::to_vec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    title: String,
    todos: Vec<TodoRef>,
}

impl TodoList {
    /// Create an empty list
    pub fn new(title: impl Into<String>) -> Self {
        TodoList {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    // ==================== Structure ====================

    /// Append a todo and return the handle now stored in the list
    pub fn add(&mut self, todo: Todo) -> TodoRef {
        let todo = Rc::new(todo);
        self.add_shared(Rc::clone(&todo));
        todo
    }

    /// Append an existing handle without copying the todo
    pub fn add_shared(&mut self, todo: TodoRef) {
        tracing::debug!(list = %self.title, todo = %todo.title(), "adding todo");
        self.todos.push(todo);
    }

    pub fn size(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn first(&self) -> Option<&TodoRef> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&TodoRef> {
        self.todos.last()
    }

    /// Get the todo at `index`, checked against the current size
    pub fn item_at(&self, index: usize) -> Result<&TodoRef> {
        self.todos.get(index).ok_or(TodoError::IndexOutOfRange {
            index,
            size: self.size(),
        })
    }

    /// Remove the first todo. Does nothing on an empty list.
    pub fn shift(&mut self) -> Option<TodoRef> {
        if self.todos.is_empty() {
            return None;
        }
        let removed = self.todos.remove(0);
        tracing::debug!(list = %self.title, todo = %removed.title(), "shifted todo");
        Some(removed)
    }

    /// Remove the last todo. Does nothing on an empty list.
    pub fn pop(&mut self) -> Option<TodoRef> {
        let removed = self.todos.pop()?;
        tracing::debug!(list = %self.title, todo = %removed.title(), "popped todo");
        Some(removed)
    }

    /// Remove the todo at `index`; later todos move down by one
    pub fn remove_at(&mut self, index: usize) -> Result<TodoRef> {
        self.validate_index(index)?;
        let removed = self.todos.remove(index);
        tracing::debug!(list = %self.title, index, todo = %removed.title(), "removed todo");
        Ok(removed)
    }

    // ==================== Completion ====================

    pub fn mark_done_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Mark every todo with exactly this title as done.
    ///
    /// Returns how many were marked; zero matches is not an error.
    pub fn mark_done(&self, title: &str) -> usize {
        let mut marked = 0;
        for todo in self.todos.iter().filter(|todo| todo.title() == title) {
            todo.mark_done();
            marked += 1;
        }
        marked
    }

    pub fn mark_all_done(&self) {
        self.for_each(|todo| todo.mark_done());
    }

    pub fn mark_all_undone(&self) {
        self.for_each(|todo| todo.mark_undone());
    }

    /// True when every todo is done, including when there are none
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(|todo| todo.is_done())
    }

    // ==================== Queries ====================

    pub fn iter(&self) -> std::slice::Iter<'_, TodoRef> {
        self.todos.iter()
    }

    pub fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&TodoRef),
    {
        self.todos.iter().for_each(callback);
    }

    /// New list with the same title holding the todos that match.
    ///
    /// The source list is untouched and the retained todos are shared.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        let mut filtered = TodoList::new(self.title.clone());
        for todo in &self.todos {
            if predicate(todo) {
                filtered.todos.push(Rc::clone(todo));
            }
        }
        filtered
    }

    /// First todo whose title matches exactly (case-sensitive)
    pub fn find_by_title(&self, title: &str) -> Option<&TodoRef> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    pub fn all_done(&self) -> Vec<TodoRef> {
        self.collect_where(|todo| todo.is_done())
    }

    pub fn all_not_done(&self) -> Vec<TodoRef> {
        self.collect_where(|todo| todo.is_not_done())
    }

    /// Copy of the sequence; changing its length leaves the list alone
    pub fn to_vec(&self) -> Vec<TodoRef> {
        self.todos.clone()
    }

    /// Banner line followed by one line per todo
    pub fn render(&self) -> String {
        self.to_string()
    }

    // ==================== Helper Methods ====================

    fn validate_index(&self, index: usize) -> Result<()> {
        if index < self.size() {
            Ok(())
        } else {
            Err(TodoError::IndexOutOfRange {
                index,
                size: self.size(),
            })
        }
    }

    fn collect_where(&self, keep: impl Fn(&Todo) -> bool) -> Vec<TodoRef> {
        self.todos
            .iter()
            .filter(|todo| keep(todo))
            .cloned()
            .collect()
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .todos
            .iter()
            .map(|todo| todo.render())
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "---- {} ----\n{}", self.title, lines)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoRef;
    type IntoIter = std::slice::Iter<'a, TodoRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
