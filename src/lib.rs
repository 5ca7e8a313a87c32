//! # todolist - ordered todo collections
//!
//! A small in-memory data structure: [`Todo`] items with a title and a
//! completion flag, grouped under a titled [`TodoList`].

pub mod core;
pub mod error;
pub mod logging;
pub mod models;

pub use crate::core::TodoList;
pub use error::{Result, TodoError};
pub use models::{Todo, TodoRef, DONE_MARKER, UNDONE_MARKER};
