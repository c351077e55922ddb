//! A small to-do list manager.
//!
//! Tasks are addressed by their zero-based position in the list, as shown
//! by [`TodoList::render`]. Removing a task shifts the indices after it.

mod store;

pub use store::TodoStore;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::io;
use tracing::{debug, info, instrument, warn};

/// One entry in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing.
    pub description: String,
    /// Whether it has been done.
    pub completed: bool,
}

impl Task {
    /// Creates a pending task.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// "Done" or "Pending".
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Done" } else { "Pending" }
    }
}

/// Errors from list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TodoError {
    /// No task at this index.
    #[display("Task index {} is out of range.", index)]
    OutOfRange {
        /// The requested index.
        index: usize,
    },
}

/// An ordered list of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    tasks: Vec<Task>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tasks in order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a pending task and returns it.
    #[instrument(skip(self))]
    pub fn add(&mut self, description: &str) -> &Task {
        debug!("Adding task");
        self.tasks.push(Task::new(description));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Removes and returns the task at `index`.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> Result<Task, TodoError> {
        if index >= self.tasks.len() {
            warn!(len = self.tasks.len(), "Remove index out of range");
            return Err(TodoError::OutOfRange { index });
        }
        Ok(self.tasks.remove(index))
    }

    /// Marks the task at `index` as completed and returns it.
    #[instrument(skip(self))]
    pub fn complete(&mut self, index: usize) -> Result<&Task, TodoError> {
        let len = self.tasks.len();
        let task = self.tasks.get_mut(index).ok_or_else(|| {
            warn!(len, "Complete index out of range");
            TodoError::OutOfRange { index }
        })?;
        task.completed = true;
        Ok(task)
    }

    /// Renders the list, one `index: description [status]` line per task.
    pub fn render(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks available.\n".to_string();
        }
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}: {} [{}]\n", i, task.description, task.status_label()))
            .collect()
    }
}

/// One to-do command from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a task.
    Add(String),
    /// Remove the task at an index.
    Remove(usize),
    /// Print the list.
    View,
    /// Mark the task at an index as done.
    Complete(usize),
}

/// Loads the list, applies `action`, saves if it changed, and reports to `out`.
///
/// An out-of-range index is reported to `out` and leaves the file untouched;
/// it is not an error.
#[instrument(skip(store, out), fields(path = %store.path().display()))]
pub fn execute(action: &TodoAction, store: &TodoStore, out: &mut impl io::Write) -> anyhow::Result<()> {
    let mut list = store.load()?;

    let changed = match action {
        TodoAction::Add(description) => {
            let task = list.add(description);
            writeln!(out, "Added task: {}", task.description)?;
            true
        }
        TodoAction::Remove(index) => match list.remove(*index) {
            Ok(task) => {
                writeln!(out, "Removed task: {}", task.description)?;
                true
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                false
            }
        },
        TodoAction::View => {
            write!(out, "{}", list.render())?;
            false
        }
        TodoAction::Complete(index) => match list.complete(*index) {
            Ok(task) => {
                writeln!(out, "Marked task as completed: {}", task.description)?;
                true
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                false
            }
        },
    };

    if changed {
        store.save(&list)?;
    }
    info!(changed, "Todo command finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_render() {
        let mut list = TodoList::new();
        assert_eq!(list.render(), "No tasks available.\n");

        list.add("buy milk");
        list.add("walk dog");
        list.complete(1).unwrap();
        assert_eq!(list.render(), "0: buy milk [Pending]\n1: walk dog [Done]\n");
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        assert_eq!(list.remove(0).unwrap().description, "a");
        assert_eq!(list.tasks()[0].description, "b");
        assert_eq!(list.tasks().len(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let mut list = TodoList::new();
        list.add("only");
        assert_eq!(list.remove(1), Err(TodoError::OutOfRange { index: 1 }));
        assert_eq!(list.complete(5), Err(TodoError::OutOfRange { index: 5 }));
        assert_eq!(
            TodoError::OutOfRange { index: 5 }.to_string(),
            "Task index 5 is out of range."
        );
        assert_eq!(list.tasks().len(), 1);
    }
}
