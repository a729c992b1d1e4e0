//! Task model, record codec, and the pure operations over a task collection.
//!
//! A task is persisted as one compact JSON object per line. The collection is
//! always manipulated as a whole: callers load everything through
//! [`crate::store::Store`], apply one of the functions below, and save the
//! result back.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Canonical task identifier.
///
/// Assigned as `tasks.len() + 1` at creation time. Deleting a task frees its
/// slot, so a later add can reuse the id; operations that target an id
/// therefore affect every matching task, not just the first.
pub type TaskId = u64;

/// A single unit of work.
///
/// Field order is the persisted order in the record file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub assignee: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            assignee: assignee.into(),
            done: false,
        }
    }

    /// Encode this task as one self-contained record line.
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a record line.
    ///
    /// Unknown extra fields are ignored; a missing field or wrong type is a
    /// parse failure. Callers attach file and line context.
    pub fn from_line(line: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Id for the next task to be created.
pub fn next_id(tasks: &[Task]) -> TaskId {
    tasks.len() as TaskId + 1
}

/// Append a new undone task with the next positional id.
pub fn add(tasks: &mut Vec<Task>, title: impl Into<String>, assignee: impl Into<String>) -> TaskId {
    let id = next_id(tasks);
    tasks.push(Task::new(id, title, assignee));
    id
}

/// Set the done flag on every task matching `id`.
///
/// Zero matches is a no-op; the caller still reports success.
pub fn set_done(tasks: &mut [Task], id: TaskId, done: bool) {
    for task in tasks.iter_mut().filter(|task| task.id == id) {
        task.done = done;
    }
}

/// Replace the title on every task matching `id`. No-op on zero matches.
pub fn update_title(tasks: &mut [Task], id: TaskId, title: &str) {
    for task in tasks.iter_mut().filter(|task| task.id == id) {
        task.title = title.to_string();
    }
}

/// Remove every task matching `id`. Surviving ids are untouched.
pub fn delete(tasks: &mut Vec<Task>, id: TaskId) {
    tasks.retain(|task| task.id != id);
}

/// Order-preserving view of the done tasks.
pub fn done_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| task.done).collect()
}

/// Order-preserving view of the undone tasks.
pub fn undone_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| !task.done).collect()
}

/// Count of tasks with the done flag set.
pub fn count_done(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.done).count()
}
