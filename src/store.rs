//! Full-collection persistence against the task file.
//!
//! Every invocation loads the whole file, mutates the collection in memory,
//! and rewrites the file completely. Writes go through a temp file + rename
//! so readers never observe a torn file. There is no locking: two concurrent
//! invocations can race, and the last save wins (lost update). Multi-writer
//! safety is out of scope.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::task::Task;

/// Store for the task collection, bound to one file path.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full task collection.
    ///
    /// A missing file is an empty collection. Blank lines are skipped. The
    /// first malformed record aborts the whole read with the file path and
    /// 1-based line number.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "task file missing, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = Task::from_line(line).map_err(|source| Error::MalformedRecord {
                path: self.path.clone(),
                line: index + 1,
                source,
            })?;
            tasks.push(task);
        }

        debug!(count = tasks.len(), path = %self.path.display(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the file with the full collection, one record per line,
    /// trailing newline included. An empty collection writes a lone newline.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let lines = tasks
            .iter()
            .map(Task::to_line)
            .collect::<Result<Vec<_>>>()?;
        let mut content = lines.join("\n");
        content.push('\n');

        write_atomic(&self.path, content.as_bytes())?;
        debug!(count = tasks.len(), path = %self.path.display(), "saved tasks");
        Ok(())
    }
}

/// Write data atomically using temp file + rename.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
