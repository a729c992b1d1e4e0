use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch working directory for one CLI scenario.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("todos.txt")
    }

    pub fn write_store(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.store_path(), contents)
    }

    pub fn read_store(&self) -> String {
        fs::read_to_string(self.store_path()).expect("read todos.txt")
    }

    /// Parse the persisted records, skipping blank lines.
    pub fn store_records(&self) -> Vec<serde_json::Value> {
        self.read_store()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("record"))
            .collect()
    }
}

/// Command for the todo binary, scrubbed of ambient configuration.
pub fn todo_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").expect("binary");
    cmd.current_dir(dir.path());
    cmd.env_remove("TODO_USERNAME");
    cmd.env_remove("TODO_FILE");
    cmd
}
