//! Command-line interface for todo
//!
//! This module defines the CLI structure using clap derive macros.
//! Each command group is implemented in its own submodule.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

mod add;
mod count;
mod delete;
mod list;
mod mark;
mod update;

/// todo - flat-file task list manager
///
/// Tasks live in a line-delimited JSON file. Every invocation loads the whole
/// file, applies one operation, and rewrites it.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Path to the task file (defaults to ./todos.txt)
    #[arg(long, global = true, env = "TODO_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title, joined with spaces
        title: Vec<String>,
    },

    /// Print all tasks
    List,

    /// Mark matching task(s) as done
    Done {
        /// Task id
        id: u64,
    },

    /// Mark matching task(s) as undone
    Undone {
        /// Task id
        id: u64,
    },

    /// Print done tasks
    ListDone,

    /// Print undone tasks
    ListUndone,

    /// Remove matching task(s)
    Delete {
        /// Task id
        id: u64,
    },

    /// Replace the title of matching task(s)
    Update {
        /// Task id
        id: u64,

        /// New title, joined with spaces
        title: Vec<String>,
    },

    /// Print the number of done tasks
    CountDone,

    /// Anything unrecognized lands here and reports an invalid command
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        // Environment is read exactly once, here, and threaded through.
        let config = Config::from_env(self.file);

        match self.command {
            Some(Commands::Add { title }) => add::run(add::AddOptions { title, config }),
            Some(Commands::List) => list::run(list::ListOptions {
                filter: list::Filter::All,
                config,
            }),
            Some(Commands::Done { id }) => mark::run(mark::MarkOptions {
                id,
                done: true,
                config,
            }),
            Some(Commands::Undone { id }) => mark::run(mark::MarkOptions {
                id,
                done: false,
                config,
            }),
            Some(Commands::ListDone) => list::run(list::ListOptions {
                filter: list::Filter::Done,
                config,
            }),
            Some(Commands::ListUndone) => list::run(list::ListOptions {
                filter: list::Filter::Undone,
                config,
            }),
            Some(Commands::Delete { id }) => delete::run(delete::DeleteOptions { id, config }),
            Some(Commands::Update { id, title }) => {
                update::run(update::UpdateOptions { id, title, config })
            }
            Some(Commands::CountDone) => count::run(count::CountOptions { config }),
            Some(Commands::External(_)) | None => {
                println!("Invalid command.");
                Ok(())
            }
        }
    }
}
