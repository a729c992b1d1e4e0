//! todo - Flat-file task list manager
//!
//! This library provides the core functionality for the todo CLI: a task
//! collection persisted as one JSON record per line in a single text file,
//! loaded in full at the start of every invocation and rewritten in full
//! after every mutating command.
//!
//! # Core Concepts
//!
//! - **Task**: a unit of work with id, title, assignee, and done flag
//! - **Record**: the single-line JSON representation of one task
//! - **Store**: full-collection load/save against the task file
//! - **Dispatcher**: maps one CLI subcommand to one task operation
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: task file path and default assignee, resolved at startup
//! - `error`: error types and result aliases
//! - `output`: human-readable task list rendering
//! - `store`: full-file persistence with atomic rewrites
//! - `task`: task model, record codec, and pure collection operations

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod store;
pub mod task;

pub use error::{Error, Result};
