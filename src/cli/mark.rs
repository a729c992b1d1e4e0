//! todo done / undone command implementations

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use crate::task::{self, TaskId};

pub struct MarkOptions {
    pub id: TaskId,
    pub done: bool,
    pub config: Config,
}

pub fn run(opts: MarkOptions) -> Result<()> {
    let store = Store::new(&opts.config.file);
    let mut tasks = store.load()?;

    // Zero matches is still a success: the file is rewritten unchanged.
    task::set_done(&mut tasks, opts.id, opts.done);
    store.save(&tasks)?;

    let state = if opts.done { "done" } else { "undone" };
    println!("Task {} marked as {state}.", opts.id);
    Ok(())
}
