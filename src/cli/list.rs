//! todo list / list-done / list-undone command implementations

use crate::config::Config;
use crate::error::Result;
use crate::output::format_task_list;
use crate::store::Store;
use crate::task;

/// Which slice of the collection to display.
#[derive(Debug, Clone, Copy)]
pub enum Filter {
    All,
    Done,
    Undone,
}

pub struct ListOptions {
    pub filter: Filter,
    pub config: Config,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let store = Store::new(&opts.config.file);
    let tasks = store.load()?;

    let rendered = match opts.filter {
        Filter::All => format_task_list("All tasks:", &tasks),
        Filter::Done => format_task_list("Done tasks:", task::done_tasks(&tasks)),
        Filter::Undone => format_task_list("Undone tasks:", task::undone_tasks(&tasks)),
    };

    println!("{rendered}");
    Ok(())
}
