//! todo add command implementation

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use crate::task;

pub struct AddOptions {
    pub title: Vec<String>,
    pub config: Config,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let store = Store::new(&opts.config.file);
    let mut tasks = store.load()?;

    task::add(&mut tasks, opts.title.join(" "), opts.config.assignee.as_str());
    store.save(&tasks)?;

    println!("Task added successfully.");
    Ok(())
}
