//! todo update command implementation

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use crate::task::{self, TaskId};

pub struct UpdateOptions {
    pub id: TaskId,
    pub title: Vec<String>,
    pub config: Config,
}

pub fn run(opts: UpdateOptions) -> Result<()> {
    let store = Store::new(&opts.config.file);
    let mut tasks = store.load()?;

    task::update_title(&mut tasks, opts.id, &opts.title.join(" "));
    store.save(&tasks)?;

    println!("Task {} updated.", opts.id);
    Ok(())
}
