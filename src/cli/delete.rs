//! todo delete command implementation

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use crate::task::{self, TaskId};

pub struct DeleteOptions {
    pub id: TaskId,
    pub config: Config,
}

pub fn run(opts: DeleteOptions) -> Result<()> {
    let store = Store::new(&opts.config.file);
    let mut tasks = store.load()?;

    task::delete(&mut tasks, opts.id);
    store.save(&tasks)?;

    println!("Task {} deleted.", opts.id);
    Ok(())
}
