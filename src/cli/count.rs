//! todo count-done command implementation

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use crate::task;

pub struct CountOptions {
    pub config: Config,
}

pub fn run(opts: CountOptions) -> Result<()> {
    let store = Store::new(&opts.config.file);
    let tasks = store.load()?;

    println!("Total done tasks: {}", task::count_done(&tasks));
    Ok(())
}
