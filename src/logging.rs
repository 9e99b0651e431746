use std::fs::File;
use std::path::Path;

use env_logger::{Env, Target};

use crate::error::Result;

/// Send log output to `path`.  The terminal belongs to the game screen, so
/// without a log file nothing is installed and the `log` macros stay silent.
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
