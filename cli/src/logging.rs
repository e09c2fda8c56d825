use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Result;
use env_logger::{Builder, Env, Target};

const LOG_FILE_NAME: &str = "repcal.log";

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("warn"))
}

/// One-shot commands log to stderr.
pub fn init_stderr() -> Result<()> {
    builder().target(Target::Stderr).try_init()?;
    Ok(())
}

/// The TUI owns the terminal, so its logs are appended to a file in the
/// data directory instead.
pub fn init_file(data_dir: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE_NAME))?;
    builder()
        .target(Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()?;
    Ok(())
}
