use std::io;

use clap::Parser;
use color_eyre::Result;

use hilite::cli::{self, Args};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only wired up in debug builds (RUST_LOG=debug to see it)
    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    cli::run(&args, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;

    Ok(())
}
