mod args;
mod config;
mod reader;
mod shell;
mod writer;

use shell::Shell;

use tbl::{Ledger, Result};

use std::io;

fn main() -> Result {
    let config = config::configure_app()?;

    log::debug!("Application configured: {config:?}");

    let stdin = io::stdin();
    let ledger = Ledger::with_policy(config.policy);
    let mut shell = Shell::new(stdin.lock(), io::stdout(), ledger);

    shell.run()?;

    log::debug!("Session closed, in-memory ledger discarded");

    Ok(())
}
