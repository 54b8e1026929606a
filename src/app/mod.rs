mod catalog;
mod error;
mod loader;
mod player;
mod queue;
mod resolver;
mod router;
mod shell;


use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;

use self::shell::StdoutShell;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.endpoint, cli.timeout_secs);
    let mut shell = StdoutShell::new();
    router::route(&config, &mut shell, cli.request.as_deref().unwrap_or(""));
    Ok(())
}
