mod app;
mod cli;
mod config;
mod http;

#[cfg(test)]
mod testutil;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Listings go to stdout; diagnostics stay on stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();
    app::run(cli)
}
