use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use gsk_core::HttpClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries server output
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("gsk={}", level).parse()?)
                .add_directive(format!("gsk_core={}", level).parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let file_config = config::load_file_config(cli.config.as_deref())?;
    let client_config = config::resolve_client_config(&cli, &file_config)?;
    let client = HttpClient::new(client_config);

    debug!("Running {:?}", cli.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&cli.command, &client, &mut out)?;
    out.flush()?;

    Ok(())
}
