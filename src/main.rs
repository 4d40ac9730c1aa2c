mod agenda_cmd;
mod cli;
mod config;
mod convert;
mod events_file;
mod logging;
mod render_cmd;
mod svg;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render_cmd::run(args),
        Command::Agenda(args) => agenda_cmd::run(args),
    }
}
