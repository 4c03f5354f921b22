use std::process::exit;

use clap::Parser;
use env_logger::Env;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = pixelhide_core::Result<T>;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();

    let result = match args.command {
        Commands::Inject(cmd) => cmd.run(),
        Commands::Extract(cmd) => cmd.run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        exit(1);
    }
}
