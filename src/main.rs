mod cli;
mod compare_cmd;
mod config;
mod convert;
mod domains_cmd;
mod logging;
mod pack_cmd;
mod range_cmd;
mod session;
mod unpack_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = Session::open(cli.config.as_deref())?;
    match cli.command {
        Command::Pack(args) => pack_cmd::run(&session, args),
        Command::Unpack(args) => unpack_cmd::run(&session, args),
        Command::Range(args) => range_cmd::run(&session, args),
        Command::Compare(args) => compare_cmd::run(&session, args),
        Command::Domains => domains_cmd::run(&session),
    }
}
