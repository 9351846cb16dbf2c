use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kalends_pattern::Adjustment;

/// Kalends time-domain tool.
#[derive(Parser)]
#[command(
    name = "kalends",
    version,
    about = "Pack and unpack calendar times in custom time domains"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML file with additional domains.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Pack a time into its index.
    Pack(PackArgs),
    /// Unpack an index into its time.
    Unpack(UnpackArgs),
    /// List the times between two bounds.
    Range(RangeArgs),
    /// Compare two times, possibly from different domains.
    Compare(CompareArgs),
    /// List the known domains.
    Domains,
}

/// Arguments for the `pack` subcommand.
#[derive(clap::Args)]
pub struct PackArgs {
    /// Domain label.
    #[arg(short, long)]
    pub domain: String,

    /// Time text, e.g. "2008-06-25 12:00".
    pub time: String,

    /// How to resolve a time the domain does not contain.
    #[arg(short, long)]
    pub adjust: Option<Adjustment>,
}

/// Arguments for the `unpack` subcommand.
#[derive(clap::Args)]
pub struct UnpackArgs {
    /// Domain label.
    #[arg(short, long)]
    pub domain: String,

    /// Index to unpack.
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Domain label.
    #[arg(short, long)]
    pub domain: String,

    /// First time of the range.
    pub first: String,

    /// Last time of the range.
    pub last: String,

    /// How to resolve bounds the domain does not contain.
    #[arg(short, long)]
    pub adjust: Option<Adjustment>,

    /// Print at most this many times.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `compare` subcommand.
#[derive(clap::Args)]
pub struct CompareArgs {
    /// Domain label of the first time.
    pub left_domain: String,

    /// First time text.
    pub left: String,

    /// Domain label of the second time.
    pub right_domain: String,

    /// Second time text.
    pub right: String,
}
