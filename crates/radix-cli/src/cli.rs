//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};
use radix_core::Base;

#[derive(Parser, Debug)]
#[command(
    name = "radix",
    version,
    about = "Convert numbers between binary, octal, decimal and hexadecimal",
    long_about = "Convert numbers between binary, octal, decimal and hexadecimal,\n\
                  showing the positional expansion and repeated division used.\n\n\
                  Bases may be given as 2, 8, 10, 16 or by name (bin, oct, dec, hex)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). Overrides RADIX_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable ANSI styling (same as setting RADIX_NO_COLOR).
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a value from one base to another, with steps.
    Convert(ConvertArgs),

    /// Show a value in every supported base.
    All(AllArgs),

    /// List supported number systems and conversion pairs.
    Systems,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// The numeral; several words are joined, spaces are ignored.
    #[arg(value_name = "VALUE", required = true, num_args = 1..)]
    pub value: Vec<String>,

    /// Source base.
    #[arg(short, long, default_value = "decimal")]
    pub from: Base,

    /// Target base.
    #[arg(short, long, default_value = "binary")]
    pub to: Base,

    /// Print the result structure as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print only the result line.
    #[arg(long = "no-steps")]
    pub no_steps: bool,
}

#[derive(Parser, Debug)]
pub struct AllArgs {
    /// The numeral; several words are joined, spaces are ignored.
    #[arg(value_name = "VALUE", required = true, num_args = 1..)]
    pub value: Vec<String>,

    /// Source base.
    #[arg(short, long, default_value = "decimal")]
    pub from: Base,

    /// Print the result structure as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Join positional words back into one numeral.
pub fn joined(words: &[String]) -> String {
    words.join(" ")
}
