//! Binary entrypoint for the radix CLI.
use clap::Parser;
use radix_cli::cli::Cli;
use radix_cli::config::{init_logging, CliConfig};

fn main() {
    let cli = Cli::parse();
    // Colour and log level can be overridden with RADIX_NO_COLOR / RADIX_LOG
    let config = CliConfig::resolve(cli.verbose, cli.plain);
    if let Err(error) = init_logging(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }

    let exit_code = match radix_cli::run(&cli, &config) {
        Ok(outcome) => {
            if outcome.is_valid || outcome.json {
                println!("{}", outcome.text);
            } else {
                eprintln!("{}", outcome.text);
            }
            outcome.exit_code()
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
